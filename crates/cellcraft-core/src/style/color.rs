//! Color mirror

use cellcraft_ooxml::Color;

use super::palette::{apply_tint, clamp_tint, Argb, Palette, ThemeColorIndex};
use super::pool::StyleKeyed;

/// Where a color comes from
///
/// At most one indirect reference is the source of truth. Tints are only
/// meaningful for theme and indexed references.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Automatic (system) color
    Auto,
    /// Literal ARGB; the display color is the value
    Rgb,
    /// Legacy indexed palette slot
    Indexed { index: u32, tint: Option<f64> },
    /// Theme role
    Theme { index: u32, tint: Option<f64> },
}

/// A color as written in a style: a resolved display color plus the
/// reference it was resolved from
#[derive(Debug, Clone, PartialEq)]
pub struct SlColor {
    display: Argb,
    source: Option<ColorSource>,
    palette: Palette,
}

impl SlColor {
    /// Blank color resolving against `palette`
    pub fn new(palette: &Palette) -> Self {
        Self {
            display: Argb::BLACK,
            source: None,
            palette: palette.clone(),
        }
    }

    /// Literal color
    pub fn from_argb(palette: &Palette, color: Argb) -> Self {
        let mut c = Self::new(palette);
        c.set_color(color);
        c
    }

    /// Theme color with a tint
    pub fn from_theme(palette: &Palette, index: ThemeColorIndex, tint: f64) -> Self {
        let mut c = Self::new(palette);
        c.set_theme_color(index, tint);
        c
    }

    /// Set a literal color
    pub fn set_color(&mut self, color: Argb) {
        self.display = color;
        self.source = Some(ColorSource::Rgb);
    }

    /// Set a literal color, lightened or darkened by `tint`
    ///
    /// The tint is baked into the stored value.
    pub fn set_color_with_tint(&mut self, color: Argb, tint: f64) {
        self.set_color(apply_tint(color, tint));
    }

    /// Set a theme color; the tint is clamped to [-1, 1]
    pub fn set_theme_color(&mut self, index: ThemeColorIndex, tint: f64) {
        self.set_theme_index(index.index(), Some(tint));
    }

    /// Set a theme color by raw index
    pub fn set_theme_index(&mut self, index: u32, tint: Option<f64>) {
        let tint = tint.map(clamp_tint);
        self.display = self.palette.resolve_theme(index, tint);
        self.source = Some(ColorSource::Theme { index, tint });
    }

    /// Set an indexed palette color
    pub fn set_indexed_color(&mut self, index: u32) {
        self.set_indexed_with_tint(index, None);
    }

    /// Set an indexed palette color with a tint
    pub fn set_indexed_with_tint(&mut self, index: u32, tint: Option<f64>) {
        let tint = tint.map(clamp_tint);
        self.display = self.palette.resolve_indexed(index, tint);
        self.source = Some(ColorSource::Indexed { index, tint });
    }

    /// Use the automatic color
    pub fn set_auto(&mut self) {
        self.display = Argb::BLACK;
        self.source = Some(ColorSource::Auto);
    }

    /// Back to blank
    pub fn clear(&mut self) {
        self.display = Argb::BLACK;
        self.source = None;
    }

    /// Resolved color as it would be displayed
    pub fn display_color(&self) -> Argb {
        self.display
    }

    pub fn source(&self) -> Option<&ColorSource> {
        self.source.as_ref()
    }

    pub fn theme_index(&self) -> Option<u32> {
        match self.source {
            Some(ColorSource::Theme { index, .. }) => Some(index),
            _ => None,
        }
    }

    pub fn tint(&self) -> Option<f64> {
        match self.source {
            Some(ColorSource::Theme { tint, .. }) | Some(ColorSource::Indexed { tint, .. }) => {
                tint
            }
            _ => None,
        }
    }

    /// True when no color has been set
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    /// Palette snapshot this color resolves against
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Read a color element
    ///
    /// When several attributes are present, `rgb` wins over `theme`, which
    /// wins over `indexed`, which wins over `auto`.
    pub fn from_element(element: &Color, palette: &Palette) -> Self {
        let mut c = Self::new(palette);

        if let Some(rgb) = &element.rgb {
            match Argb::from_hex(rgb) {
                Some(argb) => {
                    c.set_color(argb);
                    return c;
                }
                None => log::warn!("ignoring invalid rgb color {:?}", rgb),
            }
        }

        if let Some(index) = element.theme {
            c.set_theme_index(index, element.tint);
        } else if let Some(index) = element.indexed {
            c.set_indexed_with_tint(index, element.tint);
        } else if element.auto == Some(true) {
            c.set_auto();
        }
        c
    }

    /// Build the color element; a zero tint is not written
    pub fn to_element(&self) -> Color {
        let nonzero = |t: &Option<f64>| t.filter(|t| *t != 0.0);
        match &self.source {
            None => Color::default(),
            Some(ColorSource::Auto) => Color {
                auto: Some(true),
                ..Default::default()
            },
            Some(ColorSource::Rgb) => Color::rgb(self.display.to_hex()),
            Some(ColorSource::Theme { index, tint }) => Color::theme(*index, nonzero(tint)),
            Some(ColorSource::Indexed { index, tint }) => Color {
                indexed: Some(*index),
                tint: nonzero(tint),
                ..Default::default()
            },
        }
    }
}

impl Default for SlColor {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlColor {
    type Key = Color;

    fn to_key(&self) -> Color {
        self.to_element()
    }

    fn from_key(key: &Color, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}
