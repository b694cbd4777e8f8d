//! Font mirror

use cellcraft_ooxml::{Font, FontSchemeValues, UnderlineValues, VerticalAlignmentRunValues};

use super::color::SlColor;
use super::overlay;
use super::palette::{Argb, Palette, ThemeColorIndex};
use super::pool::StyleKeyed;

/// Latin typeface of the default theme's major (heading) font
pub const MAJOR_FONT: &str = "Cambria";
/// Latin typeface of the default theme's minor (body) font
pub const MINOR_FONT: &str = "Calibri";
/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Font settings; every property is optional
#[derive(Debug, Clone, PartialEq)]
pub struct SlFont {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: Option<String>,
    /// Theme font the name was taken from
    pub scheme: Option<FontSchemeValues>,
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strike: Option<bool>,
    pub outline: Option<bool>,
    pub shadow: Option<bool>,
    pub condense: Option<bool>,
    pub extend: Option<bool>,
    pub underline: Option<UnderlineValues>,
    /// Superscript/subscript
    pub vertical_align: Option<VerticalAlignmentRunValues>,
    /// Font family class (0-14)
    pub family: Option<i32>,
    pub charset: Option<i32>,
    /// Blank when unset
    pub color: SlColor,
}

impl SlFont {
    /// Blank font
    pub fn new(palette: &Palette) -> Self {
        Self {
            name: None,
            scheme: None,
            size: None,
            bold: None,
            italic: None,
            strike: None,
            outline: None,
            shadow: None,
            condense: None,
            extend: None,
            underline: None,
            vertical_align: None,
            family: None,
            charset: None,
            color: SlColor::new(palette),
        }
    }

    /// Workbook default font: minor scheme Calibri 11pt in the Dark 1 color
    pub fn default_font(palette: &Palette) -> Self {
        let mut font = Self::new(palette);
        font.set_font_scheme(FontSchemeValues::Minor, DEFAULT_FONT_SIZE);
        font.family = Some(2);
        font.set_font_theme_color(ThemeColorIndex::Dark1, 0.0);
        font
    }

    /// Set a named font and size, dropping any theme font scheme
    pub fn set_font<S: Into<String>>(&mut self, name: S, size: f64) {
        self.name = Some(name.into());
        self.scheme = None;
        self.size = valid_size(Some(size));
    }

    /// Use the theme's major or minor font
    ///
    /// `FontSchemeValues::None` keeps the current name and only clears the
    /// scheme.
    pub fn set_font_scheme(&mut self, scheme: FontSchemeValues, size: f64) {
        match scheme {
            FontSchemeValues::Major => {
                self.name = Some(MAJOR_FONT.to_string());
                self.scheme = Some(scheme);
            }
            FontSchemeValues::Minor => {
                self.name = Some(MINOR_FONT.to_string());
                self.scheme = Some(scheme);
            }
            FontSchemeValues::None => self.scheme = None,
        }
        self.size = valid_size(Some(size));
    }

    pub fn set_font_color(&mut self, color: Argb) {
        self.color.set_color(color);
    }

    pub fn set_font_theme_color(&mut self, index: ThemeColorIndex, tint: f64) {
        self.color.set_theme_color(index, tint);
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = Some(bold);
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = Some(italic);
    }

    pub fn set_strike(&mut self, strike: bool) {
        self.strike = Some(strike);
    }

    pub fn set_outline(&mut self, outline: bool) {
        self.outline = Some(outline);
    }

    pub fn set_shadow(&mut self, shadow: bool) {
        self.shadow = Some(shadow);
    }

    pub fn set_condense(&mut self, condense: bool) {
        self.condense = Some(condense);
    }

    pub fn set_extend(&mut self, extend: bool) {
        self.extend = Some(extend);
    }

    pub fn set_underline(&mut self, underline: UnderlineValues) {
        self.underline = Some(underline);
    }

    pub fn set_vertical_align(&mut self, align: VerticalAlignmentRunValues) {
        self.vertical_align = Some(align);
    }

    /// True when nothing is set
    pub fn is_empty(&self) -> bool {
        self.to_element() == Font::default()
    }

    /// Overlay every property `other` has set
    pub fn merge(&mut self, other: &SlFont) {
        if other.name.is_some() {
            self.name = other.name.clone();
            self.scheme = other.scheme;
        } else if other.scheme.is_some() {
            self.scheme = other.scheme;
        }
        overlay(&mut self.size, other.size);
        overlay(&mut self.bold, other.bold);
        overlay(&mut self.italic, other.italic);
        overlay(&mut self.strike, other.strike);
        overlay(&mut self.outline, other.outline);
        overlay(&mut self.shadow, other.shadow);
        overlay(&mut self.condense, other.condense);
        overlay(&mut self.extend, other.extend);
        overlay(&mut self.underline, other.underline);
        overlay(&mut self.vertical_align, other.vertical_align);
        overlay(&mut self.family, other.family);
        overlay(&mut self.charset, other.charset);
        if !other.color.is_empty() {
            self.color = other.color.clone();
        }
    }

    pub fn from_element(element: &Font, palette: &Palette) -> Self {
        let color = match &element.color {
            Some(c) => SlColor::from_element(c, palette),
            None => SlColor::new(palette),
        };
        Self {
            name: element.name.clone(),
            scheme: element.scheme,
            size: valid_size(element.size),
            bold: element.bold,
            italic: element.italic,
            strike: element.strike,
            outline: element.outline,
            shadow: element.shadow,
            condense: element.condense,
            extend: element.extend,
            underline: element.underline,
            vertical_align: element.vertical_align,
            family: element.family,
            charset: element.charset,
            color,
        }
    }

    pub fn to_element(&self) -> Font {
        Font {
            bold: self.bold,
            italic: self.italic,
            strike: self.strike,
            condense: self.condense,
            extend: self.extend,
            outline: self.outline,
            shadow: self.shadow,
            underline: self.underline,
            vertical_align: self.vertical_align,
            size: valid_size(self.size),
            color: (!self.color.is_empty()).then(|| self.color.to_element()),
            name: self.name.clone(),
            family: self.family,
            charset: self.charset,
            scheme: self.scheme,
        }
    }
}

/// Font sizes must be positive and finite; anything else leaves the size unset
fn valid_size(size: Option<f64>) -> Option<f64> {
    size.filter(|s| s.is_finite() && *s > 0.0)
}

impl Default for SlFont {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlFont {
    type Key = Font;

    fn to_key(&self) -> Font {
        self.to_element()
    }

    fn from_key(key: &Font, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellcraft_ooxml::{Color, XmlPart};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_font() {
        let font = SlFont::default_font(&Palette::default());
        assert_eq!(
            font.to_element().to_xml().unwrap(),
            concat!(
                r#"<font><sz val="11"/><color theme="1"/><name val="Calibri"/>"#,
                r#"<family val="2"/><scheme val="minor"/></font>"#
            )
        );
    }

    #[test]
    fn test_set_font_clears_scheme() {
        let mut font = SlFont::default_font(&Palette::default());
        font.set_font("Arial", 9.5);
        assert_eq!(font.name.as_deref(), Some("Arial"));
        assert_eq!(font.scheme, None);
        assert_eq!(font.size, Some(9.5));

        font.set_font_scheme(FontSchemeValues::Major, 18.0);
        assert_eq!(font.name.as_deref(), Some(MAJOR_FONT));
        assert_eq!(font.scheme, Some(FontSchemeValues::Major));
    }

    #[test]
    fn test_blank_font_writes_nothing() {
        let font = SlFont::default();
        assert!(font.is_empty());
        assert_eq!(font.to_element().to_xml().unwrap(), "<font/>");
    }

    #[test]
    fn test_merge_overlays_set_properties() {
        let palette = Palette::default();
        let mut base = SlFont::default_font(&palette);
        base.set_italic(true);

        let mut delta = SlFont::new(&palette);
        delta.set_bold(true);
        delta.set_font_color(Argb::from_u32(0x9C0006));

        base.merge(&delta);
        assert_eq!(base.bold, Some(true));
        assert_eq!(base.italic, Some(true));
        assert_eq!(base.name.as_deref(), Some(MINOR_FONT));
        assert_eq!(base.to_element().color, Some(Color::rgb("FF9C0006")));
    }

    #[test]
    fn test_element_round_trip() {
        let palette = Palette::default();
        let mut font = SlFont::new(&palette);
        font.set_font("Consolas", 10.0);
        font.set_underline(UnderlineValues::DoubleAccounting);
        font.set_vertical_align(VerticalAlignmentRunValues::Subscript);
        font.set_strike(false);
        font.set_font_theme_color(ThemeColorIndex::Accent3, -0.5);

        let reread = SlFont::from_element(&font.to_element(), &palette);
        assert_eq!(reread, font);
        assert_eq!(reread.to_key(), font.to_key());
    }

    #[test]
    fn test_nonpositive_size_dropped() {
        let element = Font {
            size: Some(0.0),
            ..Default::default()
        };
        assert_eq!(SlFont::from_element(&element, &Palette::default()).size, None);
    }

    #[test]
    fn test_invalid_size_keeps_key_round_trip() {
        let palette = Palette::default();
        for size in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let mut font = SlFont::new(&palette);
            font.set_font("Arial", size);
            assert_eq!(font.size, None, "{}", size);

            let key = font.to_key();
            assert_eq!(key.size, None);
            assert_eq!(SlFont::from_key(&key, &palette).to_key(), key);

            font.set_font_scheme(FontSchemeValues::Major, size);
            assert_eq!(font.size, None, "{}", size);
        }

        let mut font = SlFont::new(&palette);
        font.size = Some(-1.0);
        assert_eq!(font.to_element().size, None);
    }
}
