//! Fill mirror: pattern or gradient

use cellcraft_ooxml::{Fill, GradientFill, GradientStop, GradientValues, PatternFill, PatternValues};

use super::color::SlColor;
use super::palette::{Argb, Palette, ThemeColorIndex};
use super::pool::StyleKeyed;

/// Excel's built-in two-color gradient shadings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientShading {
    Horizontal1,
    Horizontal2,
    Horizontal3,
    Vertical1,
    Vertical2,
    Vertical3,
    DiagonalUp1,
    DiagonalUp2,
    DiagonalUp3,
    DiagonalDown1,
    DiagonalDown2,
    DiagonalDown3,
    FromCorner1,
    FromCorner2,
    FromCorner3,
    FromCorner4,
    FromCenter,
}

/// How the two colors of a shading are laid out as stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopLayout {
    /// color 1 at 0, color 2 at 1
    TwoStop,
    /// color 1 at 0 and 1, color 2 at 0.5
    Mirrored,
}

struct ShadingPreset {
    gradient_type: Option<GradientValues>,
    degree: Option<f64>,
    /// left, right, top, bottom
    bounds: Option<[f64; 4]>,
    layout: StopLayout,
}

const fn linear(degree: f64, layout: StopLayout) -> ShadingPreset {
    ShadingPreset {
        gradient_type: None,
        degree: Some(degree),
        bounds: None,
        layout,
    }
}

const fn path(bounds: [f64; 4]) -> ShadingPreset {
    ShadingPreset {
        gradient_type: Some(GradientValues::Path),
        degree: None,
        bounds: Some(bounds),
        layout: StopLayout::TwoStop,
    }
}

impl GradientShading {
    pub const ALL: [GradientShading; 17] = [
        GradientShading::Horizontal1,
        GradientShading::Horizontal2,
        GradientShading::Horizontal3,
        GradientShading::Vertical1,
        GradientShading::Vertical2,
        GradientShading::Vertical3,
        GradientShading::DiagonalUp1,
        GradientShading::DiagonalUp2,
        GradientShading::DiagonalUp3,
        GradientShading::DiagonalDown1,
        GradientShading::DiagonalDown2,
        GradientShading::DiagonalDown3,
        GradientShading::FromCorner1,
        GradientShading::FromCorner2,
        GradientShading::FromCorner3,
        GradientShading::FromCorner4,
        GradientShading::FromCenter,
    ];

    fn preset(self) -> ShadingPreset {
        use StopLayout::*;
        match self {
            GradientShading::Horizontal1 => linear(90.0, TwoStop),
            GradientShading::Horizontal2 => linear(270.0, TwoStop),
            GradientShading::Horizontal3 => linear(90.0, Mirrored),
            GradientShading::Vertical1 => linear(0.0, TwoStop),
            GradientShading::Vertical2 => linear(180.0, TwoStop),
            GradientShading::Vertical3 => linear(0.0, Mirrored),
            GradientShading::DiagonalUp1 => linear(45.0, TwoStop),
            GradientShading::DiagonalUp2 => linear(225.0, TwoStop),
            GradientShading::DiagonalUp3 => linear(45.0, Mirrored),
            GradientShading::DiagonalDown1 => linear(135.0, TwoStop),
            GradientShading::DiagonalDown2 => linear(315.0, TwoStop),
            GradientShading::DiagonalDown3 => linear(135.0, Mirrored),
            GradientShading::FromCorner1 => path([0.0, 0.0, 0.0, 0.0]),
            GradientShading::FromCorner2 => path([1.0, 1.0, 0.0, 0.0]),
            GradientShading::FromCorner3 => path([0.0, 0.0, 1.0, 1.0]),
            GradientShading::FromCorner4 => path([1.0, 1.0, 1.0, 1.0]),
            GradientShading::FromCenter => path([0.5, 0.5, 0.5, 0.5]),
        }
    }
}

/// Pattern fill settings
#[derive(Debug, Clone, PartialEq)]
pub struct SlPatternFill {
    pub pattern_type: Option<PatternValues>,
    pub foreground: SlColor,
    pub background: SlColor,
}

impl SlPatternFill {
    pub fn new(palette: &Palette) -> Self {
        Self {
            pattern_type: None,
            foreground: SlColor::new(palette),
            background: SlColor::new(palette),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_type.is_none() && self.foreground.is_empty() && self.background.is_empty()
    }
}

/// One gradient stop
#[derive(Debug, Clone, PartialEq)]
pub struct SlGradientStop {
    /// Position along the gradient, 0.0 to 1.0
    pub position: f64,
    pub color: SlColor,
}

/// Gradient fill settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlGradientFill {
    /// Unset means linear
    pub gradient_type: Option<GradientValues>,
    pub degree: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub stops: Vec<SlGradientStop>,
}

/// Which kind of fill is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    #[default]
    Pattern,
    Gradient,
}

/// Cell fill
///
/// Holds both a pattern and a gradient; `mode` selects which one is
/// written. Switching mode resets the settings of the other kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SlFill {
    mode: FillMode,
    pattern: SlPatternFill,
    gradient: SlGradientFill,
    palette: Palette,
}

impl SlFill {
    /// Blank pattern fill
    pub fn new(palette: &Palette) -> Self {
        Self {
            mode: FillMode::Pattern,
            pattern: SlPatternFill::new(palette),
            gradient: SlGradientFill::default(),
            palette: palette.clone(),
        }
    }

    pub fn mode(&self) -> FillMode {
        self.mode
    }

    fn pattern_mut(&mut self) -> &mut SlPatternFill {
        if self.mode == FillMode::Gradient {
            self.mode = FillMode::Pattern;
            self.gradient = SlGradientFill::default();
        }
        &mut self.pattern
    }

    fn gradient_mut(&mut self) -> &mut SlGradientFill {
        if self.mode == FillMode::Pattern {
            self.mode = FillMode::Gradient;
            self.pattern = SlPatternFill::new(&self.palette);
        }
        &mut self.gradient
    }

    /// Pattern settings, when the pattern is active
    pub fn pattern(&self) -> Option<&SlPatternFill> {
        (self.mode == FillMode::Pattern).then_some(&self.pattern)
    }

    /// Gradient settings, when the gradient is active
    pub fn gradient(&self) -> Option<&SlGradientFill> {
        (self.mode == FillMode::Gradient).then_some(&self.gradient)
    }

    /// Pattern fill with literal colors
    pub fn set_pattern(&mut self, pattern: PatternValues, foreground: Argb, background: Argb) {
        let p = self.pattern_mut();
        p.pattern_type = Some(pattern);
        p.foreground.set_color(foreground);
        p.background.set_color(background);
    }

    /// Solid fill; only the foreground color is written
    pub fn set_solid(&mut self, color: Argb) {
        let p = self.pattern_mut();
        p.pattern_type = Some(PatternValues::Solid);
        p.foreground.set_color(color);
        p.background.clear();
    }

    /// Solid fill in a theme color
    pub fn set_solid_theme(&mut self, index: ThemeColorIndex, tint: f64) {
        let p = self.pattern_mut();
        p.pattern_type = Some(PatternValues::Solid);
        p.foreground.set_theme_color(index, tint);
        p.background.clear();
    }

    pub fn set_pattern_type(&mut self, pattern: PatternValues) {
        self.pattern_mut().pattern_type = Some(pattern);
    }

    pub fn set_pattern_foreground_color(&mut self, color: Argb) {
        self.pattern_mut().foreground.set_color(color);
    }

    pub fn set_pattern_foreground_theme(&mut self, index: ThemeColorIndex, tint: f64) {
        self.pattern_mut().foreground.set_theme_color(index, tint);
    }

    pub fn set_pattern_background_color(&mut self, color: Argb) {
        self.pattern_mut().background.set_color(color);
    }

    pub fn set_pattern_background_theme(&mut self, index: ThemeColorIndex, tint: f64) {
        self.pattern_mut().background.set_theme_color(index, tint);
    }

    /// Replace the fill with a preset two-color gradient
    pub fn set_gradient(&mut self, shading: GradientShading, color1: Argb, color2: Argb) {
        let c1 = SlColor::from_argb(&self.palette, color1);
        let c2 = SlColor::from_argb(&self.palette, color2);
        self.set_gradient_colors(shading, c1, c2);
    }

    /// Replace the fill with a preset gradient between two theme colors
    pub fn set_gradient_theme(
        &mut self,
        shading: GradientShading,
        color1: ThemeColorIndex,
        color2: ThemeColorIndex,
    ) {
        let c1 = SlColor::from_theme(&self.palette, color1, 0.0);
        let c2 = SlColor::from_theme(&self.palette, color2, 0.0);
        self.set_gradient_colors(shading, c1, c2);
    }

    /// Replace the fill with a preset gradient between two colors
    pub fn set_gradient_colors(&mut self, shading: GradientShading, color1: SlColor, color2: SlColor) {
        let preset = shading.preset();
        let [left, right, top, bottom] = match preset.bounds {
            Some(b) => b.map(Some),
            None => [None; 4],
        };
        let stops = match preset.layout {
            StopLayout::TwoStop => vec![
                SlGradientStop {
                    position: 0.0,
                    color: color1,
                },
                SlGradientStop {
                    position: 1.0,
                    color: color2,
                },
            ],
            StopLayout::Mirrored => vec![
                SlGradientStop {
                    position: 0.0,
                    color: color1.clone(),
                },
                SlGradientStop {
                    position: 0.5,
                    color: color2,
                },
                SlGradientStop {
                    position: 1.0,
                    color: color1,
                },
            ],
        };
        *self.gradient_mut() = SlGradientFill {
            gradient_type: preset.gradient_type,
            degree: preset.degree,
            left,
            right,
            top,
            bottom,
            stops,
        };
    }

    /// Add a stop at `position` (clamped to [0, 1]), switching to a gradient
    pub fn append_gradient_stop(&mut self, position: f64, color: Argb) {
        let color = SlColor::from_argb(&self.palette, color);
        self.push_stop(position, color);
    }

    /// Add a theme-colored stop
    pub fn append_gradient_stop_theme(&mut self, position: f64, index: ThemeColorIndex, tint: f64) {
        let color = SlColor::from_theme(&self.palette, index, tint);
        self.push_stop(position, color);
    }

    fn push_stop(&mut self, position: f64, color: SlColor) {
        let position = clamp_position(position);
        self.gradient_mut()
            .stops
            .push(SlGradientStop { position, color });
    }

    pub fn clear_gradient_stops(&mut self) {
        self.gradient.stops.clear();
    }

    /// True for a blank pattern fill
    pub fn is_empty(&self) -> bool {
        self.mode == FillMode::Pattern && self.pattern.is_empty()
    }

    /// Overlay `other` when it is set
    ///
    /// Two pattern fills merge property by property; otherwise a non-blank
    /// `other` replaces this fill.
    pub fn merge(&mut self, other: &SlFill) {
        if other.is_empty() {
            return;
        }
        if self.mode == FillMode::Pattern && other.mode == FillMode::Pattern {
            let (mine, theirs) = (&mut self.pattern, &other.pattern);
            if theirs.pattern_type.is_some() {
                mine.pattern_type = theirs.pattern_type;
            }
            if !theirs.foreground.is_empty() {
                mine.foreground = theirs.foreground.clone();
            }
            if !theirs.background.is_empty() {
                mine.background = theirs.background.clone();
            }
        } else {
            self.mode = other.mode;
            self.pattern = other.pattern.clone();
            self.gradient = other.gradient.clone();
        }
    }

    pub fn from_element(element: &Fill, palette: &Palette) -> Self {
        let color = |c: &Option<cellcraft_ooxml::Color>| match c {
            Some(c) => SlColor::from_element(c, palette),
            None => SlColor::new(palette),
        };
        let mut fill = Self::new(palette);
        match element {
            Fill::Pattern(p) => {
                fill.pattern = SlPatternFill {
                    pattern_type: p.pattern_type,
                    foreground: color(&p.foreground_color),
                    background: color(&p.background_color),
                };
            }
            Fill::Gradient(g) => {
                *fill.gradient_mut() = SlGradientFill {
                    gradient_type: g.gradient_type,
                    degree: g.degree,
                    left: g.left,
                    right: g.right,
                    top: g.top,
                    bottom: g.bottom,
                    stops: g
                        .stops
                        .iter()
                        .map(|s| SlGradientStop {
                            position: clamp_position(s.position),
                            color: SlColor::from_element(&s.color, palette),
                        })
                        .collect(),
                };
            }
        }
        fill
    }

    pub fn to_element(&self) -> Fill {
        let color = |c: &SlColor| (!c.is_empty()).then(|| c.to_element());
        match self.mode {
            FillMode::Pattern => Fill::Pattern(PatternFill {
                pattern_type: self.pattern.pattern_type,
                foreground_color: color(&self.pattern.foreground),
                background_color: color(&self.pattern.background),
            }),
            FillMode::Gradient => {
                let g = &self.gradient;
                Fill::Gradient(GradientFill {
                    gradient_type: g.gradient_type,
                    degree: g.degree,
                    left: g.left,
                    right: g.right,
                    top: g.top,
                    bottom: g.bottom,
                    stops: g
                        .stops
                        .iter()
                        .map(|s| GradientStop {
                            position: s.position,
                            color: s.color.to_element(),
                        })
                        .collect(),
                })
            }
        }
    }
}

impl Default for SlFill {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlFill {
    type Key = Fill;

    fn to_key(&self) -> Fill {
        self.to_element()
    }

    fn from_key(key: &Fill, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}

fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        return 0.0;
    }
    let clamped = position.clamp(0.0, 1.0);
    if clamped != position {
        log::trace!("gradient stop position {} clamped to {}", position, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellcraft_ooxml::XmlPart;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solid_fill_xml() {
        let mut fill = SlFill::default();
        fill.set_solid(Argb::from_u32(0xFFC7CE));
        assert_eq!(
            fill.to_element().to_xml().unwrap(),
            r#"<fill><patternFill patternType="solid"><fgColor rgb="FFFFC7CE"/></patternFill></fill>"#
        );
    }

    #[test]
    fn test_every_shading_has_stops() {
        for shading in GradientShading::ALL {
            let mut fill = SlFill::default();
            fill.set_gradient(shading, Argb::WHITE, Argb::BLACK);
            let g = fill.gradient().unwrap();
            assert!(g.stops.len() >= 2, "{:?}", shading);
            assert_eq!(g.stops[0].position, 0.0);
            assert_eq!(g.stops.last().unwrap().position, 1.0);
        }
    }

    #[test]
    fn test_mirrored_shading() {
        let mut fill = SlFill::default();
        fill.set_gradient_theme(
            GradientShading::Vertical3,
            ThemeColorIndex::Light1,
            ThemeColorIndex::Accent1,
        );
        assert_eq!(
            fill.to_element().to_xml().unwrap(),
            concat!(
                r#"<fill><gradientFill degree="0">"#,
                r#"<stop position="0"><color theme="0"/></stop>"#,
                r#"<stop position="0.5"><color theme="4"/></stop>"#,
                r#"<stop position="1"><color theme="0"/></stop>"#,
                r#"</gradientFill></fill>"#
            )
        );
    }

    #[test]
    fn test_from_center() {
        let mut fill = SlFill::default();
        fill.set_gradient(GradientShading::FromCenter, Argb::WHITE, Argb::BLACK);
        let g = fill.gradient().unwrap();
        assert_eq!(g.gradient_type, Some(GradientValues::Path));
        assert_eq!((g.left, g.right, g.top, g.bottom), (Some(0.5), Some(0.5), Some(0.5), Some(0.5)));
        assert_eq!(g.degree, None);
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut fill = SlFill::default();
        fill.append_gradient_stop(-2.0, Argb::WHITE);
        fill.append_gradient_stop(0.4, Argb::BLACK);
        assert_eq!(fill.gradient().unwrap().stops[0].position, 0.0);
        assert!(fill.pattern().is_none());

        fill.set_pattern_type(PatternValues::DarkGrid);
        assert!(fill.gradient().is_none());
        assert_eq!(fill.pattern().unwrap().pattern_type, Some(PatternValues::DarkGrid));
        assert!(fill.pattern().unwrap().foreground.is_empty());

        fill.clear_gradient_stops();
        assert!(fill.pattern().is_some());
    }

    #[test]
    fn test_merge_pattern_colors() {
        let mut base = SlFill::default();
        base.set_pattern(PatternValues::LightGrid, Argb::WHITE, Argb::BLACK);
        let mut delta = SlFill::default();
        delta.set_pattern_foreground_theme(ThemeColorIndex::Accent2, 0.0);

        base.merge(&delta);
        let p = base.pattern().unwrap();
        assert_eq!(p.pattern_type, Some(PatternValues::LightGrid));
        assert_eq!(p.foreground.theme_index(), Some(5));
        assert_eq!(p.background.display_color(), Argb::BLACK);

        base.merge(&SlFill::default());
        assert_eq!(base.pattern().unwrap().foreground.theme_index(), Some(5));
    }

    #[test]
    fn test_gradient_round_trip() {
        let palette = Palette::default();
        let mut fill = SlFill::new(&palette);
        fill.set_gradient(GradientShading::DiagonalDown2, Argb::from_u32(0x4F81BD), Argb::WHITE);
        let reread = SlFill::from_element(&fill.to_element(), &palette);
        assert_eq!(reread, fill);
    }
}
