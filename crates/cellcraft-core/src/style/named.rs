//! Built-in named cell styles

use cellcraft_ooxml::{BorderStyleValues, FontSchemeValues};

use super::border::{BorderSide, SlBorder};
use super::color::SlColor;
use super::fill::SlFill;
use super::font::{SlFont, DEFAULT_FONT_SIZE};
use super::number_format::{SlNumberingFormat, ID_COMMA, ID_COMMA0, ID_CURRENCY, ID_CURRENCY0, ID_PERCENT};
use super::palette::{Argb, ThemeColorIndex};
use super::SlStyle;

/// A color in a preset table
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PresetColor {
    /// `0xRRGGBB`, opaque
    Rgb(u32),
    Theme(ThemeColorIndex, f64),
}

impl PresetColor {
    pub(crate) fn apply_to(self, color: &mut SlColor) {
        match self {
            PresetColor::Rgb(rgb) => color.set_color(Argb::from_u32(rgb)),
            PresetColor::Theme(index, tint) => color.set_theme_color(index, tint),
        }
    }
}

/// The cell styles in the built-in style gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedCellStyle {
    Normal,
    Bad,
    Good,
    Neutral,
    Calculation,
    CheckCell,
    ExplanatoryText,
    Input,
    LinkedCell,
    Note,
    Output,
    WarningText,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Title,
    Total,
    Accent1,
    Accent1Percent20,
    Accent1Percent40,
    Accent1Percent60,
    Accent2,
    Accent2Percent20,
    Accent2Percent40,
    Accent2Percent60,
    Accent3,
    Accent3Percent20,
    Accent3Percent40,
    Accent3Percent60,
    Accent4,
    Accent4Percent20,
    Accent4Percent40,
    Accent4Percent60,
    Accent5,
    Accent5Percent20,
    Accent5Percent40,
    Accent5Percent60,
    Accent6,
    Accent6Percent20,
    Accent6Percent40,
    Accent6Percent60,
    Comma,
    Comma0,
    Currency,
    Currency0,
    Percent,
}

type BorderPreset = (BorderSide, BorderStyleValues, PresetColor);

/// Font, fill, border and number format assignments of one named style
///
/// Anything a preset leaves unset is not touched when it is applied.
#[derive(Debug, Clone, Copy)]
struct CellStylePreset {
    bold: bool,
    italic: bool,
    size: Option<f64>,
    major_font: bool,
    font_color: Option<PresetColor>,
    fill: Option<PresetColor>,
    borders: &'static [BorderPreset],
    number_format_id: Option<u32>,
}

const BLANK: CellStylePreset = CellStylePreset {
    bold: false,
    italic: false,
    size: None,
    major_font: false,
    font_color: None,
    fill: None,
    borders: &[],
    number_format_id: None,
};

const fn box_border(style: BorderStyleValues, rgb: u32) -> [BorderPreset; 4] {
    let color = PresetColor::Rgb(rgb);
    [
        (BorderSide::Left, style, color),
        (BorderSide::Right, style, color),
        (BorderSide::Top, style, color),
        (BorderSide::Bottom, style, color),
    ]
}

const THIN_7F: [BorderPreset; 4] = box_border(BorderStyleValues::Thin, 0x7F7F7F);
const THIN_3F: [BorderPreset; 4] = box_border(BorderStyleValues::Thin, 0x3F3F3F);
const THIN_B2: [BorderPreset; 4] = box_border(BorderStyleValues::Thin, 0xB2B2B2);
const DOUBLE_3F: [BorderPreset; 4] = box_border(BorderStyleValues::Double, 0x3F3F3F);

const ACCENT_20: f64 = 0.799981688894314;
const ACCENT_40: f64 = 0.599993896298105;
const ACCENT_60: f64 = 0.399975585192419;

fn font_color(rgb: u32) -> CellStylePreset {
    CellStylePreset {
        font_color: Some(PresetColor::Rgb(rgb)),
        ..BLANK
    }
}

fn font_and_fill(font: u32, fill: u32) -> CellStylePreset {
    CellStylePreset {
        font_color: Some(PresetColor::Rgb(font)),
        fill: Some(PresetColor::Rgb(fill)),
        ..BLANK
    }
}

fn heading(size: Option<f64>, borders: &'static [BorderPreset]) -> CellStylePreset {
    CellStylePreset {
        bold: true,
        size,
        font_color: Some(PresetColor::Theme(ThemeColorIndex::Dark2, 0.0)),
        borders,
        ..BLANK
    }
}

fn accent(index: ThemeColorIndex, percent: u8) -> CellStylePreset {
    let (tint, text) = match percent {
        20 => (ACCENT_20, ThemeColorIndex::Dark1),
        40 => (ACCENT_40, ThemeColorIndex::Dark1),
        60 => (ACCENT_60, ThemeColorIndex::Light1),
        _ => (0.0, ThemeColorIndex::Light1),
    };
    CellStylePreset {
        font_color: Some(PresetColor::Theme(text, 0.0)),
        fill: Some(PresetColor::Theme(index, tint)),
        ..BLANK
    }
}

fn number_format(id: u32) -> CellStylePreset {
    CellStylePreset {
        number_format_id: Some(id),
        ..BLANK
    }
}

impl NamedCellStyle {
    fn preset(self) -> CellStylePreset {
        use NamedCellStyle::*;
        use ThemeColorIndex as T;

        match self {
            Normal => BLANK,
            Bad => font_and_fill(0x9C0006, 0xFFC7CE),
            Good => font_and_fill(0x006100, 0xC6EFCE),
            Neutral => font_and_fill(0x9C6500, 0xFFEB9C),
            Calculation => CellStylePreset {
                bold: true,
                borders: &THIN_7F,
                ..font_and_fill(0xFA7D00, 0xF2F2F2)
            },
            CheckCell => CellStylePreset {
                bold: true,
                font_color: Some(PresetColor::Theme(T::Light1, 0.0)),
                fill: Some(PresetColor::Rgb(0xA5A5A5)),
                borders: &DOUBLE_3F,
                ..BLANK
            },
            ExplanatoryText => CellStylePreset {
                italic: true,
                ..font_color(0x7F7F7F)
            },
            Input => CellStylePreset {
                borders: &THIN_7F,
                ..font_and_fill(0x3F3F76, 0xFFCC99)
            },
            LinkedCell => CellStylePreset {
                borders: &[(
                    BorderSide::Bottom,
                    BorderStyleValues::Double,
                    PresetColor::Rgb(0xFF8001),
                )],
                ..font_color(0xFA7D00)
            },
            Note => CellStylePreset {
                fill: Some(PresetColor::Rgb(0xFFFFCC)),
                borders: &THIN_B2,
                ..BLANK
            },
            Output => CellStylePreset {
                bold: true,
                borders: &THIN_3F,
                ..font_and_fill(0x3F3F3F, 0xF2F2F2)
            },
            WarningText => font_color(0xFF0000),
            Heading1 => heading(
                Some(15.0),
                &[(
                    BorderSide::Bottom,
                    BorderStyleValues::Thick,
                    PresetColor::Theme(T::Accent1, 0.0),
                )],
            ),
            Heading2 => heading(
                Some(13.0),
                &[(
                    BorderSide::Bottom,
                    BorderStyleValues::Thick,
                    PresetColor::Theme(T::Accent1, 0.499984740745262),
                )],
            ),
            Heading3 => heading(
                Some(11.0),
                &[(
                    BorderSide::Bottom,
                    BorderStyleValues::Medium,
                    PresetColor::Theme(T::Accent1, 0.399975585192419),
                )],
            ),
            Heading4 => heading(None, &[]),
            Title => CellStylePreset {
                major_font: true,
                ..heading(Some(18.0), &[])
            },
            Total => CellStylePreset {
                bold: true,
                font_color: Some(PresetColor::Theme(T::Dark1, 0.0)),
                borders: &[
                    (
                        BorderSide::Top,
                        BorderStyleValues::Thin,
                        PresetColor::Theme(T::Accent1, 0.0),
                    ),
                    (
                        BorderSide::Bottom,
                        BorderStyleValues::Double,
                        PresetColor::Theme(T::Accent1, 0.0),
                    ),
                ],
                ..BLANK
            },
            Accent1 => accent(T::Accent1, 0),
            Accent1Percent20 => accent(T::Accent1, 20),
            Accent1Percent40 => accent(T::Accent1, 40),
            Accent1Percent60 => accent(T::Accent1, 60),
            Accent2 => accent(T::Accent2, 0),
            Accent2Percent20 => accent(T::Accent2, 20),
            Accent2Percent40 => accent(T::Accent2, 40),
            Accent2Percent60 => accent(T::Accent2, 60),
            Accent3 => accent(T::Accent3, 0),
            Accent3Percent20 => accent(T::Accent3, 20),
            Accent3Percent40 => accent(T::Accent3, 40),
            Accent3Percent60 => accent(T::Accent3, 60),
            Accent4 => accent(T::Accent4, 0),
            Accent4Percent20 => accent(T::Accent4, 20),
            Accent4Percent40 => accent(T::Accent4, 40),
            Accent4Percent60 => accent(T::Accent4, 60),
            Accent5 => accent(T::Accent5, 0),
            Accent5Percent20 => accent(T::Accent5, 20),
            Accent5Percent40 => accent(T::Accent5, 40),
            Accent5Percent60 => accent(T::Accent5, 60),
            Accent6 => accent(T::Accent6, 0),
            Accent6Percent20 => accent(T::Accent6, 20),
            Accent6Percent40 => accent(T::Accent6, 40),
            Accent6Percent60 => accent(T::Accent6, 60),
            Comma => number_format(ID_COMMA),
            Comma0 => number_format(ID_COMMA0),
            Currency => number_format(ID_CURRENCY),
            Currency0 => number_format(ID_CURRENCY0),
            Percent => number_format(ID_PERCENT),
        }
    }
}

impl SlStyle {
    /// Apply a built-in named style
    ///
    /// The style's font, fill, border and number format assignments are
    /// laid over this style; properties the named style does not define
    /// keep their current values. `Normal` instead resets the font to the
    /// default font and clears the fill, border and number format.
    pub fn apply_named_cell_style(&mut self, named: NamedCellStyle) {
        let palette = self.palette().clone();
        if named == NamedCellStyle::Normal {
            self.font = SlFont::default_font(&palette);
            self.fill = SlFill::new(&palette);
            self.border = SlBorder::new(&palette);
            self.number_format = None;
            self.number_format_id = None;
            return;
        }

        let preset = named.preset();
        if preset.bold {
            self.font.set_bold(true);
        }
        if preset.italic {
            self.font.set_italic(true);
        }
        if preset.major_font {
            let size = preset.size.unwrap_or(DEFAULT_FONT_SIZE);
            self.font.set_font_scheme(FontSchemeValues::Major, size);
        } else if let Some(size) = preset.size {
            self.font.size = Some(size);
        }
        if let Some(color) = preset.font_color {
            color.apply_to(&mut self.font.color);
        }
        match preset.fill {
            Some(PresetColor::Rgb(rgb)) => self.fill.set_solid(Argb::from_u32(rgb)),
            Some(PresetColor::Theme(index, tint)) => self.fill.set_solid_theme(index, tint),
            None => {}
        }
        for &(side, style, color) in preset.borders {
            match color {
                PresetColor::Rgb(rgb) => self.border.set_border(side, style, Argb::from_u32(rgb)),
                PresetColor::Theme(index, tint) => {
                    self.border.set_border_theme(side, style, index, tint)
                }
            }
        }
        if let Some(id) = preset.number_format_id {
            self.number_format = Some(SlNumberingFormat::builtin(id));
            self.number_format_id = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Palette, StyleKeyed};
    use cellcraft_ooxml::{Color, PatternValues};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bad_keeps_borders() {
        let mut style = SlStyle::default();
        style.set_left_border(BorderStyleValues::Dashed, Argb::from_u32(0x123456));
        let border_before = style.border.to_key();

        style.apply_named_cell_style(NamedCellStyle::Bad);

        assert_eq!(style.font.color.display_color(), Argb::new(0xFF, 0x9C, 0x00, 0x06));
        let pattern = style.fill.pattern().unwrap();
        assert_eq!(pattern.pattern_type, Some(PatternValues::Solid));
        assert_eq!(pattern.foreground.display_color(), Argb::new(0xFF, 0xFF, 0xC7, 0xCE));
        assert_eq!(style.border.to_key(), border_before);
    }

    #[test]
    fn test_heading_border_tint() {
        let mut style = SlStyle::default();
        style.apply_named_cell_style(NamedCellStyle::Heading2);
        let bottom = style.border.bottom.as_ref().unwrap();
        assert_eq!(bottom.style, Some(BorderStyleValues::Thick));
        assert_eq!(
            bottom.color.to_element(),
            Color::theme(4, Some(0.499984740745262))
        );
        assert_eq!(style.font.size, Some(13.0));
        assert_eq!(style.font.bold, Some(true));
    }

    #[test]
    fn test_accent_fill_uses_theme() {
        let mut style = SlStyle::default();
        style.apply_named_cell_style(NamedCellStyle::Accent1Percent20);
        let pattern = style.fill.pattern().unwrap();
        assert_eq!(pattern.foreground.theme_index(), Some(4));
        assert_eq!(pattern.foreground.display_color(), Argb::from_u32(0xDCE6F2));
    }

    #[test]
    fn test_title_uses_major_font() {
        let mut style = SlStyle::default();
        style.apply_named_cell_style(NamedCellStyle::Title);
        assert_eq!(style.font.scheme, Some(FontSchemeValues::Major));
        assert_eq!(style.font.size, Some(18.0));
    }

    #[test]
    fn test_number_format_styles() {
        let mut style = SlStyle::default();
        style.apply_named_cell_style(NamedCellStyle::Currency);
        assert_eq!(style.number_format_id, Some(44));
        style.apply_named_cell_style(NamedCellStyle::Percent);
        assert_eq!(style.format_code(), "0%");
    }

    #[test]
    fn test_normal_resets() {
        let palette = Palette::default();
        let mut style = SlStyle::new(&palette);
        style.apply_named_cell_style(NamedCellStyle::Output);
        style.apply_named_cell_style(NamedCellStyle::Normal);
        assert!(style.fill.is_empty());
        assert!(style.border.is_empty());
        assert_eq!(style.font.to_key(), SlFont::default_font(&palette).to_key());
    }
}
