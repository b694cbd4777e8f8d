//! Differential format mirror

use cellcraft_ooxml::DifferentialFormat;

use super::alignment::{SlAlignment, SlProtection};
use super::border::SlBorder;
use super::fill::SlFill;
use super::font::SlFont;
use super::number_format::SlNumberingFormat;
use super::palette::Palette;
use super::pool::StyleKeyed;

/// Sparse formatting delta for conditional formats and table elements
///
/// Parts are written inline; there are no id references. Blank parts are
/// not written.
#[derive(Debug, Clone, PartialEq)]
pub struct SlDifferentialFormat {
    pub font: SlFont,
    pub fill: SlFill,
    pub border: SlBorder,
    pub alignment: SlAlignment,
    pub protection: SlProtection,
    pub number_format: Option<SlNumberingFormat>,
}

impl SlDifferentialFormat {
    pub fn new(palette: &Palette) -> Self {
        Self {
            font: SlFont::new(palette),
            fill: SlFill::new(palette),
            border: SlBorder::new(palette),
            alignment: SlAlignment::default(),
            protection: SlProtection::default(),
            number_format: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.fill.is_empty()
            && self.border.is_empty()
            && self.alignment.is_empty()
            && self.protection.is_empty()
            && self.number_format.is_none()
    }

    pub fn from_element(element: &DifferentialFormat, palette: &Palette) -> Self {
        let mut dxf = Self::new(palette);
        if let Some(font) = &element.font {
            dxf.font = SlFont::from_element(font, palette);
        }
        if let Some(fill) = &element.fill {
            dxf.fill = SlFill::from_element(fill, palette);
        }
        if let Some(border) = &element.border {
            dxf.border = SlBorder::from_element(border, palette);
        }
        if let Some(alignment) = &element.alignment {
            dxf.alignment = SlAlignment::from_element(alignment);
        }
        if let Some(protection) = &element.protection {
            dxf.protection = SlProtection::from_element(protection);
        }
        dxf.number_format = element
            .numbering_format
            .as_ref()
            .map(SlNumberingFormat::from_element);
        dxf
    }

    pub fn to_element(&self) -> DifferentialFormat {
        DifferentialFormat {
            font: (!self.font.is_empty()).then(|| self.font.to_element()),
            numbering_format: self.number_format.as_ref().map(SlNumberingFormat::to_element),
            fill: (!self.fill.is_empty()).then(|| self.fill.to_element()),
            alignment: (!self.alignment.is_empty()).then(|| self.alignment.to_element()),
            border: (!self.border.is_empty()).then(|| self.border.to_element()),
            protection: (!self.protection.is_empty()).then(|| self.protection.to_element()),
        }
    }
}

impl Default for SlDifferentialFormat {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlDifferentialFormat {
    type Key = DifferentialFormat;

    fn to_key(&self) -> DifferentialFormat {
        self.to_element()
    }

    fn from_key(key: &DifferentialFormat, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Argb, ThemeColorIndex};
    use cellcraft_ooxml::{BorderStyleValues, XmlPart};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_dxf() {
        let dxf = SlDifferentialFormat::default();
        assert!(dxf.is_empty());
        assert_eq!(dxf.to_element().to_xml().unwrap(), "<dxf/>");
    }

    #[test]
    fn test_only_set_parts_written() {
        let mut dxf = SlDifferentialFormat::default();
        dxf.font.set_font_color(Argb::from_u32(0x9C0006));
        dxf.fill.set_pattern_background_color(Argb::from_u32(0xFFC7CE));
        assert_eq!(
            dxf.to_element().to_xml().unwrap(),
            concat!(
                r#"<dxf><font><color rgb="FF9C0006"/></font>"#,
                r#"<fill><patternFill><bgColor rgb="FFFFC7CE"/></patternFill></fill></dxf>"#
            )
        );
    }

    #[test]
    fn test_key_round_trip() {
        let palette = Palette::default();
        let mut dxf = SlDifferentialFormat::new(&palette);
        dxf.font.set_bold(true);
        dxf.border.set_bottom_border_theme(BorderStyleValues::Thick, ThemeColorIndex::Accent1, 0.0);
        dxf.number_format = Some(SlNumberingFormat::from_format_code("0.0%"));

        let rebuilt = SlDifferentialFormat::from_key(&dxf.to_key(), &palette);
        assert_eq!(rebuilt.to_key(), dxf.to_key());
        assert!(rebuilt.alignment.is_empty());
    }
}
