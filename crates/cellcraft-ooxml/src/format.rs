//! Cell formatting records: alignment, protection, number formats, `xf` and `dxf`

use crate::border::Border;
use crate::error::{OoxmlError, OoxmlResult};
use crate::fill::Fill;
use crate::font::Font;
use crate::node::{XmlElement, XmlPart};
use crate::values::{HorizontalAlignmentValues, VerticalAlignmentValues};

/// `CT_CellAlignment`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignmentValues>,
    pub vertical: Option<VerticalAlignmentValues>,
    /// Encoded rotation: 0-90 counterclockwise, 91-180 clockwise, 255 stacked
    pub text_rotation: Option<u32>,
    pub wrap_text: Option<bool>,
    pub indent: Option<u32>,
    pub relative_indent: Option<i32>,
    pub justify_last_line: Option<bool>,
    pub shrink_to_fit: Option<bool>,
    /// 0 = context, 1 = left-to-right, 2 = right-to-left
    pub reading_order: Option<u32>,
}

impl XmlPart for Alignment {
    const TAG: &'static str = "alignment";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .opt_attr("horizontal", self.horizontal)
            .opt_attr("vertical", self.vertical)
            .opt_attr("textRotation", self.text_rotation)
            .opt_bool("wrapText", self.wrap_text)
            .opt_attr("indent", self.indent)
            .opt_attr("relativeIndent", self.relative_indent)
            .opt_bool("justifyLastLine", self.justify_last_line)
            .opt_bool("shrinkToFit", self.shrink_to_fit)
            .opt_attr("readingOrder", self.reading_order)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            horizontal: element.parse_attr("horizontal"),
            vertical: element.parse_attr("vertical"),
            text_rotation: element.parse_attr("textRotation"),
            wrap_text: element.bool_attr("wrapText"),
            indent: element.parse_attr("indent"),
            relative_indent: element.parse_attr("relativeIndent"),
            justify_last_line: element.bool_attr("justifyLastLine"),
            shrink_to_fit: element.bool_attr("shrinkToFit"),
            reading_order: element.parse_attr("readingOrder"),
        })
    }
}

/// `CT_CellProtection`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protection {
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
}

impl XmlPart for Protection {
    const TAG: &'static str = "protection";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .opt_bool("locked", self.locked)
            .opt_bool("hidden", self.hidden)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            locked: element.bool_attr("locked"),
            hidden: element.bool_attr("hidden"),
        })
    }
}

/// `CT_NumFmt`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumberingFormat {
    pub number_format_id: u32,
    pub format_code: String,
}

impl XmlPart for NumberingFormat {
    const TAG: &'static str = "numFmt";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .with_attr("numFmtId", self.number_format_id)
            .with_attr("formatCode", &self.format_code)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let number_format_id =
            element
                .parse_attr("numFmtId")
                .ok_or(OoxmlError::MissingAttribute {
                    element: Self::TAG,
                    attribute: "numFmtId",
                })?;
        Ok(Self {
            number_format_id,
            format_code: element.attr("formatCode").unwrap_or_default().to_string(),
        })
    }
}

/// `CT_Xf`: a cell format record, referencing fonts/fills/borders by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellFormat {
    pub number_format_id: Option<u32>,
    pub font_id: Option<u32>,
    pub fill_id: Option<u32>,
    pub border_id: Option<u32>,
    /// `xfId`: the cell style record this format derives from
    pub format_id: Option<u32>,
    pub quote_prefix: Option<bool>,
    pub pivot_button: Option<bool>,
    pub apply_number_format: Option<bool>,
    pub apply_font: Option<bool>,
    pub apply_fill: Option<bool>,
    pub apply_border: Option<bool>,
    pub apply_alignment: Option<bool>,
    pub apply_protection: Option<bool>,
    pub alignment: Option<Alignment>,
    pub protection: Option<Protection>,
}

impl XmlPart for CellFormat {
    const TAG: &'static str = "xf";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .opt_attr("numFmtId", self.number_format_id)
            .opt_attr("fontId", self.font_id)
            .opt_attr("fillId", self.fill_id)
            .opt_attr("borderId", self.border_id)
            .opt_attr("xfId", self.format_id)
            .opt_bool("quotePrefix", self.quote_prefix)
            .opt_bool("pivotButton", self.pivot_button)
            .opt_bool("applyNumberFormat", self.apply_number_format)
            .opt_bool("applyFont", self.apply_font)
            .opt_bool("applyFill", self.apply_fill)
            .opt_bool("applyBorder", self.apply_border)
            .opt_bool("applyAlignment", self.apply_alignment)
            .opt_bool("applyProtection", self.apply_protection)
            .opt_child(self.alignment.as_ref().map(XmlPart::to_element))
            .opt_child(self.protection.as_ref().map(XmlPart::to_element))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            number_format_id: element.parse_attr("numFmtId"),
            font_id: element.parse_attr("fontId"),
            fill_id: element.parse_attr("fillId"),
            border_id: element.parse_attr("borderId"),
            format_id: element.parse_attr("xfId"),
            quote_prefix: element.bool_attr("quotePrefix"),
            pivot_button: element.bool_attr("pivotButton"),
            apply_number_format: element.bool_attr("applyNumberFormat"),
            apply_font: element.bool_attr("applyFont"),
            apply_fill: element.bool_attr("applyFill"),
            apply_border: element.bool_attr("applyBorder"),
            apply_alignment: element.bool_attr("applyAlignment"),
            apply_protection: element.bool_attr("applyProtection"),
            alignment: element
                .child("alignment")
                .map(Alignment::from_element)
                .transpose()?,
            protection: element
                .child("protection")
                .map(Protection::from_element)
                .transpose()?,
        })
    }
}

/// `CT_Dxf`: an inline, sparse format used by conditional formatting and tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DifferentialFormat {
    pub font: Option<Font>,
    pub numbering_format: Option<NumberingFormat>,
    pub fill: Option<Fill>,
    pub alignment: Option<Alignment>,
    pub border: Option<Border>,
    pub protection: Option<Protection>,
}

impl XmlPart for DifferentialFormat {
    const TAG: &'static str = "dxf";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .opt_child(self.font.as_ref().map(XmlPart::to_element))
            .opt_child(self.numbering_format.as_ref().map(XmlPart::to_element))
            .opt_child(self.fill.as_ref().map(XmlPart::to_element))
            .opt_child(self.alignment.as_ref().map(XmlPart::to_element))
            .opt_child(self.border.as_ref().map(XmlPart::to_element))
            .opt_child(self.protection.as_ref().map(XmlPart::to_element))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            font: element.child("font").map(Font::from_element).transpose()?,
            numbering_format: element
                .child("numFmt")
                .map(NumberingFormat::from_element)
                .transpose()?,
            fill: element.child("fill").map(Fill::from_element).transpose()?,
            alignment: element
                .child("alignment")
                .map(Alignment::from_element)
                .transpose()?,
            border: element
                .child("border")
                .map(Border::from_element)
                .transpose()?,
            protection: element
                .child("protection")
                .map(Protection::from_element)
                .transpose()?,
        })
    }
}
