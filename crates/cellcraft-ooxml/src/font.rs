//! `CT_Font`

use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::error::OoxmlResult;
use crate::node::{bool_str, XmlElement, XmlPart};
use crate::values::{hash_opt_f64, FontSchemeValues, UnderlineValues, VerticalAlignmentRunValues};

/// Font element
///
/// Boolean properties are written as child elements (`<b/>`); `Some(false)`
/// writes an explicit `val="0"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strike: Option<bool>,
    pub condense: Option<bool>,
    pub extend: Option<bool>,
    pub outline: Option<bool>,
    pub shadow: Option<bool>,
    pub underline: Option<UnderlineValues>,
    pub vertical_align: Option<VerticalAlignmentRunValues>,
    /// Size in points
    pub size: Option<f64>,
    pub color: Option<Color>,
    pub name: Option<String>,
    /// Font family class (0-14)
    pub family: Option<i32>,
    pub charset: Option<i32>,
    pub scheme: Option<FontSchemeValues>,
}

fn flag(tag: &str, value: Option<bool>) -> Option<XmlElement> {
    value.map(|v| {
        if v {
            XmlElement::new(tag)
        } else {
            XmlElement::new(tag).with_attr("val", bool_str(false))
        }
    })
}

fn val<V: std::fmt::Display>(tag: &str, value: Option<V>) -> Option<XmlElement> {
    value.map(|v| XmlElement::new(tag).with_attr("val", v))
}

fn read_flag(element: &XmlElement, tag: &str) -> Option<bool> {
    element
        .child(tag)
        .map(|c| c.bool_attr("val").unwrap_or(true))
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bold.hash(state);
        self.italic.hash(state);
        self.strike.hash(state);
        self.condense.hash(state);
        self.extend.hash(state);
        self.outline.hash(state);
        self.shadow.hash(state);
        self.underline.hash(state);
        self.vertical_align.hash(state);
        hash_opt_f64(self.size, state);
        self.color.hash(state);
        self.name.hash(state);
        self.family.hash(state);
        self.charset.hash(state);
        self.scheme.hash(state);
    }
}

impl XmlPart for Font {
    const TAG: &'static str = "font";

    fn to_element(&self) -> XmlElement {
        // Child order follows what Excel writes
        XmlElement::new(Self::TAG)
            .opt_child(flag("b", self.bold))
            .opt_child(flag("i", self.italic))
            .opt_child(flag("strike", self.strike))
            .opt_child(flag("condense", self.condense))
            .opt_child(flag("extend", self.extend))
            .opt_child(flag("outline", self.outline))
            .opt_child(flag("shadow", self.shadow))
            .opt_child(self.underline.map(|u| match u {
                UnderlineValues::Single => XmlElement::new("u"),
                other => XmlElement::new("u").with_attr("val", other),
            }))
            .opt_child(val("vertAlign", self.vertical_align))
            .opt_child(val("sz", self.size))
            .opt_child(self.color.as_ref().map(|c| c.to_element_named("color")))
            .opt_child(val("name", self.name.as_deref()))
            .opt_child(val("family", self.family))
            .opt_child(val("charset", self.charset))
            .opt_child(val("scheme", self.scheme))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            bold: read_flag(element, "b"),
            italic: read_flag(element, "i"),
            strike: read_flag(element, "strike"),
            condense: read_flag(element, "condense"),
            extend: read_flag(element, "extend"),
            outline: read_flag(element, "outline"),
            shadow: read_flag(element, "shadow"),
            underline: element
                .child("u")
                .map(|u| u.parse_attr("val").unwrap_or(UnderlineValues::Single)),
            vertical_align: element.child("vertAlign").and_then(|c| c.parse_attr("val")),
            size: element.child("sz").and_then(|c| c.f64_attr("val")),
            color: element.child("color").map(Color::read),
            name: element
                .child("name")
                .and_then(|c| c.attr("val"))
                .map(|s| s.to_string()),
            family: element.child("family").and_then(|c| c.parse_attr("val")),
            charset: element.child("charset").and_then(|c| c.parse_attr("val")),
            scheme: element.child("scheme").and_then(|c| c.parse_attr("val")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_font_xml_order() {
        let font = Font {
            bold: Some(true),
            italic: Some(false),
            underline: Some(UnderlineValues::Double),
            size: Some(11.0),
            color: Some(Color::theme(1, None)),
            name: Some("Calibri".into()),
            family: Some(2),
            scheme: Some(FontSchemeValues::Minor),
            ..Default::default()
        };
        assert_eq!(
            font.to_xml().unwrap(),
            concat!(
                r#"<font><b/><i val="0"/><u val="double"/><sz val="11"/>"#,
                r#"<color theme="1"/><name val="Calibri"/><family val="2"/>"#,
                r#"<scheme val="minor"/></font>"#
            )
        );
    }

    #[test]
    fn test_font_read() {
        let font = Font::from_xml(
            r#"<font><b/><u/><vertAlign val="superscript"/><sz val="9.5"/><name val="Arial"/></font>"#,
        )
        .unwrap();
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.underline, Some(UnderlineValues::Single));
        assert_eq!(font.vertical_align, Some(VerticalAlignmentRunValues::Superscript));
        assert_eq!(font.size, Some(9.5));
        assert_eq!(font.name.as_deref(), Some("Arial"));
        assert_eq!(font.italic, None);
    }

    #[test]
    fn test_wrong_root() {
        assert!(Font::from_xml("<fill/>").is_err());
    }
}
