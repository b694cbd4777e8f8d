//! `CT_Color`: the color reference shared by fonts, fills, borders and sparklines

use std::hash::{Hash, Hasher};

use crate::error::OoxmlResult;
use crate::node::{XmlElement, XmlPart};
use crate::values::hash_opt_f64;

/// A color reference as written in SpreadsheetML
///
/// The schema allows any combination of attributes; readers give priority to
/// `rgb`, then `theme`, then `indexed`, then `auto`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Color {
    /// Automatic (system) color
    pub auto: Option<bool>,
    /// Legacy indexed palette slot
    pub indexed: Option<u32>,
    /// ARGB hex string, e.g. `FFFF0000`
    pub rgb: Option<String>,
    /// Theme palette index
    pub theme: Option<u32>,
    /// Tint applied to the theme color (-1.0 to 1.0)
    pub tint: Option<f64>,
}

impl Color {
    /// Literal ARGB color
    pub fn rgb<S: Into<String>>(argb: S) -> Self {
        Self {
            rgb: Some(argb.into()),
            ..Default::default()
        }
    }

    /// Theme color with optional tint
    pub fn theme(index: u32, tint: Option<f64>) -> Self {
        Self {
            theme: Some(index),
            tint,
            ..Default::default()
        }
    }

    /// Indexed palette color
    pub fn indexed(index: u32) -> Self {
        Self {
            indexed: Some(index),
            ..Default::default()
        }
    }

    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        self.auto.is_none()
            && self.indexed.is_none()
            && self.rgb.is_none()
            && self.theme.is_none()
            && self.tint.is_none()
    }

    /// Build the element under an arbitrary tag (`fgColor`, `x14:colorSeries`, ...)
    pub fn to_element_named(&self, tag: &str) -> XmlElement {
        XmlElement::new(tag)
            .opt_bool("auto", self.auto)
            .opt_attr("indexed", self.indexed)
            .opt_attr("rgb", self.rgb.as_deref())
            .opt_attr("theme", self.theme)
            .opt_attr("tint", self.tint)
    }

    /// Read from an element regardless of its tag
    pub fn read(element: &XmlElement) -> Self {
        Self {
            auto: element.bool_attr("auto"),
            indexed: element.parse_attr("indexed"),
            rgb: element.attr("rgb").map(|s| s.to_string()),
            theme: element.parse_attr("theme"),
            tint: element.f64_attr("tint"),
        }
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.auto.hash(state);
        self.indexed.hash(state);
        self.rgb.hash(state);
        self.theme.hash(state);
        hash_opt_f64(self.tint, state);
    }
}

impl XmlPart for Color {
    const TAG: &'static str = "color";

    fn to_element(&self) -> XmlElement {
        self.to_element_named(Self::TAG)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        Ok(Self::read(element))
    }
}
