//! `CT_Border`

use crate::color::Color;
use crate::error::OoxmlResult;
use crate::node::{XmlElement, XmlPart};
use crate::values::BorderStyleValues;

/// One border edge (`CT_BorderPr`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderEdge {
    pub style: Option<BorderStyleValues>,
    pub color: Option<Color>,
}

impl BorderEdge {
    fn to_element(&self, tag: &str) -> XmlElement {
        XmlElement::new(tag)
            .opt_attr("style", self.style)
            .opt_child(self.color.as_ref().map(|c| c.to_element_named("color")))
    }

    fn read(element: &XmlElement) -> Self {
        Self {
            style: element.parse_attr("style"),
            color: element.child("color").map(Color::read),
        }
    }

    /// True when neither a style nor a color is set
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }
}

/// Border element
///
/// Excel always writes the left, right, top, bottom and diagonal edges, empty
/// when unused; `vertical` and `horizontal` only appear in table styles and
/// differential formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub diagonal_up: Option<bool>,
    pub diagonal_down: Option<bool>,
    pub outline: Option<bool>,
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
    pub diagonal: Option<BorderEdge>,
    pub vertical: Option<BorderEdge>,
    pub horizontal: Option<BorderEdge>,
}

impl XmlPart for Border {
    const TAG: &'static str = "border";

    fn to_element(&self) -> XmlElement {
        let edge = |tag: &str, e: &Option<BorderEdge>| match e {
            Some(e) => e.to_element(tag),
            None => XmlElement::new(tag),
        };
        XmlElement::new(Self::TAG)
            .opt_bool("diagonalUp", self.diagonal_up)
            .opt_bool("diagonalDown", self.diagonal_down)
            .opt_bool("outline", self.outline)
            .with_child(edge("left", &self.left))
            .with_child(edge("right", &self.right))
            .with_child(edge("top", &self.top))
            .with_child(edge("bottom", &self.bottom))
            .with_child(edge("diagonal", &self.diagonal))
            .opt_child(self.vertical.as_ref().map(|e| e.to_element("vertical")))
            .opt_child(self.horizontal.as_ref().map(|e| e.to_element("horizontal")))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let edge = |tag: &str| element.child(tag).map(BorderEdge::read);
        Ok(Self {
            diagonal_up: element.bool_attr("diagonalUp"),
            diagonal_down: element.bool_attr("diagonalDown"),
            outline: element.bool_attr("outline"),
            // `start`/`end` are the bidi spellings of left/right
            left: edge("left").or_else(|| edge("start")),
            right: edge("right").or_else(|| edge("end")),
            top: edge("top"),
            bottom: edge("bottom"),
            diagonal: edge("diagonal"),
            vertical: edge("vertical"),
            horizontal: edge("horizontal"),
        })
    }
}
