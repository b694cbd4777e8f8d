//! `CT_Fill`: pattern and gradient fills

use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::error::OoxmlResult;
use crate::node::{XmlElement, XmlPart};
use crate::values::{hash_f64, hash_opt_f64, GradientValues, PatternValues};

/// Fill element: exactly one of a pattern or gradient fill
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fill {
    Pattern(PatternFill),
    Gradient(GradientFill),
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Pattern(PatternFill::default())
    }
}

/// `CT_PatternFill`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PatternFill {
    pub pattern_type: Option<PatternValues>,
    pub foreground_color: Option<Color>,
    pub background_color: Option<Color>,
}

/// `CT_GradientFill`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientFill {
    pub gradient_type: Option<GradientValues>,
    /// Angle of a linear gradient in degrees
    pub degree: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub stops: Vec<GradientStop>,
}

/// `CT_GradientStop`
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub position: f64,
    pub color: Color,
}

impl Eq for GradientFill {}

impl Hash for GradientFill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gradient_type.hash(state);
        hash_opt_f64(self.degree, state);
        hash_opt_f64(self.left, state);
        hash_opt_f64(self.right, state);
        hash_opt_f64(self.top, state);
        hash_opt_f64(self.bottom, state);
        self.stops.hash(state);
    }
}

impl Eq for GradientStop {}

impl Hash for GradientStop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.position, state);
        self.color.hash(state);
    }
}

impl PatternFill {
    fn to_element(&self) -> XmlElement {
        XmlElement::new("patternFill")
            .opt_attr("patternType", self.pattern_type)
            .opt_child(
                self.foreground_color
                    .as_ref()
                    .map(|c| c.to_element_named("fgColor")),
            )
            .opt_child(
                self.background_color
                    .as_ref()
                    .map(|c| c.to_element_named("bgColor")),
            )
    }

    fn read(element: &XmlElement) -> Self {
        Self {
            pattern_type: element.parse_attr("patternType"),
            foreground_color: element.child("fgColor").map(Color::read),
            background_color: element.child("bgColor").map(Color::read),
        }
    }
}

impl GradientFill {
    fn to_element(&self) -> XmlElement {
        let mut el = XmlElement::new("gradientFill")
            .opt_attr("type", self.gradient_type)
            .opt_attr("degree", self.degree)
            .opt_attr("left", self.left)
            .opt_attr("right", self.right)
            .opt_attr("top", self.top)
            .opt_attr("bottom", self.bottom);
        for stop in &self.stops {
            el = el.with_child(
                XmlElement::new("stop")
                    .with_attr("position", stop.position)
                    .with_child(stop.color.to_element_named("color")),
            );
        }
        el
    }

    fn read(element: &XmlElement) -> Self {
        let stops = element
            .children_named("stop")
            .map(|stop| GradientStop {
                position: stop.f64_attr("position").unwrap_or(0.0),
                color: stop.child("color").map(Color::read).unwrap_or_default(),
            })
            .collect();
        Self {
            gradient_type: element.parse_attr("type"),
            degree: element.f64_attr("degree"),
            left: element.f64_attr("left"),
            right: element.f64_attr("right"),
            top: element.f64_attr("top"),
            bottom: element.f64_attr("bottom"),
            stops,
        }
    }
}

impl XmlPart for Fill {
    const TAG: &'static str = "fill";

    fn to_element(&self) -> XmlElement {
        let inner = match self {
            Fill::Pattern(p) => p.to_element(),
            Fill::Gradient(g) => g.to_element(),
        };
        XmlElement::new(Self::TAG).with_child(inner)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        if let Some(gradient) = element.child("gradientFill") {
            return Ok(Fill::Gradient(GradientFill::read(gradient)));
        }
        Ok(Fill::Pattern(
            element
                .child("patternFill")
                .map(PatternFill::read)
                .unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solid_fill_xml() {
        let fill = Fill::Pattern(PatternFill {
            pattern_type: Some(PatternValues::Solid),
            foreground_color: Some(Color::rgb("FFFFC7CE")),
            background_color: None,
        });
        let xml = fill.to_xml().unwrap();
        assert_eq!(
            xml,
            r#"<fill><patternFill patternType="solid"><fgColor rgb="FFFFC7CE"/></patternFill></fill>"#
        );
        assert_eq!(Fill::from_xml(&xml).unwrap(), fill);
    }

    #[test]
    fn test_gradient_fill_read() {
        let fill = Fill::from_xml(concat!(
            r#"<fill><gradientFill type="path" left="0.5" right="0.5" top="0.5" bottom="0.5">"#,
            r#"<stop position="0"><color theme="0"/></stop>"#,
            r#"<stop position="1"><color theme="4"/></stop>"#,
            r#"</gradientFill></fill>"#
        ))
        .unwrap();
        let Fill::Gradient(g) = fill else {
            panic!("expected gradient fill");
        };
        assert_eq!(g.gradient_type, Some(GradientValues::Path));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[1].color.theme, Some(4));
        assert_eq!(g.top, Some(0.5));
    }

    #[test]
    fn test_empty_fill_reads_as_pattern() {
        assert_eq!(Fill::from_xml("<fill/>").unwrap(), Fill::default());
    }
}
