//! x14 sparkline extension elements (`x14:sparklineGroup`, `x14:sparkline`)
//!
//! Sparklines live in the worksheet `extLst` under the 2009 spreadsheet
//! extension namespace; their formulas and locations use the `xm` namespace.

use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::error::{OoxmlError, OoxmlResult};
use crate::node::{XmlElement, XmlPart};
use crate::values::{
    hash_opt_f64, DisplayBlanksAsValues, SparklineAxisMinMaxValues,
    SparklineTypeValues,
};

/// `x14` namespace URI
pub const X14_NS: &str = "http://schemas.microsoft.com/office/spreadsheetml/2009/9/main";
/// `xm` namespace URI
pub const XM_NS: &str = "http://schemas.microsoft.com/office/excel/2006/main";

/// Default line weight in points
pub const DEFAULT_LINE_WEIGHT: f64 = 0.75;

/// One sparkline: a data formula and the cell it is drawn in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sparkline {
    /// `xm:f`, e.g. `Sheet1!A1:E1`
    pub formula: Option<String>,
    /// `xm:sqref`, e.g. `F1`
    pub reference: String,
}

impl XmlPart for Sparkline {
    const TAG: &'static str = "sparkline";

    fn to_element(&self) -> XmlElement {
        XmlElement::new("x14:sparkline")
            .opt_child(
                self.formula
                    .as_ref()
                    .map(|f| XmlElement::new("xm:f").with_text(f.as_str())),
            )
            .with_child(XmlElement::new("xm:sqref").with_text(self.reference.as_str()))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let reference = element
            .child_text("sqref")
            .ok_or(OoxmlError::MissingAttribute {
                element: Self::TAG,
                attribute: "sqref",
            })?;
        Ok(Self {
            formula: element.child_text("f").map(str::to_string),
            reference: reference.to_string(),
        })
    }
}

/// `CT_SparklineGroup`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparklineGroup {
    pub manual_max: Option<f64>,
    pub manual_min: Option<f64>,
    pub line_weight: Option<f64>,
    pub sparkline_type: Option<SparklineTypeValues>,
    pub date_axis: Option<bool>,
    pub display_empty_cells_as: Option<DisplayBlanksAsValues>,
    pub markers: Option<bool>,
    pub high: Option<bool>,
    pub low: Option<bool>,
    pub first: Option<bool>,
    pub last: Option<bool>,
    pub negative: Option<bool>,
    pub display_x_axis: Option<bool>,
    pub display_hidden: Option<bool>,
    pub min_axis_type: Option<SparklineAxisMinMaxValues>,
    pub max_axis_type: Option<SparklineAxisMinMaxValues>,
    pub right_to_left: Option<bool>,
    pub color_series: Option<Color>,
    pub color_negative: Option<Color>,
    pub color_axis: Option<Color>,
    pub color_markers: Option<Color>,
    pub color_first: Option<Color>,
    pub color_last: Option<Color>,
    pub color_high: Option<Color>,
    pub color_low: Option<Color>,
    /// Date axis range formula
    pub date_formula: Option<String>,
    pub sparklines: Vec<Sparkline>,
}

impl Eq for SparklineGroup {}

impl Hash for SparklineGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_opt_f64(self.manual_max, state);
        hash_opt_f64(self.manual_min, state);
        hash_opt_f64(self.line_weight, state);
        self.sparkline_type.hash(state);
        self.date_axis.hash(state);
        self.display_empty_cells_as.hash(state);
        self.markers.hash(state);
        self.high.hash(state);
        self.low.hash(state);
        self.first.hash(state);
        self.last.hash(state);
        self.negative.hash(state);
        self.display_x_axis.hash(state);
        self.display_hidden.hash(state);
        self.min_axis_type.hash(state);
        self.max_axis_type.hash(state);
        self.right_to_left.hash(state);
        self.color_series.hash(state);
        self.color_negative.hash(state);
        self.color_axis.hash(state);
        self.color_markers.hash(state);
        self.color_first.hash(state);
        self.color_last.hash(state);
        self.color_high.hash(state);
        self.color_low.hash(state);
        self.date_formula.hash(state);
        self.sparklines.hash(state);
    }
}

const COLOR_TAGS: [&str; 8] = [
    "colorSeries",
    "colorNegative",
    "colorAxis",
    "colorMarkers",
    "colorFirst",
    "colorLast",
    "colorHigh",
    "colorLow",
];

impl SparklineGroup {
    fn colors(&self) -> [&Option<Color>; 8] {
        [
            &self.color_series,
            &self.color_negative,
            &self.color_axis,
            &self.color_markers,
            &self.color_first,
            &self.color_last,
            &self.color_high,
            &self.color_low,
        ]
    }
}

impl XmlPart for SparklineGroup {
    const TAG: &'static str = "sparklineGroup";

    fn to_element(&self) -> XmlElement {
        let mut el = XmlElement::new("x14:sparklineGroup")
            .opt_attr("manualMax", self.manual_max)
            .opt_attr("manualMin", self.manual_min)
            .opt_attr("lineWeight", self.line_weight)
            .opt_attr("type", self.sparkline_type)
            .opt_bool("dateAxis", self.date_axis)
            .opt_attr("displayEmptyCellsAs", self.display_empty_cells_as)
            .opt_bool("markers", self.markers)
            .opt_bool("high", self.high)
            .opt_bool("low", self.low)
            .opt_bool("first", self.first)
            .opt_bool("last", self.last)
            .opt_bool("negative", self.negative)
            .opt_bool("displayXAxis", self.display_x_axis)
            .opt_bool("displayHidden", self.display_hidden)
            .opt_attr("minAxisType", self.min_axis_type)
            .opt_attr("maxAxisType", self.max_axis_type)
            .opt_bool("rightToLeft", self.right_to_left);

        for (tag, color) in COLOR_TAGS.iter().zip(self.colors()) {
            el = el.opt_child(
                color
                    .as_ref()
                    .map(|c| c.to_element_named(&format!("x14:{tag}"))),
            );
        }

        let mut sparklines = XmlElement::new("x14:sparklines");
        for sparkline in &self.sparklines {
            sparklines = sparklines.with_child(sparkline.to_element());
        }

        el.opt_child(
            self.date_formula
                .as_ref()
                .map(|f| XmlElement::new("xm:f").with_text(f.as_str())),
        )
        .with_child(sparklines)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let color = |tag: &str| element.child(tag).map(Color::read);
        let sparklines = match element.child("sparklines") {
            Some(list) => list
                .children_named("sparkline")
                .map(Sparkline::from_element)
                .collect::<OoxmlResult<Vec<_>>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            manual_max: element.f64_attr("manualMax"),
            manual_min: element.f64_attr("manualMin"),
            line_weight: element.f64_attr("lineWeight"),
            sparkline_type: element.parse_attr("type"),
            date_axis: element.bool_attr("dateAxis"),
            display_empty_cells_as: element.parse_attr("displayEmptyCellsAs"),
            markers: element.bool_attr("markers"),
            high: element.bool_attr("high"),
            low: element.bool_attr("low"),
            first: element.bool_attr("first"),
            last: element.bool_attr("last"),
            negative: element.bool_attr("negative"),
            display_x_axis: element.bool_attr("displayXAxis"),
            display_hidden: element.bool_attr("displayHidden"),
            min_axis_type: element.parse_attr("minAxisType"),
            max_axis_type: element.parse_attr("maxAxisType"),
            right_to_left: element.bool_attr("rightToLeft"),
            color_series: color("colorSeries"),
            color_negative: color("colorNegative"),
            color_axis: color("colorAxis"),
            color_markers: color("colorMarkers"),
            color_first: color("colorFirst"),
            color_last: color("colorLast"),
            color_high: color("colorHigh"),
            color_low: color("colorLow"),
            date_formula: element.child_text("f").map(str::to_string),
            sparklines,
        })
    }
}

/// `x14:sparklineGroups`: the worksheet extension container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparklineGroups {
    pub groups: Vec<SparklineGroup>,
}

impl XmlPart for SparklineGroups {
    const TAG: &'static str = "sparklineGroups";

    fn to_element(&self) -> XmlElement {
        let mut el = XmlElement::new("x14:sparklineGroups").with_attr("xmlns:xm", XM_NS);
        for group in &self.groups {
            el = el.with_child(group.to_element());
        }
        el
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            groups: element
                .children_named("sparklineGroup")
                .map(SparklineGroup::from_element)
                .collect::<OoxmlResult<Vec<_>>>()?,
        })
    }
}
