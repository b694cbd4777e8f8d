//! Sparkline groups
//!
//! A group is a set of in-cell charts sharing one set of visual settings.
//! Each sparkline binds one data slice (a row or column of the group's
//! data range) to one location cell.

mod styles;

pub use styles::SparklineStyle;

use cellcraft_ooxml::{
    DisplayBlanksAsValues, Sparkline, SparklineAxisMinMaxValues, SparklineGroup,
    SparklineTypeValues, DEFAULT_LINE_WEIGHT,
};

use crate::reference::{sheet_range_reference, split_sheet, CellRange, CellRef};
use crate::style::{Argb, Palette, SlColor};

/// Maximum line weight in points
pub const MAX_LINE_WEIGHT: f64 = 1584.0;

/// One sparkline: a data range and the cell it is drawn in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlSparkline {
    /// Sheet holding the data; empty for the current sheet
    pub worksheet_name: String,
    pub data: Option<CellRange>,
    pub location_row: u32,
    pub location_col: u32,
}

impl SlSparkline {
    /// `Sheet1!A1:E1` style data formula
    pub fn formula(&self) -> Option<String> {
        self.data.map(|data| {
            if self.worksheet_name.is_empty() {
                data.to_a1_string()
            } else {
                sheet_range_reference(&self.worksheet_name, &data)
            }
        })
    }

    pub fn location(&self) -> CellRef {
        CellRef::new(self.location_row, self.location_col)
    }

    pub fn from_element(element: &Sparkline) -> Self {
        let (worksheet_name, data) = match &element.formula {
            Some(formula) => {
                let (sheet, range) = split_sheet(formula);
                (sheet.unwrap_or_default(), Some(CellRange::parse_or_default(range)))
            }
            None => (String::new(), None),
        };
        let location = CellRef::parse_or_default(&element.reference);
        Self {
            worksheet_name,
            data,
            location_row: location.row,
            location_col: location.col,
        }
    }

    pub fn to_element(&self) -> Sparkline {
        Sparkline {
            formula: self.formula(),
            reference: self.location().to_a1_string(),
        }
    }
}

/// A sparkline group
#[derive(Debug, Clone, PartialEq)]
pub struct SlSparklineGroup {
    /// Sheet holding the data range
    pub worksheet_name: String,
    data: CellRange,
    date_range: Option<(String, CellRange)>,
    pub sparklines: Vec<SlSparkline>,

    pub series_color: SlColor,
    pub negative_color: SlColor,
    pub axis_color: SlColor,
    pub markers_color: SlColor,
    pub first_marker_color: SlColor,
    pub last_marker_color: SlColor,
    pub high_marker_color: SlColor,
    pub low_marker_color: SlColor,

    manual_max: Option<f64>,
    manual_min: Option<f64>,
    line_weight: f64,
    pub sparkline_type: SparklineTypeValues,
    pub display_empty_cells_as: DisplayBlanksAsValues,
    pub show_markers: bool,
    pub show_high_point: bool,
    pub show_low_point: bool,
    pub show_first_point: bool,
    pub show_last_point: bool,
    pub show_negative_points: bool,
    pub show_axis: bool,
    pub show_hidden_data: bool,
    min_axis_type: SparklineAxisMinMaxValues,
    max_axis_type: SparklineAxisMinMaxValues,
    pub right_to_left: bool,
    palette: Palette,
}

impl SlSparklineGroup {
    /// Group over a data range on `worksheet_name`; corners may come in any order
    ///
    /// No sparklines exist until a location is set.
    pub fn new<S: Into<String>>(
        worksheet_name: S,
        start_row: u32,
        start_col: u32,
        end_row: u32,
        end_col: u32,
    ) -> Self {
        Self::with_palette(
            worksheet_name,
            CellRange::new(start_row, start_col, end_row, end_col),
            &Palette::default(),
        )
    }

    /// Group over `data`, resolving colors against `palette`
    pub fn with_palette<S: Into<String>>(worksheet_name: S, data: CellRange, palette: &Palette) -> Self {
        let rgb = |rgb| SlColor::from_argb(palette, Argb::from_u32(rgb));
        Self {
            worksheet_name: worksheet_name.into(),
            data,
            date_range: None,
            sparklines: Vec::new(),
            series_color: rgb(0x376092),
            negative_color: rgb(0xD00000),
            axis_color: rgb(0x000000),
            markers_color: rgb(0xD00000),
            first_marker_color: rgb(0xD00000),
            last_marker_color: rgb(0xD00000),
            high_marker_color: rgb(0xD00000),
            low_marker_color: rgb(0xD00000),
            manual_max: None,
            manual_min: None,
            line_weight: DEFAULT_LINE_WEIGHT,
            sparkline_type: SparklineTypeValues::Line,
            display_empty_cells_as: DisplayBlanksAsValues::Gap,
            show_markers: false,
            show_high_point: false,
            show_low_point: false,
            show_first_point: false,
            show_last_point: false,
            show_negative_points: false,
            show_axis: false,
            show_hidden_data: false,
            min_axis_type: SparklineAxisMinMaxValues::Individual,
            max_axis_type: SparklineAxisMinMaxValues::Individual,
            right_to_left: false,
            palette: palette.clone(),
        }
    }

    pub fn data_range(&self) -> CellRange {
        self.data
    }

    /// Place the sparklines along a one-dimensional location range
    ///
    /// A location that is not a single row or column keeps only its longer
    /// dimension. The location length is matched against the data's row
    /// count (one sparkline per data row) or column count (one per data
    /// column); for square data `rows_as_data_series` decides. When the
    /// length matches neither, no sparklines are created.
    pub fn set_location(
        &mut self,
        start_row: u32,
        start_col: u32,
        end_row: u32,
        end_col: u32,
        rows_as_data_series: bool,
    ) {
        let mut location = CellRange::new(start_row, start_col, end_row, end_col);
        if !location.is_vector() {
            if location.row_count() > location.col_count() {
                location.end_col = location.start_col;
            } else {
                location.end_row = location.start_row;
            }
            log::debug!("sparkline location shrunk to {}", location);
        }

        let along_row = location.row_count() == 1;
        let length = if along_row {
            location.col_count()
        } else {
            location.row_count()
        };

        let data = self.data;
        let by_rows = if data.row_count() == data.col_count() {
            if length != data.row_count() {
                None
            } else {
                Some(rows_as_data_series)
            }
        } else if length == data.row_count() {
            Some(true)
        } else if length == data.col_count() {
            Some(false)
        } else {
            None
        };

        self.sparklines.clear();
        let Some(by_rows) = by_rows else {
            log::debug!(
                "sparkline location {} does not match data range {}, no sparklines created",
                location,
                data
            );
            return;
        };

        for i in 0..length {
            let slice = if by_rows {
                CellRange::new(data.start_row + i, data.start_col, data.start_row + i, data.end_col)
            } else {
                CellRange::new(data.start_row, data.start_col + i, data.end_row, data.start_col + i)
            };
            let (location_row, location_col) = if along_row {
                (location.start_row, location.start_col + i)
            } else {
                (location.start_row + i, location.start_col)
            };
            self.sparklines.push(SlSparkline {
                worksheet_name: self.worksheet_name.clone(),
                data: Some(slice),
                location_row,
                location_col,
            });
        }
    }

    /// Place a single sparkline in one cell
    pub fn set_location_cell(&mut self, row: u32, col: u32) {
        self.set_location(row, col, row, col, true);
    }

    /// Use a range of dates for the horizontal axis
    pub fn set_date_axis_range<S: Into<String>>(
        &mut self,
        worksheet_name: S,
        start_row: u32,
        start_col: u32,
        end_row: u32,
        end_col: u32,
    ) {
        self.date_range = Some((
            worksheet_name.into(),
            CellRange::new(start_row, start_col, end_row, end_col),
        ));
    }

    /// Back to evenly spaced points
    pub fn clear_date_axis(&mut self) {
        self.date_range = None;
    }

    pub fn date_range(&self) -> Option<(&str, CellRange)> {
        self.date_range
            .as_ref()
            .map(|(sheet, range)| (sheet.as_str(), *range))
    }

    pub fn line_weight(&self) -> f64 {
        self.line_weight
    }

    /// Line weight in points, clamped to [0, 1584]
    pub fn set_line_weight(&mut self, weight: f64) {
        self.line_weight = clamp_line_weight(weight);
    }

    pub fn min_axis_type(&self) -> SparklineAxisMinMaxValues {
        self.min_axis_type
    }

    pub fn max_axis_type(&self) -> SparklineAxisMinMaxValues {
        self.max_axis_type
    }

    /// Minimum of the vertical axis, when fixed
    pub fn manual_min(&self) -> Option<f64> {
        self.manual_min
    }

    /// Maximum of the vertical axis, when fixed
    pub fn manual_max(&self) -> Option<f64> {
        self.manual_max
    }

    /// Fix the vertical axis minimum
    pub fn set_custom_min(&mut self, value: f64) {
        self.min_axis_type = SparklineAxisMinMaxValues::Custom;
        self.manual_min = Some(value);
    }

    /// Fix the vertical axis maximum
    pub fn set_custom_max(&mut self, value: f64) {
        self.max_axis_type = SparklineAxisMinMaxValues::Custom;
        self.manual_max = Some(value);
    }

    /// Each sparkline scales its own minimum
    pub fn set_automatic_min(&mut self) {
        self.min_axis_type = SparklineAxisMinMaxValues::Individual;
        self.manual_min = None;
    }

    /// Each sparkline scales its own maximum
    pub fn set_automatic_max(&mut self) {
        self.max_axis_type = SparklineAxisMinMaxValues::Individual;
        self.manual_max = None;
    }

    /// All sparklines share one minimum
    pub fn set_same_min_for_all(&mut self) {
        self.min_axis_type = SparklineAxisMinMaxValues::Group;
        self.manual_min = None;
    }

    /// All sparklines share one maximum
    pub fn set_same_max_for_all(&mut self) {
        self.max_axis_type = SparklineAxisMinMaxValues::Group;
        self.manual_max = None;
    }

    /// Apply a built-in style's colors
    pub fn set_sparkline_style(&mut self, style: SparklineStyle) {
        let preset = style.preset();
        preset.series.apply_to(&mut self.series_color);
        preset.negative.apply_to(&mut self.negative_color);
        preset.axis.apply_to(&mut self.axis_color);
        preset.markers.apply_to(&mut self.markers_color);
        preset.first.apply_to(&mut self.first_marker_color);
        preset.last.apply_to(&mut self.last_marker_color);
        preset.high.apply_to(&mut self.high_marker_color);
        preset.low.apply_to(&mut self.low_marker_color);
    }

    /// Read a group
    ///
    /// The sheet and data range are taken from the sparklines: the sheet of
    /// the first formula and the bounding box of all data ranges.
    pub fn from_element(element: &SparklineGroup, palette: &Palette) -> Self {
        let sparklines: Vec<SlSparkline> =
            element.sparklines.iter().map(SlSparkline::from_element).collect();
        let worksheet_name = sparklines
            .first()
            .map(|s| s.worksheet_name.clone())
            .unwrap_or_default();
        let data = sparklines
            .iter()
            .filter_map(|s| s.data)
            .reduce(|a, b| {
                CellRange::new(
                    a.start_row.min(b.start_row),
                    a.start_col.min(b.start_col),
                    a.end_row.max(b.end_row),
                    a.end_col.max(b.end_col),
                )
            })
            .unwrap_or_else(|| CellRange::cell(1, 1));

        let mut group = Self::with_palette(worksheet_name, data, palette);
        group.sparklines = sparklines;

        let colors = [
            (&element.color_series, &mut group.series_color),
            (&element.color_negative, &mut group.negative_color),
            (&element.color_axis, &mut group.axis_color),
            (&element.color_markers, &mut group.markers_color),
            (&element.color_first, &mut group.first_marker_color),
            (&element.color_last, &mut group.last_marker_color),
            (&element.color_high, &mut group.high_marker_color),
            (&element.color_low, &mut group.low_marker_color),
        ];
        for (source, target) in colors {
            if let Some(color) = source {
                *target = SlColor::from_element(color, palette);
            }
        }

        group.date_range = element.date_formula.as_deref().map(|formula| {
            let (sheet, range) = split_sheet(formula);
            (sheet.unwrap_or_default(), CellRange::parse_or_default(range))
        });

        if let Some(weight) = element.line_weight {
            group.set_line_weight(weight);
        }
        group.sparkline_type = element.sparkline_type.unwrap_or(SparklineTypeValues::Line);
        group.display_empty_cells_as = element
            .display_empty_cells_as
            .unwrap_or(DisplayBlanksAsValues::Zero);
        group.show_markers = element.markers.unwrap_or(false);
        group.show_high_point = element.high.unwrap_or(false);
        group.show_low_point = element.low.unwrap_or(false);
        group.show_first_point = element.first.unwrap_or(false);
        group.show_last_point = element.last.unwrap_or(false);
        group.show_negative_points = element.negative.unwrap_or(false);
        group.show_axis = element.display_x_axis.unwrap_or(false);
        group.show_hidden_data = element.display_hidden.unwrap_or(false);
        group.right_to_left = element.right_to_left.unwrap_or(false);

        group.min_axis_type = element
            .min_axis_type
            .unwrap_or(SparklineAxisMinMaxValues::Individual);
        group.max_axis_type = element
            .max_axis_type
            .unwrap_or(SparklineAxisMinMaxValues::Individual);
        if group.min_axis_type == SparklineAxisMinMaxValues::Custom {
            group.manual_min = element.manual_min;
        }
        if group.max_axis_type == SparklineAxisMinMaxValues::Custom {
            group.manual_max = element.manual_max;
        }
        group
    }

    /// Build the `x14:sparklineGroup` element; settings at their schema
    /// default are not written
    pub fn to_element(&self) -> SparklineGroup {
        let flag = |value: bool| value.then_some(true);
        let axis = |value: SparklineAxisMinMaxValues| {
            (value != SparklineAxisMinMaxValues::Individual).then_some(value)
        };
        let custom = |kind: SparklineAxisMinMaxValues, value: Option<f64>| {
            value.filter(|_| kind == SparklineAxisMinMaxValues::Custom)
        };

        SparklineGroup {
            manual_max: custom(self.max_axis_type, self.manual_max),
            manual_min: custom(self.min_axis_type, self.manual_min),
            line_weight: (self.line_weight != DEFAULT_LINE_WEIGHT).then_some(self.line_weight),
            sparkline_type: (self.sparkline_type != SparklineTypeValues::Line)
                .then_some(self.sparkline_type),
            date_axis: flag(self.date_range.is_some()),
            display_empty_cells_as: (self.display_empty_cells_as != DisplayBlanksAsValues::Zero)
                .then_some(self.display_empty_cells_as),
            markers: flag(self.show_markers),
            high: flag(self.show_high_point),
            low: flag(self.show_low_point),
            first: flag(self.show_first_point),
            last: flag(self.show_last_point),
            negative: flag(self.show_negative_points),
            display_x_axis: flag(self.show_axis),
            display_hidden: flag(self.show_hidden_data),
            min_axis_type: axis(self.min_axis_type),
            max_axis_type: axis(self.max_axis_type),
            right_to_left: flag(self.right_to_left),
            color_series: Some(self.series_color.to_element()),
            color_negative: Some(self.negative_color.to_element()),
            color_axis: Some(self.axis_color.to_element()),
            color_markers: Some(self.markers_color.to_element()),
            color_first: Some(self.first_marker_color.to_element()),
            color_last: Some(self.last_marker_color.to_element()),
            color_high: Some(self.high_marker_color.to_element()),
            color_low: Some(self.low_marker_color.to_element()),
            date_formula: self
                .date_range
                .as_ref()
                .map(|(sheet, range)| sheet_range_reference(sheet, range)),
            sparklines: self.sparklines.iter().map(SlSparkline::to_element).collect(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Clamp a line weight into [0, 1584]; NaN becomes the default weight
pub fn clamp_line_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        log::trace!("NaN line weight, using {}", DEFAULT_LINE_WEIGHT);
        return DEFAULT_LINE_WEIGHT;
    }
    let clamped = weight.clamp(0.0, MAX_LINE_WEIGHT);
    if clamped != weight {
        log::trace!("line weight {} clamped to {}", weight, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ThemeColorIndex;
    use cellcraft_ooxml::{Color, XmlPart};
    use pretty_assertions::assert_eq;

    fn locations(group: &SlSparklineGroup) -> Vec<(u32, u32)> {
        group
            .sparklines
            .iter()
            .map(|s| (s.location_row, s.location_col))
            .collect()
    }

    #[test]
    fn test_row_series() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 3, 5);
        group.set_location(1, 6, 3, 6, true);
        assert_eq!(locations(&group), vec![(1, 6), (2, 6), (3, 6)]);
        assert_eq!(group.sparklines[1].formula().as_deref(), Some("Sheet1!A2:E2"));
    }

    #[test]
    fn test_column_series() {
        let mut group = SlSparklineGroup::new("Data", 1, 1, 10, 4);
        group.set_location(11, 1, 11, 4, true);
        assert_eq!(group.sparklines.len(), 4);
        assert_eq!(group.sparklines[3].formula().as_deref(), Some("Data!D1:D10"));
        assert_eq!(locations(&group)[3], (11, 4));
    }

    #[test]
    fn test_non_vector_location_shrinks() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 3, 5);
        // 3 rows x 2 columns keeps the first column
        group.set_location(1, 6, 3, 7, true);
        assert_eq!(locations(&group), vec![(1, 6), (2, 6), (3, 6)]);
    }

    #[test]
    fn test_mismatch_creates_nothing() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 3, 5);
        group.set_location_cell(1, 6);
        group.set_location(1, 7, 7, 7, true);
        assert!(group.sparklines.is_empty());
    }

    #[test]
    fn test_reversed_corners() {
        let mut group = SlSparklineGroup::new("Sheet1", 3, 5, 1, 1);
        assert_eq!(group.data_range(), CellRange::new(1, 1, 3, 5));
        group.set_location(3, 6, 1, 6, true);
        assert_eq!(group.sparklines.len(), 3);
    }

    #[test]
    fn test_zero_indices_fall_back_to_first_row_and_column() {
        let mut group = SlSparklineGroup::new("Sheet1", 0, 0, 2, 0);
        assert_eq!(group.data_range(), CellRange::new(1, 1, 2, 1));
        group.set_location(0, 2, 2, 2, true);
        assert_eq!(locations(&group), vec![(1, 2), (2, 2)]);

        let element = group.to_element();
        let written: Vec<_> = element
            .sparklines
            .iter()
            .map(|s| (s.formula.as_deref(), s.reference.as_str()))
            .collect();
        assert_eq!(
            written,
            vec![(Some("Sheet1!A1"), "B1"), (Some("Sheet1!A2"), "B2")]
        );
    }

    #[test]
    fn test_axis_settings() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 1, 5);
        group.set_custom_min(-5.0);
        group.set_same_max_for_all();
        let element = group.to_element();
        assert_eq!(element.min_axis_type, Some(SparklineAxisMinMaxValues::Custom));
        assert_eq!(element.manual_min, Some(-5.0));
        assert_eq!(element.max_axis_type, Some(SparklineAxisMinMaxValues::Group));
        assert_eq!(element.manual_max, None);

        group.set_automatic_min();
        assert_eq!(group.to_element().min_axis_type, None);
        assert_eq!(group.manual_min(), None);
    }

    #[test]
    fn test_line_weight_clamp() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 1, 5);
        group.set_line_weight(-1.0);
        assert_eq!(group.line_weight(), 0.0);
        group.set_line_weight(2000.0);
        assert_eq!(group.line_weight(), MAX_LINE_WEIGHT);
        group.set_line_weight(2.25);
        assert_eq!(group.to_element().line_weight, Some(2.25));
    }

    #[test]
    fn test_style_colors() {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 1, 5);
        group.set_sparkline_style(SparklineStyle::Style1);
        assert_eq!(
            group.series_color.to_element(),
            Color::theme(ThemeColorIndex::Accent1.index(), Some(-0.499984740745262))
        );
        assert_eq!(group.axis_color.to_element(), Color::rgb("FF000000"));
    }

    #[test]
    fn test_element_round_trip() {
        let palette = Palette::default();
        let mut group = SlSparklineGroup::new("My Data", 2, 2, 4, 6);
        group.set_location(2, 8, 4, 8, true);
        group.set_date_axis_range("My Data", 1, 2, 1, 6);
        group.sparkline_type = SparklineTypeValues::Column;
        group.show_high_point = true;
        group.set_custom_max(100.0);

        let element = group.to_element();
        assert_eq!(element.sparklines[0].formula.as_deref(), Some("'My Data'!B2:F2"));
        assert_eq!(element.date_formula.as_deref(), Some("'My Data'!B1:F1"));

        let xml = element.to_xml().unwrap();
        let reread = SlSparklineGroup::from_element(&SparklineGroup::from_xml(&xml).unwrap(), &palette);
        assert_eq!(reread, group);
    }
}
