//! Sparkline placement and export

use cellcraft::ooxml::{SparklineGroup, SparklineTypeValues};
use cellcraft::prelude::*;
use cellcraft::{CellRange, CellRef};
use pretty_assertions::assert_eq;

fn locations(group: &SlSparklineGroup) -> Vec<String> {
    group
        .sparklines
        .iter()
        .map(|s| s.location().to_string())
        .collect()
}

fn formulas(group: &SlSparklineGroup) -> Vec<String> {
    group
        .sparklines
        .iter()
        .filter_map(|s| s.formula())
        .collect()
}

#[test]
fn test_column_of_data_next_to_column_of_cells() {
    let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 3, 1);
    group.set_location(1, 2, 3, 2, true);

    assert_eq!(group.sparklines.len(), 3);
    assert_eq!(locations(&group), ["B1", "B2", "B3"]);
    assert_eq!(formulas(&group), ["Sheet1!A1", "Sheet1!A2", "Sheet1!A3"]);
}

#[test]
fn test_square_data_binds_columns_when_asked() {
    let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 3, 3);
    group.set_location(5, 1, 5, 3, false);

    assert_eq!(locations(&group), ["A5", "B5", "C5"]);
    assert_eq!(
        formulas(&group),
        ["Sheet1!A1:A3", "Sheet1!B1:B3", "Sheet1!C1:C3"]
    );

    group.set_location(1, 5, 3, 5, true);
    assert_eq!(
        formulas(&group),
        ["Sheet1!A1:C1", "Sheet1!A2:C2", "Sheet1!A3:C3"]
    );
}

#[test]
fn test_mismatched_location_makes_nothing() {
    let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 4, 6);
    group.set_location(1, 8, 5, 8, true);
    assert!(group.sparklines.is_empty());
}

#[test]
fn test_block_location_keeps_longer_side() {
    let mut group = SlSparklineGroup::new("Sheet1", 2, 1, 5, 6);
    // 4 rows by 2 columns: the second column is dropped
    group.set_location(2, 8, 5, 9, true);
    assert_eq!(locations(&group), ["H2", "H3", "H4", "H5"]);
}

#[test]
fn test_single_cell() {
    let mut group = SlSparklineGroup::new("Data", 1, 1, 1, 12);
    group.set_location_cell(1, 14);
    assert_eq!(group.sparklines.len(), 1);
    assert_eq!(group.sparklines[0].location(), CellRef::new(1, 14));
    assert_eq!(group.sparklines[0].data, Some(CellRange::new(1, 1, 1, 12)));
}

#[test]
fn test_styled_group_round_trips() {
    let mut group = SlSparklineGroup::new("Q1 Sales", 2, 2, 4, 13);
    group.set_location(2, 14, 4, 14, true);
    group.set_sparkline_style(SparklineStyle::Style15);
    group.sparkline_type = SparklineTypeValues::Column;
    group.show_high_point = true;
    group.set_line_weight(2.25);
    group.set_custom_max(100.0);
    group.set_date_axis_range("Q1 Sales", 1, 2, 1, 13);

    let xml = group.to_xml().unwrap();
    let element = SparklineGroup::from_xml(&xml).unwrap();
    assert_eq!(element.date_formula.as_deref(), Some("'Q1 Sales'!B1:M1"));

    let back = SlSparklineGroup::from_xml(&xml, &Palette::default()).unwrap();
    assert_eq!(back.to_element(), group.to_element());
    assert_eq!(back.data_range(), CellRange::new(2, 2, 4, 13));
    assert_eq!(back.worksheet_name, "Q1 Sales");
    assert_eq!(back.manual_max(), Some(100.0));
}

#[test]
fn test_line_weight_clamped() {
    let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 1, 5);
    group.set_line_weight(5000.0);
    assert_eq!(group.line_weight(), 1584.0);
    group.set_line_weight(-1.0);
    assert_eq!(group.line_weight(), 0.0);
}
