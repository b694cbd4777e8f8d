//! Tables with totals rows, filters, sorting and differential formats

use cellcraft::ooxml::FilterOperatorValues;
use cellcraft::prelude::*;
use cellcraft::{SlDifferentialFormat, SlFilterColumn};
use pretty_assertions::assert_eq;

fn quarterly() -> SlTable {
    let mut table = SlTable::new(1, 1, 9, 4);
    table.id = 2;
    table.set_name("Quarterly");
    for (column, name) in table.columns.iter_mut().zip(["Region", "Q1", "Q2", "Q3"]) {
        column.name = name.to_string();
    }
    table
}

#[test]
fn test_totals_row_formulas() {
    let mut table = quarterly();
    table.set_total_row(true);
    table.set_total_row_label(1, "Total");
    table.set_total_row_function(2, TotalsRowFunctionValues::Sum);
    table.set_total_row_function(3, TotalsRowFunctionValues::Maximum);
    table.set_total_row_function(4, TotalsRowFunctionValues::StandardDeviation);

    assert_eq!(table.reference(), "A1:D10");
    let formulas: Vec<_> = (1..=4).map(|c| table.total_row_formula(c)).collect();
    assert_eq!(
        formulas,
        vec![
            None,
            Some("SUBTOTAL(109,Quarterly[Q1])".to_string()),
            Some("SUBTOTAL(104,Quarterly[Q2])".to_string()),
            Some("SUBTOTAL(107,Quarterly[Q3])".to_string()),
        ]
    );
}

#[test]
fn test_filtered_sorted_table_round_trips() {
    let mut table = quarterly();
    table.set_table_style(TableStyle::Dark(3));
    table.show_first_column = true;
    table.show_banded_columns = true;
    if let Some(filter) = table.auto_filter.as_mut() {
        filter.set_filter_column(SlFilterColumn::values(0, ["East", "West"]));
        filter.set_filter_column(SlFilterColumn::custom(
            1,
            FilterOperatorValues::GreaterThan,
            "1000",
        ));
    }
    table.sort(3, false);

    let xml = table.to_xml().unwrap();
    assert!(xml.contains(r#"<tableStyleInfo name="TableStyleDark3" showFirstColumn="1""#));
    assert!(xml.contains(r#"<sortState ref="A2:D9"><sortCondition descending="1" ref="C2:C9"/>"#));

    let back = SlTable::from_xml(&xml, &Palette::default()).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_header_row_off_drops_filter() {
    let mut table = quarterly();
    table.set_header_row(false);
    let element = table.to_element();
    assert_eq!(element.header_row_count, Some(0));
    assert!(element.auto_filter.is_none());
    assert_eq!(
        table.data_range().map(|r| r.to_a1_string()).as_deref(),
        Some("A1:D9")
    );
}

#[test]
fn test_column_format_registered_as_dxf() {
    let palette = Palette::default();
    let mut tables = StyleTables::new(&palette);

    let mut highlight = SlDifferentialFormat::new(&palette);
    highlight.font.set_bold(true);
    highlight.fill.set_solid_theme(ThemeColorIndex::Accent6, 0.6);

    let mut table = quarterly();
    let dxf = tables.register_differential_format(&highlight);
    table.columns[1].data_dxf_id = Some(dxf);
    assert_eq!(tables.register_differential_format(&highlight.clone()), dxf);

    let element = table.to_element();
    assert_eq!(element.columns[1].data_dxf_id, Some(0));
    let stored = tables.differential_format(dxf).unwrap();
    assert_eq!(stored.to_key(), highlight.to_key());
}
