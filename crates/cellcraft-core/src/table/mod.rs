//! Worksheet tables
//!
//! [`SlTable`] mirrors a table part: the range it covers, its header and
//! totals rows, its columns, auto filter, sort state and style. Ranges are
//! 1-based and include the header and totals rows.

mod autofilter;

pub use autofilter::{SlAutoFilter, SlFilterColumn, SlSortCondition, SlSortState};

use std::fmt;

use cellcraft_ooxml::{Table, TableColumn, TableStyleInfo, TableValues, TotalsRowFunctionValues};

use crate::reference::CellRange;

/// Built-in table styles of the style gallery
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableStyle {
    None,
    /// `TableStyleLight1` to `TableStyleLight21`
    Light(u8),
    /// `TableStyleMedium1` to `TableStyleMedium28`
    Medium(u8),
    /// `TableStyleDark1` to `TableStyleDark11`
    Dark(u8),
    /// A style defined in the workbook's own table styles
    Custom(String),
}

const LIGHT: &str = "TableStyleLight";
const MEDIUM: &str = "TableStyleMedium";
const DARK: &str = "TableStyleDark";

impl TableStyle {
    /// Style name as written in `tableStyleInfo`
    ///
    /// `None` and out-of-range gallery numbers have no name.
    pub fn name(&self) -> Option<String> {
        let (prefix, n, max) = match self {
            TableStyle::None => return None,
            TableStyle::Custom(name) => return Some(name.clone()),
            TableStyle::Light(n) => (LIGHT, *n, 21),
            TableStyle::Medium(n) => (MEDIUM, *n, 28),
            TableStyle::Dark(n) => (DARK, *n, 11),
        };
        if (1..=max).contains(&n) {
            Some(format!("{}{}", prefix, n))
        } else {
            log::debug!("no table style {}{}", prefix, n);
            None
        }
    }

    /// Parse a style name; names outside the gallery are kept as custom styles
    pub fn from_name(name: &str) -> Self {
        let gallery: [(&str, u8, fn(u8) -> TableStyle); 3] = [
            (LIGHT, 21, TableStyle::Light),
            (MEDIUM, 28, TableStyle::Medium),
            (DARK, 11, TableStyle::Dark),
        ];
        for (prefix, max, variant) in gallery {
            if let Some(n) = name.strip_prefix(prefix).and_then(|n| n.parse::<u8>().ok()) {
                if (1..=max).contains(&n) {
                    return variant(n);
                }
            }
        }
        TableStyle::Custom(name.to_string())
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle::Medium(9)
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().as_deref().unwrap_or("None"))
    }
}

/// SUBTOTAL function number for a totals row aggregate
///
/// The 100-series numbers skip rows hidden by the filter.
pub fn subtotal_code(function: TotalsRowFunctionValues) -> Option<u32> {
    use TotalsRowFunctionValues::*;
    match function {
        Average => Some(101),
        CountNumbers => Some(102),
        Count => Some(103),
        Maximum => Some(104),
        Minimum => Some(105),
        StandardDeviation => Some(107),
        Sum => Some(109),
        Variance => Some(110),
        None | Custom => Option::None,
    }
}

/// Escape a column name for use inside a structured reference
fn escape_column_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '[' | ']' | '#' | '\'') {
            out.push('\'');
        }
        out.push(c);
    }
    out
}

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlTableColumn {
    pub id: u32,
    pub name: String,
    pub unique_name: Option<String>,
    pub totals_row_function: Option<TotalsRowFunctionValues>,
    pub totals_row_label: Option<String>,
    /// Formula of a custom totals row function
    pub totals_row_formula: Option<String>,
    pub calculated_column_formula: Option<String>,
    pub query_table_field_id: Option<u32>,
    pub header_row_dxf_id: Option<u32>,
    pub data_dxf_id: Option<u32>,
    pub totals_row_dxf_id: Option<u32>,
    pub header_row_cell_style: Option<String>,
    pub data_cell_style: Option<String>,
    pub totals_row_cell_style: Option<String>,
}

impl SlTableColumn {
    pub fn new<S: Into<String>>(id: u32, name: S) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_element(element: &TableColumn) -> Self {
        Self {
            id: element.id,
            name: element.name.clone(),
            unique_name: element.unique_name.clone(),
            totals_row_function: element.totals_row_function,
            totals_row_label: element.totals_row_label.clone(),
            totals_row_formula: element.totals_row_formula.clone(),
            calculated_column_formula: element.calculated_column_formula.clone(),
            query_table_field_id: element.query_table_field_id,
            header_row_dxf_id: element.header_row_dxf_id,
            data_dxf_id: element.data_dxf_id,
            totals_row_dxf_id: element.totals_row_dxf_id,
            header_row_cell_style: element.header_row_cell_style.clone(),
            data_cell_style: element.data_cell_style.clone(),
            totals_row_cell_style: element.totals_row_cell_style.clone(),
        }
    }

    pub fn to_element(&self) -> TableColumn {
        TableColumn {
            id: self.id,
            unique_name: self.unique_name.clone(),
            name: self.name.clone(),
            // "none" is the schema default
            totals_row_function: self
                .totals_row_function
                .filter(|f| *f != TotalsRowFunctionValues::None),
            totals_row_label: self.totals_row_label.clone(),
            query_table_field_id: self.query_table_field_id,
            header_row_dxf_id: self.header_row_dxf_id,
            data_dxf_id: self.data_dxf_id,
            totals_row_dxf_id: self.totals_row_dxf_id,
            header_row_cell_style: self.header_row_cell_style.clone(),
            data_cell_style: self.data_cell_style.clone(),
            totals_row_cell_style: self.totals_row_cell_style.clone(),
            calculated_column_formula: self.calculated_column_formula.clone(),
            totals_row_formula: self.totals_row_formula.clone(),
        }
    }
}

/// A worksheet table
#[derive(Debug, Clone, PartialEq)]
pub struct SlTable {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub comment: Option<String>,
    range: CellRange,
    pub table_type: Option<TableValues>,
    header_row_count: u32,
    totals_row_count: u32,
    pub totals_row_shown: Option<bool>,
    pub insert_row: bool,
    pub insert_row_shift: bool,
    pub published: bool,
    pub header_row_dxf_id: Option<u32>,
    pub data_dxf_id: Option<u32>,
    pub totals_row_dxf_id: Option<u32>,
    pub header_row_border_dxf_id: Option<u32>,
    pub table_border_dxf_id: Option<u32>,
    pub totals_row_border_dxf_id: Option<u32>,
    pub connection_id: Option<u32>,
    pub auto_filter: Option<SlAutoFilter>,
    pub sort_state: Option<SlSortState>,
    pub columns: Vec<SlTableColumn>,
    style: TableStyle,
    pub show_first_column: bool,
    pub show_last_column: bool,
    pub show_banded_rows: bool,
    pub show_banded_columns: bool,
}

impl SlTable {
    /// Table over a range, corners in any order
    ///
    /// The first row is the header row. Columns are named `Column1`,
    /// `Column2`, ... until the host fills in the header cell text.
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        let range = CellRange::new(start_row, start_col, end_row, end_col);
        let columns = (1..=range.col_count())
            .map(|i| SlTableColumn::new(i, format!("Column{}", i)))
            .collect();
        Self {
            id: 1,
            name: "Table1".to_string(),
            display_name: "Table1".to_string(),
            comment: None,
            range,
            table_type: None,
            header_row_count: 1,
            totals_row_count: 0,
            totals_row_shown: None,
            insert_row: false,
            insert_row_shift: false,
            published: false,
            header_row_dxf_id: None,
            data_dxf_id: None,
            totals_row_dxf_id: None,
            header_row_border_dxf_id: None,
            table_border_dxf_id: None,
            totals_row_border_dxf_id: None,
            connection_id: None,
            auto_filter: Some(SlAutoFilter::new(range)),
            sort_state: None,
            columns,
            style: TableStyle::default(),
            show_first_column: false,
            show_last_column: false,
            show_banded_rows: true,
            show_banded_columns: false,
        }
    }

    /// Set the name; the display name drops characters a formula can't hold
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.display_name = name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
    }

    /// Range covered, header and totals rows included
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// `A1:D10` form of [`range`](Self::range)
    pub fn reference(&self) -> String {
        self.range.to_a1_string()
    }

    /// Rows between the header and totals rows, if there are any
    pub fn data_range(&self) -> Option<CellRange> {
        let start = self.range.start_row + self.header_row_count;
        let end = self.range.end_row.checked_sub(self.totals_row_count)?;
        (start <= end).then(|| CellRange::new(start, self.range.start_col, end, self.range.end_col))
    }

    /// Range an auto filter covers: everything above the totals row
    fn filter_range(&self) -> CellRange {
        let end_row = self
            .range
            .end_row
            .saturating_sub(self.totals_row_count)
            .max(self.range.start_row);
        CellRange::new(self.range.start_row, self.range.start_col, end_row, self.range.end_col)
    }

    pub fn has_header_row(&self) -> bool {
        self.header_row_count > 0
    }

    /// Show or hide the header row
    ///
    /// A table without a header row has no auto filter; turning the header
    /// back on gives it an empty one.
    pub fn set_header_row(&mut self, show: bool) {
        if show == self.has_header_row() {
            return;
        }
        self.header_row_count = u32::from(show);
        self.auto_filter = show.then(|| SlAutoFilter::new(self.filter_range()));
    }

    pub fn has_total_row(&self) -> bool {
        self.totals_row_count > 0
    }

    /// Show or hide the totals row
    ///
    /// The totals row is added below the current last row, growing the
    /// range by one; removing it shrinks the range again.
    pub fn set_total_row(&mut self, show: bool) {
        if show == self.has_total_row() {
            return;
        }
        if show {
            self.range.end_row += 1;
            self.totals_row_count = 1;
            self.totals_row_shown = None;
        } else {
            self.range.end_row = self.range.end_row.saturating_sub(1).max(self.range.start_row);
            self.totals_row_count = 0;
            self.totals_row_shown = Some(false);
        }
        let filter_range = self.filter_range();
        if let Some(filter) = &mut self.auto_filter {
            filter.range = filter_range;
        }
    }

    fn column_mut(&mut self, col: u32) -> Option<&mut SlTableColumn> {
        let found = (col as usize)
            .checked_sub(1)
            .and_then(|i| self.columns.get_mut(i));
        if found.is_none() {
            log::debug!("table {} has no column {}", self.display_name, col);
        }
        found
    }

    /// Text shown in a column's totals row cell
    ///
    /// `col` is the 1-based column within the table. A label replaces any
    /// aggregate function on that column.
    pub fn set_total_row_label(&mut self, col: u32, label: &str) {
        if let Some(column) = self.column_mut(col) {
            column.totals_row_label = Some(label.to_string());
            column.totals_row_function = None;
            column.totals_row_formula = None;
        }
    }

    /// Aggregate shown in a column's totals row cell
    ///
    /// Replaces any label on that column. Use
    /// [`set_total_row_custom`](Self::set_total_row_custom) for a formula
    /// of your own.
    pub fn set_total_row_function(&mut self, col: u32, function: TotalsRowFunctionValues) {
        if let Some(column) = self.column_mut(col) {
            column.totals_row_label = None;
            column.totals_row_formula = None;
            column.totals_row_function = match function {
                TotalsRowFunctionValues::None => None,
                f => Some(f),
            };
        }
    }

    /// Custom totals row formula for a column, without the leading `=`
    pub fn set_total_row_custom(&mut self, col: u32, formula: &str) {
        if let Some(column) = self.column_mut(col) {
            column.totals_row_label = None;
            column.totals_row_function = Some(TotalsRowFunctionValues::Custom);
            column.totals_row_formula = Some(formula.trim_start_matches('=').to_string());
        }
    }

    /// Formula the host writes into a column's totals row cell
    ///
    /// Built-in aggregates become `SUBTOTAL(<code>,Table[Column])`; custom
    /// functions return their own formula. Columns with a label or no
    /// function have none.
    pub fn total_row_formula(&self, col: u32) -> Option<String> {
        let column = self.columns.get((col as usize).checked_sub(1)?)?;
        let function = column.totals_row_function?;
        if function == TotalsRowFunctionValues::Custom {
            return column.totals_row_formula.clone();
        }
        subtotal_code(function).map(|code| {
            format!(
                "SUBTOTAL({},{}[{}])",
                code,
                self.display_name,
                escape_column_name(&column.name)
            )
        })
    }

    pub fn table_style(&self) -> &TableStyle {
        &self.style
    }

    pub fn set_table_style(&mut self, style: TableStyle) {
        self.style = style;
    }

    /// Sort the data rows by one column
    ///
    /// `col` is the 1-based column within the table. Replaces any earlier
    /// sort. Tables without data rows are left unsorted.
    pub fn sort(&mut self, col: u32, ascending: bool) {
        if col == 0 || col > self.range.col_count() {
            log::debug!("table {} has no column {} to sort by", self.display_name, col);
            return;
        }
        let Some(data) = self.data_range() else {
            log::debug!("table {} has no data rows to sort", self.display_name);
            return;
        };
        let key_col = data.start_col + col - 1;
        let mut state = SlSortState::new(data);
        state.add_condition(
            CellRange::new(data.start_row, key_col, data.end_row, key_col),
            !ascending,
        );
        self.sort_state = Some(state);
    }

    pub fn from_element(element: &Table) -> Self {
        let style_info = element.style_info.clone().unwrap_or_default();
        Self {
            id: element.id,
            name: element
                .name
                .clone()
                .unwrap_or_else(|| element.display_name.clone()),
            display_name: element.display_name.clone(),
            comment: element.comment.clone(),
            range: CellRange::parse_or_default(&element.reference),
            table_type: element.table_type,
            header_row_count: element.header_row_count.unwrap_or(1).min(1),
            totals_row_count: element.totals_row_count.unwrap_or(0).min(1),
            totals_row_shown: element.totals_row_shown,
            insert_row: element.insert_row.unwrap_or(false),
            insert_row_shift: element.insert_row_shift.unwrap_or(false),
            published: element.published.unwrap_or(false),
            header_row_dxf_id: element.header_row_dxf_id,
            data_dxf_id: element.data_dxf_id,
            totals_row_dxf_id: element.totals_row_dxf_id,
            header_row_border_dxf_id: element.header_row_border_dxf_id,
            table_border_dxf_id: element.table_border_dxf_id,
            totals_row_border_dxf_id: element.totals_row_border_dxf_id,
            connection_id: element.connection_id,
            auto_filter: element.auto_filter.as_ref().map(SlAutoFilter::from_element),
            sort_state: element.sort_state.as_ref().map(SlSortState::from_element),
            columns: element
                .columns
                .iter()
                .map(SlTableColumn::from_element)
                .collect(),
            style: style_info
                .name
                .as_deref()
                .map(TableStyle::from_name)
                .unwrap_or(TableStyle::None),
            show_first_column: style_info.show_first_column.unwrap_or(false),
            show_last_column: style_info.show_last_column.unwrap_or(false),
            show_banded_rows: style_info.show_row_stripes.unwrap_or(false),
            show_banded_columns: style_info.show_column_stripes.unwrap_or(false),
        }
    }

    pub fn to_element(&self) -> Table {
        let style_info = (self.style != TableStyle::None
            || self.show_first_column
            || self.show_last_column
            || self.show_banded_rows
            || self.show_banded_columns)
            .then(|| TableStyleInfo {
                name: self.style.name(),
                show_first_column: Some(self.show_first_column),
                show_last_column: Some(self.show_last_column),
                show_row_stripes: Some(self.show_banded_rows),
                show_column_stripes: Some(self.show_banded_columns),
            });

        Table {
            id: self.id,
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            display_name: self.display_name.clone(),
            comment: self.comment.clone(),
            reference: self.reference(),
            table_type: self.table_type,
            header_row_count: (self.header_row_count != 1).then_some(self.header_row_count),
            insert_row: self.insert_row.then_some(true),
            insert_row_shift: self.insert_row_shift.then_some(true),
            totals_row_count: (self.totals_row_count > 0).then_some(self.totals_row_count),
            totals_row_shown: self.totals_row_shown,
            published: self.published.then_some(true),
            header_row_dxf_id: self.header_row_dxf_id,
            data_dxf_id: self.data_dxf_id,
            totals_row_dxf_id: self.totals_row_dxf_id,
            header_row_border_dxf_id: self.header_row_border_dxf_id,
            table_border_dxf_id: self.table_border_dxf_id,
            totals_row_border_dxf_id: self.totals_row_border_dxf_id,
            connection_id: self.connection_id,
            auto_filter: self.auto_filter.as_ref().map(SlAutoFilter::to_element),
            sort_state: self.sort_state.as_ref().map(SlSortState::to_element),
            columns: self.columns.iter().map(SlTableColumn::to_element).collect(),
            style_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellcraft_ooxml::XmlPart;
    use pretty_assertions::assert_eq;

    fn sales_table() -> SlTable {
        let mut table = SlTable::new(5, 3, 1, 1);
        table.set_name("Sales Data");
        table.columns[0].name = "Region".into();
        table.columns[1].name = "Units".into();
        table.columns[2].name = "Price [USD]".into();
        table
    }

    #[test]
    fn test_new_table() {
        let table = sales_table();
        assert_eq!(table.reference(), "A1:C5");
        assert_eq!(table.display_name, "Sales_Data");
        assert_eq!(table.data_range(), Some(CellRange::new(2, 1, 5, 3)));
        assert_eq!(
            table.auto_filter.as_ref().map(|f| f.range),
            Some(CellRange::new(1, 1, 5, 3))
        );
        assert_eq!(table.table_style(), &TableStyle::Medium(9));
    }

    #[test]
    fn test_zero_indices_fall_back_to_first_row_and_column() {
        let table = SlTable::new(0, 0, 3, 2);
        assert_eq!(table.reference(), "A1:B3");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.data_range(), Some(CellRange::new(2, 1, 3, 2)));
    }

    #[test]
    fn test_header_row_toggles_auto_filter() {
        let mut table = sales_table();
        table.set_header_row(false);
        assert!(table.auto_filter.is_none());
        assert_eq!(table.data_range(), Some(CellRange::new(1, 1, 5, 3)));

        table.set_header_row(true);
        assert_eq!(
            table.auto_filter,
            Some(SlAutoFilter::new(CellRange::new(1, 1, 5, 3)))
        );
    }

    #[test]
    fn test_total_row() {
        let mut table = sales_table();
        table.set_total_row(true);
        assert_eq!(table.reference(), "A1:C6");
        assert_eq!(table.data_range(), Some(CellRange::new(2, 1, 5, 3)));
        assert_eq!(
            table.auto_filter.as_ref().map(|f| f.range),
            Some(CellRange::new(1, 1, 5, 3))
        );

        table.set_total_row_label(1, "Total");
        table.set_total_row_function(2, TotalsRowFunctionValues::Sum);
        table.set_total_row_function(3, TotalsRowFunctionValues::Average);
        assert_eq!(table.total_row_formula(1), None);
        assert_eq!(
            table.total_row_formula(2).as_deref(),
            Some("SUBTOTAL(109,Sales_Data[Units])")
        );
        assert_eq!(
            table.total_row_formula(3).as_deref(),
            Some("SUBTOTAL(101,Sales_Data[Price '[USD']])")
        );

        table.set_total_row(false);
        assert_eq!(table.reference(), "A1:C5");
        assert_eq!(table.totals_row_shown, Some(false));
    }

    #[test]
    fn test_label_and_function_exclusive() {
        let mut table = sales_table();
        table.set_total_row_function(1, TotalsRowFunctionValues::Count);
        table.set_total_row_label(1, "Total");
        assert_eq!(table.columns[0].totals_row_function, None);

        table.set_total_row_custom(2, "=SUM([Units])*2");
        assert_eq!(table.columns[1].totals_row_label, None);
        assert_eq!(table.total_row_formula(2).as_deref(), Some("SUM([Units])*2"));

        // out of range columns are ignored
        table.set_total_row_label(9, "x");
        assert_eq!(table.total_row_formula(9), None);
    }

    #[test]
    fn test_subtotal_codes() {
        use TotalsRowFunctionValues::*;
        let codes: Vec<_> = [
            Sum, Minimum, Maximum, Average, Count, CountNumbers, StandardDeviation, Variance,
        ]
        .into_iter()
        .map(subtotal_code)
        .collect();
        assert_eq!(
            codes,
            [109, 105, 104, 101, 103, 102, 107, 110].map(Some).to_vec()
        );
        assert_eq!(subtotal_code(None), Option::None);
        assert_eq!(subtotal_code(Custom), Option::None);
    }

    #[test]
    fn test_table_style_names() {
        assert_eq!(TableStyle::Light(1).name().as_deref(), Some("TableStyleLight1"));
        assert_eq!(TableStyle::Dark(11).name().as_deref(), Some("TableStyleDark11"));
        assert_eq!(TableStyle::Medium(29).name(), None);
        assert_eq!(TableStyle::None.name(), None);
        assert_eq!(TableStyle::from_name("TableStyleMedium28"), TableStyle::Medium(28));
        assert_eq!(
            TableStyle::from_name("TableStyleLight22"),
            TableStyle::Custom("TableStyleLight22".into())
        );
        assert_eq!(TableStyle::Medium(2).to_string(), "TableStyleMedium2");
    }

    #[test]
    fn test_sort() {
        let mut table = sales_table();
        table.sort(2, false);
        let state = table.sort_state.as_ref().unwrap();
        assert_eq!(state.range, CellRange::new(2, 1, 5, 3));
        assert_eq!(
            state.conditions,
            vec![SlSortCondition {
                range: CellRange::new(2, 2, 5, 2),
                descending: true,
            }]
        );

        table.sort(4, true);
        assert_eq!(table.sort_state.as_ref().unwrap().conditions[0].range.start_col, 2);

        let mut header_only = SlTable::new(1, 1, 1, 2);
        header_only.sort(1, true);
        assert!(header_only.sort_state.is_none());
    }

    #[test]
    fn test_export() {
        let mut table = sales_table();
        table.id = 3;
        table.set_total_row(true);
        table.set_total_row_label(1, "Total");
        table.set_total_row_function(2, TotalsRowFunctionValues::Sum);
        table.set_table_style(TableStyle::Light(9));

        let xml = table.to_element().to_xml().unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<table xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
                r#"id="3" name="Sales Data" displayName="Sales_Data" ref="A1:C6" totalsRowCount="1">"#,
                r#"<autoFilter ref="A1:C5"/><tableColumns count="3">"#,
                r#"<tableColumn id="1" name="Region" totalsRowLabel="Total"/>"#,
                r#"<tableColumn id="2" name="Units" totalsRowFunction="sum"/>"#,
                r#"<tableColumn id="3" name="Price [USD]"/></tableColumns>"#,
                r#"<tableStyleInfo name="TableStyleLight9" showFirstColumn="0" "#,
                r#"showLastColumn="0" showRowStripes="1" showColumnStripes="0"/></table>"#
            )
        );

        let reread = SlTable::from_element(&Table::from_xml(&xml).unwrap());
        assert_eq!(reread, table);
    }

    #[test]
    fn test_import_without_style_info() {
        let xml = r#"<table id="2" displayName="T2" ref="B2:C4" headerRowCount="0"><tableColumns count="2"><tableColumn id="1" name="a"/><tableColumn id="2" name="b"/></tableColumns></table>"#;
        let table = SlTable::from_element(&Table::from_xml(xml).unwrap());
        assert_eq!(table.name, "T2");
        assert!(!table.has_header_row());
        assert_eq!(table.table_style(), &TableStyle::None);
        assert!(!table.show_banded_rows);
        assert_eq!(table.data_range(), Some(CellRange::new(2, 2, 4, 3)));
        assert!(table.to_element().style_info.is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let table = sales_table();
        let mut copy = table.clone();
        copy.set_total_row(true);
        copy.columns[0].name = "Changed".into();
        assert!(!table.has_total_row());
        assert_eq!(table.columns[0].name, "Region");
    }
}
