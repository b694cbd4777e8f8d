//! Auto filter and sort state mirrors

use cellcraft_ooxml::{
    AutoFilter, ColumnFilter, CustomFilter, FilterColumn, FilterOperatorValues, SortCondition,
    SortMethodValues, SortState,
};

use crate::reference::CellRange;

/// One sort key: a column (or row) range and its direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlSortCondition {
    pub range: CellRange,
    pub descending: bool,
}

/// Sort settings of a range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlSortState {
    pub range: CellRange,
    /// Sort columns left to right instead of rows top to bottom
    pub column_sort: bool,
    pub case_sensitive: bool,
    pub sort_method: Option<SortMethodValues>,
    pub conditions: Vec<SlSortCondition>,
}

impl SlSortState {
    pub fn new(range: CellRange) -> Self {
        Self {
            range,
            column_sort: false,
            case_sensitive: false,
            sort_method: None,
            conditions: Vec::new(),
        }
    }

    /// Add a sort key
    pub fn add_condition(&mut self, range: CellRange, descending: bool) {
        self.conditions.push(SlSortCondition { range, descending });
    }

    pub fn from_element(element: &SortState) -> Self {
        Self {
            range: CellRange::parse_or_default(&element.reference),
            column_sort: element.column_sort.unwrap_or(false),
            case_sensitive: element.case_sensitive.unwrap_or(false),
            sort_method: element.sort_method,
            conditions: element
                .conditions
                .iter()
                .map(|c| SlSortCondition {
                    range: CellRange::parse_or_default(&c.reference),
                    descending: c.descending.unwrap_or(false),
                })
                .collect(),
        }
    }

    pub fn to_element(&self) -> SortState {
        SortState {
            reference: self.range.to_a1_string(),
            column_sort: self.column_sort.then_some(true),
            case_sensitive: self.case_sensitive.then_some(true),
            sort_method: self.sort_method,
            conditions: self
                .conditions
                .iter()
                .map(|c| SortCondition {
                    descending: c.descending.then_some(true),
                    reference: c.range.to_a1_string(),
                })
                .collect(),
        }
    }
}

/// Filter criteria of one column of an auto filter
#[derive(Debug, Clone, PartialEq)]
pub struct SlFilterColumn {
    /// Zero-based offset of the column within the filter range
    pub column_id: u32,
    pub hidden_button: bool,
    pub show_button: bool,
    pub filter: Option<ColumnFilter>,
}

impl SlFilterColumn {
    /// Column with a drop-down button and no criteria
    pub fn new(column_id: u32) -> Self {
        Self {
            column_id,
            hidden_button: false,
            show_button: true,
            filter: None,
        }
    }

    /// Show only rows whose value is one of `values`
    pub fn values<I, S>(column_id: u32, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: Some(ColumnFilter::Filters {
                blank: None,
                values: values.into_iter().map(Into::into).collect(),
            }),
            ..Self::new(column_id)
        }
    }

    /// Show only rows matching one comparison
    pub fn custom<S: Into<String>>(column_id: u32, operator: FilterOperatorValues, value: S) -> Self {
        Self {
            filter: Some(ColumnFilter::CustomFilters {
                and: None,
                filters: vec![CustomFilter {
                    operator: Some(operator),
                    value: value.into(),
                }],
            }),
            ..Self::new(column_id)
        }
    }

    /// Show only rows matching two comparisons, joined by AND or OR
    pub fn custom_pair<S: Into<String>>(
        column_id: u32,
        first: (FilterOperatorValues, S),
        and: bool,
        second: (FilterOperatorValues, S),
    ) -> Self {
        let filter = |(operator, value): (FilterOperatorValues, S)| CustomFilter {
            operator: Some(operator),
            value: value.into(),
        };
        Self {
            filter: Some(ColumnFilter::CustomFilters {
                and: and.then_some(true),
                filters: vec![filter(first), filter(second)],
            }),
            ..Self::new(column_id)
        }
    }

    /// Top or bottom `count` items (or percent)
    pub fn top10(column_id: u32, top: bool, percent: bool, count: f64) -> Self {
        Self {
            filter: Some(ColumnFilter::Top10 {
                top: (!top).then_some(false),
                percent: percent.then_some(true),
                value: count,
                filter_value: None,
            }),
            ..Self::new(column_id)
        }
    }

    pub fn from_element(element: &FilterColumn) -> Self {
        Self {
            column_id: element.column_id,
            hidden_button: element.hidden_button.unwrap_or(false),
            show_button: element.show_button.unwrap_or(true),
            filter: element.filter.clone(),
        }
    }

    pub fn to_element(&self) -> FilterColumn {
        FilterColumn {
            column_id: self.column_id,
            hidden_button: self.hidden_button.then_some(true),
            show_button: (!self.show_button).then_some(false),
            filter: self.filter.clone(),
        }
    }
}

/// Auto filter over a range
#[derive(Debug, Clone, PartialEq)]
pub struct SlAutoFilter {
    pub range: CellRange,
    pub filter_columns: Vec<SlFilterColumn>,
    pub sort_state: Option<SlSortState>,
}

impl SlAutoFilter {
    pub fn new(range: CellRange) -> Self {
        Self {
            range,
            filter_columns: Vec::new(),
            sort_state: None,
        }
    }

    /// Add a column's criteria, replacing any criteria for the same column
    ///
    /// Columns outside the filter range are ignored.
    pub fn set_filter_column(&mut self, column: SlFilterColumn) {
        if column.column_id >= self.range.col_count() {
            log::debug!(
                "filter column {} outside auto filter {}, ignored",
                column.column_id,
                self.range
            );
            return;
        }
        match self
            .filter_columns
            .iter_mut()
            .find(|c| c.column_id == column.column_id)
        {
            Some(existing) => *existing = column,
            None => {
                self.filter_columns.push(column);
                self.filter_columns.sort_by_key(|c| c.column_id);
            }
        }
    }

    pub fn clear_filters(&mut self) {
        self.filter_columns.clear();
    }

    pub fn from_element(element: &AutoFilter) -> Self {
        Self {
            range: CellRange::parse_or_default(&element.reference),
            filter_columns: element
                .filter_columns
                .iter()
                .map(SlFilterColumn::from_element)
                .collect(),
            sort_state: element.sort_state.as_ref().map(SlSortState::from_element),
        }
    }

    pub fn to_element(&self) -> AutoFilter {
        AutoFilter {
            reference: self.range.to_a1_string(),
            filter_columns: self
                .filter_columns
                .iter()
                .map(SlFilterColumn::to_element)
                .collect(),
            sort_state: self.sort_state.as_ref().map(SlSortState::to_element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellcraft_ooxml::XmlPart;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_columns_sorted_and_replaced() {
        let mut filter = SlAutoFilter::new(CellRange::new(1, 1, 10, 3));
        filter.set_filter_column(SlFilterColumn::values(2, ["a", "b"]));
        filter.set_filter_column(SlFilterColumn::custom(0, FilterOperatorValues::GreaterThan, "5"));
        filter.set_filter_column(SlFilterColumn::values(2, ["c"]));
        filter.set_filter_column(SlFilterColumn::new(7));

        let ids: Vec<u32> = filter.filter_columns.iter().map(|c| c.column_id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(
            filter.filter_columns[1].filter,
            Some(ColumnFilter::Filters {
                blank: None,
                values: vec!["c".to_string()],
            })
        );
    }

    #[test]
    fn test_auto_filter_xml() {
        let mut filter = SlAutoFilter::new(CellRange::new(1, 1, 4, 2));
        filter.set_filter_column(SlFilterColumn::custom_pair(
            1,
            (FilterOperatorValues::GreaterThanOrEqual, "10"),
            true,
            (FilterOperatorValues::LessThan, "20"),
        ));
        let mut sort = SlSortState::new(CellRange::new(2, 1, 4, 2));
        sort.add_condition(CellRange::new(2, 2, 4, 2), true);
        filter.sort_state = Some(sort);

        let xml = filter.to_element().to_xml().unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<autoFilter ref="A1:B4"><filterColumn colId="1"><customFilters and="1">"#,
                r#"<customFilter operator="greaterThanOrEqual" val="10"/>"#,
                r#"<customFilter operator="lessThan" val="20"/></customFilters></filterColumn>"#,
                r#"<sortState ref="A2:B4"><sortCondition descending="1" ref="B2:B4"/></sortState>"#,
                r#"</autoFilter>"#
            )
        );
        let reread = SlAutoFilter::from_element(&AutoFilter::from_xml(&xml).unwrap());
        assert_eq!(reread, filter);
    }

    #[test]
    fn test_top10_defaults_not_written() {
        let column = SlFilterColumn::top10(0, true, false, 10.0);
        assert_eq!(
            column.to_element().to_xml().unwrap(),
            r#"<filterColumn colId="0"><top10 val="10"/></filterColumn>"#
        );
    }
}
