//! Table part elements: `table`, `tableColumn`, `autoFilter`, `sortState`

use crate::error::{OoxmlError, OoxmlResult};
use crate::node::{XmlElement, XmlPart};
use crate::values::{FilterOperatorValues, SortMethodValues, TableValues, TotalsRowFunctionValues};

/// SpreadsheetML main namespace, written on the root of a table part
pub const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

fn required<T>(value: Option<T>, element: &'static str, attribute: &'static str) -> OoxmlResult<T> {
    value.ok_or(OoxmlError::MissingAttribute { element, attribute })
}

/// `CT_SortCondition`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortCondition {
    pub descending: Option<bool>,
    pub reference: String,
}

/// `CT_SortState`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub reference: String,
    pub column_sort: Option<bool>,
    pub case_sensitive: Option<bool>,
    pub sort_method: Option<SortMethodValues>,
    pub conditions: Vec<SortCondition>,
}

impl XmlPart for SortState {
    const TAG: &'static str = "sortState";

    fn to_element(&self) -> XmlElement {
        let mut el = XmlElement::new(Self::TAG)
            .opt_bool("columnSort", self.column_sort)
            .opt_bool("caseSensitive", self.case_sensitive)
            .opt_attr("sortMethod", self.sort_method)
            .with_attr("ref", &self.reference);
        for condition in &self.conditions {
            el = el.with_child(
                XmlElement::new("sortCondition")
                    .opt_bool("descending", condition.descending)
                    .with_attr("ref", &condition.reference),
            );
        }
        el
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let conditions = element
            .children_named("sortCondition")
            .map(|c| {
                Ok(SortCondition {
                    descending: c.bool_attr("descending"),
                    reference: required(
                        c.attr("ref").map(str::to_string),
                        "sortCondition",
                        "ref",
                    )?,
                })
            })
            .collect::<OoxmlResult<Vec<_>>>()?;
        Ok(Self {
            reference: required(element.attr("ref").map(str::to_string), Self::TAG, "ref")?,
            column_sort: element.bool_attr("columnSort"),
            case_sensitive: element.bool_attr("caseSensitive"),
            sort_method: element.parse_attr("sortMethod"),
            conditions,
        })
    }
}

/// `CT_CustomFilter`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomFilter {
    pub operator: Option<FilterOperatorValues>,
    pub value: String,
}

/// The criteria held by a filter column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    /// Match any of a list of values
    Filters { blank: Option<bool>, values: Vec<String> },
    /// One or two comparisons, joined by AND when `and` is set
    CustomFilters {
        and: Option<bool>,
        filters: Vec<CustomFilter>,
    },
    /// Top/bottom N items or percent
    Top10 {
        top: Option<bool>,
        percent: Option<bool>,
        value: f64,
        filter_value: Option<f64>,
    },
}

/// `CT_FilterColumn`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterColumn {
    /// Zero-based column offset within the filter range
    pub column_id: u32,
    pub hidden_button: Option<bool>,
    pub show_button: Option<bool>,
    pub filter: Option<ColumnFilter>,
}

impl XmlPart for FilterColumn {
    const TAG: &'static str = "filterColumn";

    fn to_element(&self) -> XmlElement {
        let filter = self.filter.as_ref().map(|f| match f {
            ColumnFilter::Filters { blank, values } => {
                let mut el = XmlElement::new("filters").opt_bool("blank", *blank);
                for v in values {
                    el = el.with_child(XmlElement::new("filter").with_attr("val", v));
                }
                el
            }
            ColumnFilter::CustomFilters { and, filters } => {
                let mut el = XmlElement::new("customFilters").opt_bool("and", *and);
                for f in filters {
                    el = el.with_child(
                        XmlElement::new("customFilter")
                            .opt_attr("operator", f.operator)
                            .with_attr("val", &f.value),
                    );
                }
                el
            }
            ColumnFilter::Top10 {
                top,
                percent,
                value,
                filter_value,
            } => XmlElement::new("top10")
                .opt_bool("top", *top)
                .opt_bool("percent", *percent)
                .with_attr("val", value)
                .opt_attr("filterVal", *filter_value),
        });
        XmlElement::new(Self::TAG)
            .with_attr("colId", self.column_id)
            .opt_bool("hiddenButton", self.hidden_button)
            .opt_bool("showButton", self.show_button)
            .opt_child(filter)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let filter = if let Some(f) = element.child("filters") {
            Some(ColumnFilter::Filters {
                blank: f.bool_attr("blank"),
                values: f
                    .children_named("filter")
                    .filter_map(|v| v.attr("val").map(str::to_string))
                    .collect(),
            })
        } else if let Some(f) = element.child("customFilters") {
            Some(ColumnFilter::CustomFilters {
                and: f.bool_attr("and"),
                filters: f
                    .children_named("customFilter")
                    .map(|c| CustomFilter {
                        operator: c.parse_attr("operator"),
                        value: c.attr("val").unwrap_or_default().to_string(),
                    })
                    .collect(),
            })
        } else if let Some(f) = element.child("top10") {
            Some(ColumnFilter::Top10 {
                top: f.bool_attr("top"),
                percent: f.bool_attr("percent"),
                value: required(f.f64_attr("val"), "top10", "val")?,
                filter_value: f.f64_attr("filterVal"),
            })
        } else {
            None
        };
        Ok(Self {
            column_id: required(element.parse_attr("colId"), Self::TAG, "colId")?,
            hidden_button: element.bool_attr("hiddenButton"),
            show_button: element.bool_attr("showButton"),
            filter,
        })
    }
}

/// `CT_AutoFilter`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutoFilter {
    pub reference: String,
    pub filter_columns: Vec<FilterColumn>,
    pub sort_state: Option<SortState>,
}

impl XmlPart for AutoFilter {
    const TAG: &'static str = "autoFilter";

    fn to_element(&self) -> XmlElement {
        let mut el = XmlElement::new(Self::TAG).with_attr("ref", &self.reference);
        for column in &self.filter_columns {
            el = el.with_child(column.to_element());
        }
        el.opt_child(self.sort_state.as_ref().map(XmlPart::to_element))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            reference: required(element.attr("ref").map(str::to_string), Self::TAG, "ref")?,
            filter_columns: element
                .children_named("filterColumn")
                .map(FilterColumn::from_element)
                .collect::<OoxmlResult<Vec<_>>>()?,
            sort_state: element
                .child("sortState")
                .map(SortState::from_element)
                .transpose()?,
        })
    }
}

/// `CT_TableStyleInfo`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableStyleInfo {
    pub name: Option<String>,
    pub show_first_column: Option<bool>,
    pub show_last_column: Option<bool>,
    pub show_row_stripes: Option<bool>,
    pub show_column_stripes: Option<bool>,
}

impl XmlPart for TableStyleInfo {
    const TAG: &'static str = "tableStyleInfo";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .opt_attr("name", self.name.as_deref())
            .opt_bool("showFirstColumn", self.show_first_column)
            .opt_bool("showLastColumn", self.show_last_column)
            .opt_bool("showRowStripes", self.show_row_stripes)
            .opt_bool("showColumnStripes", self.show_column_stripes)
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            name: element.attr("name").map(str::to_string),
            show_first_column: element.bool_attr("showFirstColumn"),
            show_last_column: element.bool_attr("showLastColumn"),
            show_row_stripes: element.bool_attr("showRowStripes"),
            show_column_stripes: element.bool_attr("showColumnStripes"),
        })
    }
}

/// `CT_TableColumn`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableColumn {
    pub id: u32,
    pub unique_name: Option<String>,
    pub name: String,
    pub totals_row_function: Option<TotalsRowFunctionValues>,
    pub totals_row_label: Option<String>,
    pub query_table_field_id: Option<u32>,
    pub header_row_dxf_id: Option<u32>,
    pub data_dxf_id: Option<u32>,
    pub totals_row_dxf_id: Option<u32>,
    pub header_row_cell_style: Option<String>,
    pub data_cell_style: Option<String>,
    pub totals_row_cell_style: Option<String>,
    pub calculated_column_formula: Option<String>,
    pub totals_row_formula: Option<String>,
}

impl XmlPart for TableColumn {
    const TAG: &'static str = "tableColumn";

    fn to_element(&self) -> XmlElement {
        XmlElement::new(Self::TAG)
            .with_attr("id", self.id)
            .opt_attr("uniqueName", self.unique_name.as_deref())
            .with_attr("name", &self.name)
            .opt_attr("totalsRowFunction", self.totals_row_function)
            .opt_attr("totalsRowLabel", self.totals_row_label.as_deref())
            .opt_attr("queryTableFieldId", self.query_table_field_id)
            .opt_attr("headerRowDxfId", self.header_row_dxf_id)
            .opt_attr("dataDxfId", self.data_dxf_id)
            .opt_attr("totalsRowDxfId", self.totals_row_dxf_id)
            .opt_attr("headerRowCellStyle", self.header_row_cell_style.as_deref())
            .opt_attr("dataCellStyle", self.data_cell_style.as_deref())
            .opt_attr("totalsRowCellStyle", self.totals_row_cell_style.as_deref())
            .opt_child(
                self.calculated_column_formula
                    .as_ref()
                    .map(|f| XmlElement::new("calculatedColumnFormula").with_text(f.as_str())),
            )
            .opt_child(
                self.totals_row_formula
                    .as_ref()
                    .map(|f| XmlElement::new("totalsRowFormula").with_text(f.as_str())),
            )
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        Ok(Self {
            id: required(element.parse_attr("id"), Self::TAG, "id")?,
            unique_name: element.attr("uniqueName").map(str::to_string),
            name: required(element.attr("name").map(str::to_string), Self::TAG, "name")?,
            totals_row_function: element.parse_attr("totalsRowFunction"),
            totals_row_label: element.attr("totalsRowLabel").map(str::to_string),
            query_table_field_id: element.parse_attr("queryTableFieldId"),
            header_row_dxf_id: element.parse_attr("headerRowDxfId"),
            data_dxf_id: element.parse_attr("dataDxfId"),
            totals_row_dxf_id: element.parse_attr("totalsRowDxfId"),
            header_row_cell_style: element.attr("headerRowCellStyle").map(str::to_string),
            data_cell_style: element.attr("dataCellStyle").map(str::to_string),
            totals_row_cell_style: element.attr("totalsRowCellStyle").map(str::to_string),
            calculated_column_formula: element
                .child_text("calculatedColumnFormula")
                .map(str::to_string),
            totals_row_formula: element.child_text("totalsRowFormula").map(str::to_string),
        })
    }
}

/// `CT_Table`: root of a table part
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub id: u32,
    pub name: Option<String>,
    pub display_name: String,
    pub comment: Option<String>,
    pub reference: String,
    pub table_type: Option<TableValues>,
    pub header_row_count: Option<u32>,
    pub insert_row: Option<bool>,
    pub insert_row_shift: Option<bool>,
    pub totals_row_count: Option<u32>,
    pub totals_row_shown: Option<bool>,
    pub published: Option<bool>,
    pub header_row_dxf_id: Option<u32>,
    pub data_dxf_id: Option<u32>,
    pub totals_row_dxf_id: Option<u32>,
    pub header_row_border_dxf_id: Option<u32>,
    pub table_border_dxf_id: Option<u32>,
    pub totals_row_border_dxf_id: Option<u32>,
    pub connection_id: Option<u32>,
    pub auto_filter: Option<AutoFilter>,
    pub sort_state: Option<SortState>,
    pub columns: Vec<TableColumn>,
    pub style_info: Option<TableStyleInfo>,
}

impl XmlPart for Table {
    const TAG: &'static str = "table";

    fn to_element(&self) -> XmlElement {
        let mut columns =
            XmlElement::new("tableColumns").with_attr("count", self.columns.len());
        for column in &self.columns {
            columns = columns.with_child(column.to_element());
        }

        XmlElement::new(Self::TAG)
            .with_attr("xmlns", SPREADSHEETML_NS)
            .with_attr("id", self.id)
            .opt_attr("name", self.name.as_deref())
            .with_attr("displayName", &self.display_name)
            .opt_attr("comment", self.comment.as_deref())
            .with_attr("ref", &self.reference)
            .opt_attr("tableType", self.table_type)
            .opt_attr("headerRowCount", self.header_row_count)
            .opt_bool("insertRow", self.insert_row)
            .opt_bool("insertRowShift", self.insert_row_shift)
            .opt_attr("totalsRowCount", self.totals_row_count)
            .opt_bool("totalsRowShown", self.totals_row_shown)
            .opt_bool("published", self.published)
            .opt_attr("headerRowDxfId", self.header_row_dxf_id)
            .opt_attr("dataDxfId", self.data_dxf_id)
            .opt_attr("totalsRowDxfId", self.totals_row_dxf_id)
            .opt_attr("headerRowBorderDxfId", self.header_row_border_dxf_id)
            .opt_attr("tableBorderDxfId", self.table_border_dxf_id)
            .opt_attr("totalsRowBorderDxfId", self.totals_row_border_dxf_id)
            .opt_attr("connectionId", self.connection_id)
            .opt_child(self.auto_filter.as_ref().map(XmlPart::to_element))
            .opt_child(self.sort_state.as_ref().map(XmlPart::to_element))
            .with_child(columns)
            .opt_child(self.style_info.as_ref().map(XmlPart::to_element))
    }

    fn from_element(element: &XmlElement) -> OoxmlResult<Self> {
        element.expect_name(Self::TAG)?;
        let columns = match element.child("tableColumns") {
            Some(cols) => cols
                .children_named("tableColumn")
                .map(TableColumn::from_element)
                .collect::<OoxmlResult<Vec<_>>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            id: required(element.parse_attr("id"), Self::TAG, "id")?,
            name: element.attr("name").map(str::to_string),
            display_name: required(
                element.attr("displayName").map(str::to_string),
                Self::TAG,
                "displayName",
            )?,
            comment: element.attr("comment").map(str::to_string),
            reference: required(element.attr("ref").map(str::to_string), Self::TAG, "ref")?,
            table_type: element.parse_attr("tableType"),
            header_row_count: element.parse_attr("headerRowCount"),
            insert_row: element.bool_attr("insertRow"),
            insert_row_shift: element.bool_attr("insertRowShift"),
            totals_row_count: element.parse_attr("totalsRowCount"),
            totals_row_shown: element.bool_attr("totalsRowShown"),
            published: element.bool_attr("published"),
            header_row_dxf_id: element.parse_attr("headerRowDxfId"),
            data_dxf_id: element.parse_attr("dataDxfId"),
            totals_row_dxf_id: element.parse_attr("totalsRowDxfId"),
            header_row_border_dxf_id: element.parse_attr("headerRowBorderDxfId"),
            table_border_dxf_id: element.parse_attr("tableBorderDxfId"),
            totals_row_border_dxf_id: element.parse_attr("totalsRowBorderDxfId"),
            connection_id: element.parse_attr("connectionId"),
            auto_filter: element
                .child("autoFilter")
                .map(AutoFilter::from_element)
                .transpose()?,
            sort_state: element
                .child("sortState")
                .map(SortState::from_element)
                .transpose()?,
            columns,
            style_info: element
                .child("tableStyleInfo")
                .map(TableStyleInfo::from_element)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE_XML: &str = concat!(
        r#"<table xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
        r#"id="1" name="Table1" displayName="Table1" ref="A1:C5" totalsRowCount="1">"#,
        r#"<autoFilter ref="A1:C4"><filterColumn colId="1"><filters blank="1">"#,
        r#"<filter val="East"/><filter val="West"/></filters></filterColumn></autoFilter>"#,
        r#"<tableColumns count="3"><tableColumn id="1" name="Region" totalsRowLabel="Total"/>"#,
        r#"<tableColumn id="2" name="Sales" totalsRowFunction="sum"/>"#,
        r#"<tableColumn id="3" name="Tax"><calculatedColumnFormula>Table1[[#This Row],[Sales]]*0.1</calculatedColumnFormula></tableColumn>"#,
        r#"</tableColumns><tableStyleInfo name="TableStyleMedium9" showFirstColumn="0" "#,
        r#"showLastColumn="0" showRowStripes="1" showColumnStripes="0"/></table>"#
    );

    #[test]
    fn test_read_table() {
        let table = Table::from_xml(TABLE_XML).unwrap();
        assert_eq!(table.id, 1);
        assert_eq!(table.reference, "A1:C5");
        assert_eq!(table.totals_row_count, Some(1));
        assert_eq!(table.columns.len(), 3);
        assert_eq!(
            table.columns[1].totals_row_function,
            Some(TotalsRowFunctionValues::Sum)
        );
        assert_eq!(
            table.columns[2].calculated_column_formula.as_deref(),
            Some("Table1[[#This Row],[Sales]]*0.1")
        );
        let filter = &table.auto_filter.as_ref().unwrap().filter_columns[0];
        assert_eq!(
            filter.filter,
            Some(ColumnFilter::Filters {
                blank: Some(true),
                values: vec!["East".into(), "West".into()],
            })
        );
        assert_eq!(
            table.style_info.unwrap().name.as_deref(),
            Some("TableStyleMedium9")
        );
    }

    #[test]
    fn test_write_then_read_table() {
        let table = Table::from_xml(TABLE_XML).unwrap();
        let again = Table::from_xml(&table.to_xml().unwrap()).unwrap();
        assert_eq!(again, table);
    }

    #[test]
    fn test_table_requires_ref() {
        let err = Table::from_xml(r#"<table id="1" displayName="T"/>"#).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::MissingAttribute {
                attribute: "ref",
                ..
            }
        ));
    }

    #[test]
    fn test_custom_filters_and_sort_state() {
        let af = AutoFilter {
            reference: "A1:B10".into(),
            filter_columns: vec![FilterColumn {
                column_id: 0,
                filter: Some(ColumnFilter::CustomFilters {
                    and: Some(true),
                    filters: vec![
                        CustomFilter {
                            operator: Some(FilterOperatorValues::GreaterThan),
                            value: "5".into(),
                        },
                        CustomFilter {
                            operator: Some(FilterOperatorValues::LessThanOrEqual),
                            value: "10".into(),
                        },
                    ],
                }),
                ..Default::default()
            }],
            sort_state: Some(SortState {
                reference: "A2:B10".into(),
                conditions: vec![SortCondition {
                    descending: Some(true),
                    reference: "B2:B10".into(),
                }],
                ..Default::default()
            }),
        };
        let parsed = AutoFilter::from_xml(&af.to_xml().unwrap()).unwrap();
        assert_eq!(parsed, af);
    }
}
