//! # cellcraft-ooxml
//!
//! Typed SpreadsheetML elements for cellcraft: fonts, fills, borders, cell
//! formats, tables and x14 sparklines, each readable from and writable to an
//! XML fragment.
//!
//! This crate deals in single elements only. It does not assemble packages
//! or resolve relationships between parts.

pub mod error;

mod border;
mod color;
mod fill;
mod font;
mod format;
mod node;
mod sparkline;
mod table;
mod values;

pub use border::{Border, BorderEdge};
pub use color::Color;
pub use error::{OoxmlError, OoxmlResult};
pub use fill::{Fill, GradientFill, GradientStop, PatternFill};
pub use font::Font;
pub use format::{Alignment, CellFormat, DifferentialFormat, NumberingFormat, Protection};
pub use node::{XmlElement, XmlPart};
pub use sparkline::{
    Sparkline, SparklineGroup, SparklineGroups, DEFAULT_LINE_WEIGHT, X14_NS, XM_NS,
};
pub use table::{
    AutoFilter, ColumnFilter, CustomFilter, FilterColumn, SortCondition, SortState, Table,
    TableColumn, TableStyleInfo, SPREADSHEETML_NS,
};
pub use values::{
    BorderStyleValues, DisplayBlanksAsValues, FilterOperatorValues, FontSchemeValues,
    GradientValues, HorizontalAlignmentValues, PatternValues, SortMethodValues,
    SparklineAxisMinMaxValues, SparklineTypeValues, TableValues, TotalsRowFunctionValues,
    UnderlineValues, VerticalAlignmentRunValues, VerticalAlignmentValues,
};
