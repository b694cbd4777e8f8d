//! # cellcraft-core
//!
//! Authoring types for spreadsheet formatting.
//!
//! Each type here mirrors one SpreadsheetML element from `cellcraft-ooxml`
//! with a friendlier surface: defaults, theme-aware colors, named presets.
//! A mirror is built blank, filled through setters or `from_element`, and
//! consumed through `to_element` or a dedup key:
//! - [`SlColor`], [`SlFont`], [`SlFill`], [`SlBorder`], [`SlAlignment`] - cell format parts
//! - [`SlStyle`] - a whole cell format, with [`NamedCellStyle`] presets
//! - [`StyleTables`] - the shared lookup tables a workbook keeps its formats in
//! - [`SlTable`] - worksheet tables with totals rows, filters and sorting
//! - [`SlSparklineGroup`] - x14 sparklines
//!
//! ## Example
//!
//! ```rust
//! use cellcraft_core::{NamedCellStyle, Palette, SlStyle, StyleTables};
//!
//! let palette = Palette::default();
//! let mut style = SlStyle::new(&palette);
//! style.apply_named_cell_style(NamedCellStyle::Bad);
//! style.set_bold(true);
//!
//! let mut tables = StyleTables::new(&palette);
//! let id = tables.register_style(&style);
//! assert_eq!(id, 1);
//! assert_eq!(tables.register_style(&style), id);
//! ```

pub mod error;
pub mod reference;
pub mod sparkline;
pub mod style;
pub mod table;

pub use error::{Error, Result};
pub use reference::{CellRange, CellRef, MAX_COLS, MAX_ROWS};
pub use sparkline::{
    clamp_line_weight, SlSparkline, SlSparklineGroup, SparklineStyle, MAX_LINE_WEIGHT,
};
pub use style::{
    apply_tint, clamp_tint, text_rotation_to_intuitive, text_rotation_to_ooxml, Argb, BorderSide,
    ColorSource, FillMode, GradientShading, KeyTable, NamedCellStyle, Palette, SlAlignment,
    SlBorder, SlBorderProperties, SlColor, SlDifferentialFormat, SlFill, SlFont, SlGradientFill,
    SlNumberingFormat, SlPatternFill, SlProtection, SlStyle, StyleKeyed, StyleTables, TextRotation,
    ThemeColorIndex,
};
pub use table::{SlAutoFilter, SlFilterColumn, SlSortState, SlTable, SlTableColumn, TableStyle};

/// The element layer, re-exported for callers that build elements directly
pub use cellcraft_ooxml as ooxml;
