//! # cellcraft
//!
//! Spreadsheet formatting, authored in Rust and written as SpreadsheetML.
//!
//! cellcraft builds the pieces of a workbook's look: theme-aware colors,
//! fonts, fills, borders, whole cell styles with the built-in named presets,
//! worksheet tables and sparkline groups. Each piece reads from and writes
//! to the element it stands for, and reduces to a typed key so identical
//! formats are stored once.
//!
//! ## Features
//!
//! - Theme and indexed colors resolved against a palette snapshot, with tints
//! - Fonts, pattern and gradient fills (with the gradient shading presets), borders
//! - The named cell styles of the style gallery (Good, Bad, Heading 1, Accent1 ...)
//! - Deduplicated style tables with stable ids
//! - Tables with totals rows, auto filters and sorting
//! - Sparkline groups with the 36 gallery styles
//!
//! ## Example
//!
//! ```rust
//! use cellcraft::prelude::*;
//!
//! let palette = Palette::default();
//!
//! // A heading style, registered once
//! let mut style = SlStyle::new(&palette);
//! style.apply_named_cell_style(NamedCellStyle::Heading1);
//! let mut tables = StyleTables::new(&palette);
//! let xf = tables.register_style(&style);
//! assert_eq!(tables.register_style(&style), xf);
//!
//! // Sparklines for three rows of data, drawn in column F
//! let mut group = SlSparklineGroup::new("Sheet1", 2, 1, 4, 5);
//! group.set_location(2, 6, 4, 6, true);
//! group.set_sparkline_style(SparklineStyle::Style3);
//! assert_eq!(group.sparklines.len(), 3);
//!
//! // Any mirror can be written as XML
//! let xml = style.font.to_xml().unwrap();
//! assert!(xml.starts_with("<font>"));
//! ```

pub mod prelude;
pub mod xml;

pub use xml::MirrorXmlExt;

pub use cellcraft_core::{
    // Errors
    Error,
    Result,

    // References
    CellRange,
    CellRef,
    MAX_COLS,
    MAX_ROWS,

    // Colors and palettes
    apply_tint,
    clamp_tint,
    Argb,
    ColorSource,
    Palette,
    SlColor,
    ThemeColorIndex,

    // Style parts
    BorderSide,
    FillMode,
    GradientShading,
    SlAlignment,
    SlBorder,
    SlBorderProperties,
    SlDifferentialFormat,
    SlFill,
    SlFont,
    SlGradientFill,
    SlNumberingFormat,
    SlPatternFill,
    SlProtection,
    text_rotation_to_intuitive,
    text_rotation_to_ooxml,
    TextRotation,

    // Styles and dedup
    KeyTable,
    NamedCellStyle,
    SlStyle,
    StyleKeyed,
    StyleTables,

    // Tables
    SlAutoFilter,
    SlFilterColumn,
    SlSortState,
    SlTable,
    SlTableColumn,
    TableStyle,

    // Sparklines
    clamp_line_weight,
    SlSparkline,
    SlSparklineGroup,
    SparklineStyle,
    MAX_LINE_WEIGHT,
};

/// Element types and schema values
pub use cellcraft_ooxml as ooxml;
