//! Prelude module - common imports for cellcraft users
//!
//! ```rust
//! use cellcraft::prelude::*;
//! ```

pub use crate::{
    // Colors
    Argb,
    CellRange,
    // Errors
    Error,
    // Extension traits
    MirrorXmlExt,
    NamedCellStyle,
    Palette,
    Result,

    // Style parts
    SlBorder,
    SlColor,
    SlFill,
    SlFont,
    SlSparklineGroup,
    SlStyle,
    SlTable,
    SparklineStyle,
    StyleKeyed,
    StyleTables,
    TableStyle,
    ThemeColorIndex,
};

pub use cellcraft_ooxml::{
    BorderStyleValues, HorizontalAlignmentValues, PatternValues, TotalsRowFunctionValues,
    VerticalAlignmentValues, XmlPart,
};
