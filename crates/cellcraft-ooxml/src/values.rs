//! Enumerated attribute values of the SpreadsheetML schema

use std::hash::{Hash, Hasher};

use crate::error::OoxmlError;

macro_rules! string_values {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in schema order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Schema string for this value
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = OoxmlError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(OoxmlError::InvalidValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_values! {
    /// Border line styles (`ST_BorderStyle`)
    BorderStyleValues {
        None => "none",
        Thin => "thin",
        Medium => "medium",
        Dashed => "dashed",
        Dotted => "dotted",
        Thick => "thick",
        Double => "double",
        Hair => "hair",
        MediumDashed => "mediumDashed",
        DashDot => "dashDot",
        MediumDashDot => "mediumDashDot",
        DashDotDot => "dashDotDot",
        MediumDashDotDot => "mediumDashDotDot",
        SlantDashDot => "slantDashDot",
    }
}

string_values! {
    /// Pattern fill types (`ST_PatternType`)
    PatternValues {
        None => "none",
        Solid => "solid",
        MediumGray => "mediumGray",
        DarkGray => "darkGray",
        LightGray => "lightGray",
        DarkHorizontal => "darkHorizontal",
        DarkVertical => "darkVertical",
        DarkDown => "darkDown",
        DarkUp => "darkUp",
        DarkGrid => "darkGrid",
        DarkTrellis => "darkTrellis",
        LightHorizontal => "lightHorizontal",
        LightVertical => "lightVertical",
        LightDown => "lightDown",
        LightUp => "lightUp",
        LightGrid => "lightGrid",
        LightTrellis => "lightTrellis",
        Gray125 => "gray125",
        Gray0625 => "gray0625",
    }
}

string_values! {
    /// Gradient fill types (`ST_GradientType`)
    GradientValues {
        Linear => "linear",
        Path => "path",
    }
}

string_values! {
    /// Font underline styles (`ST_UnderlineValues`)
    UnderlineValues {
        Single => "single",
        Double => "double",
        SingleAccounting => "singleAccounting",
        DoubleAccounting => "doubleAccounting",
        None => "none",
    }
}

string_values! {
    /// Run-level vertical alignment (`ST_VerticalAlignRun`)
    VerticalAlignmentRunValues {
        Baseline => "baseline",
        Superscript => "superscript",
        Subscript => "subscript",
    }
}

string_values! {
    /// Font scheme (`ST_FontScheme`)
    FontSchemeValues {
        None => "none",
        Major => "major",
        Minor => "minor",
    }
}

string_values! {
    /// Horizontal cell alignment (`ST_HorizontalAlignment`)
    HorizontalAlignmentValues {
        General => "general",
        Left => "left",
        Center => "center",
        Right => "right",
        Fill => "fill",
        Justify => "justify",
        CenterContinuous => "centerContinuous",
        Distributed => "distributed",
    }
}

string_values! {
    /// Vertical cell alignment (`ST_VerticalAlignment`)
    VerticalAlignmentValues {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
        Justify => "justify",
        Distributed => "distributed",
    }
}

string_values! {
    /// Table totals row functions (`ST_TotalsRowFunction`)
    TotalsRowFunctionValues {
        None => "none",
        Sum => "sum",
        Minimum => "min",
        Maximum => "max",
        Average => "average",
        Count => "count",
        CountNumbers => "countNums",
        StandardDeviation => "stdDev",
        Variance => "var",
        Custom => "custom",
    }
}

string_values! {
    /// Table source types (`ST_TableType`)
    TableValues {
        Worksheet => "worksheet",
        Xml => "xml",
        QueryTable => "queryTable",
    }
}

string_values! {
    /// Custom filter comparison operators (`ST_FilterOperator`)
    FilterOperatorValues {
        Equal => "equal",
        LessThan => "lessThan",
        LessThanOrEqual => "lessThanOrEqual",
        NotEqual => "notEqual",
        GreaterThanOrEqual => "greaterThanOrEqual",
        GreaterThan => "greaterThan",
    }
}

string_values! {
    /// Sort methods (`ST_SortMethod`)
    SortMethodValues {
        Stroke => "stroke",
        PinYin => "pinYin",
        None => "none",
    }
}

string_values! {
    /// Sparkline chart types (`ST_SparklineType`)
    SparklineTypeValues {
        Line => "line",
        Column => "column",
        Stacked => "stacked",
    }
}

string_values! {
    /// How sparklines plot empty cells (`ST_DispBlanksAs`)
    DisplayBlanksAsValues {
        Span => "span",
        Gap => "gap",
        Zero => "zero",
    }
}

string_values! {
    /// Sparkline vertical axis scaling (`ST_SparklineAxisMinMax`)
    SparklineAxisMinMaxValues {
        Individual => "individual",
        Group => "group",
        Custom => "custom",
    }
}

/// Hash a float by bit pattern, folding `-0.0` into `0.0`
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

pub(crate) fn hash_opt_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    value.is_some().hash(state);
    if let Some(v) = value {
        hash_f64(v, state);
    }
}
