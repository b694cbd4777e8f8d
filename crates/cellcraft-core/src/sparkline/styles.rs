//! Built-in sparkline styles

use crate::style::{PresetColor, ThemeColorIndex};

/// The 36 styles of the sparkline style gallery
///
/// Styles run in rows of six, one per accent color. The first five rows
/// use theme colors; the last row uses fixed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparklineStyle {
    Style1,
    Style2,
    Style3,
    Style4,
    Style5,
    Style6,
    Style7,
    Style8,
    Style9,
    Style10,
    Style11,
    Style12,
    Style13,
    Style14,
    Style15,
    Style16,
    Style17,
    Style18,
    Style19,
    Style20,
    Style21,
    Style22,
    Style23,
    Style24,
    Style25,
    Style26,
    Style27,
    Style28,
    Style29,
    Style30,
    Style31,
    Style32,
    Style33,
    Style34,
    Style35,
    Style36,
}

/// Colors a sparkline style assigns
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SparklineStylePreset {
    pub series: PresetColor,
    pub negative: PresetColor,
    pub axis: PresetColor,
    pub markers: PresetColor,
    pub first: PresetColor,
    pub last: PresetColor,
    pub high: PresetColor,
    pub low: PresetColor,
}

const DARKER_50: f64 = -0.499984740745262;
const DARKER_25: f64 = -0.249977111117893;
const LIGHTER_40: f64 = 0.399975585192419;
const LIGHTER_60: f64 = 0.599993896298105;

const ACCENTS: [ThemeColorIndex; 6] = [
    ThemeColorIndex::Accent1,
    ThemeColorIndex::Accent2,
    ThemeColorIndex::Accent3,
    ThemeColorIndex::Accent4,
    ThemeColorIndex::Accent5,
    ThemeColorIndex::Accent6,
];

/// Tints of one theme row: series, markers, first/last, high/low
struct ThemeRow {
    series: f64,
    markers: f64,
    first_last: f64,
    high_low: f64,
    /// Negative points use the next accent at this tint
    negative: f64,
}

/// Gallery rows 1-5, one entry per row rather than one per style
///
/// Row 1 and the fixed row match the gallery definitions color for color.
/// Rows 2-5 apply one tint pattern to every accent, following the gallery's
/// dark-to-light series progression. They are not taken from a per-style
/// listing, so individual tints may differ from a host's own presets.
const THEME_ROWS: [ThemeRow; 5] = [
    ThemeRow {
        series: DARKER_50,
        markers: DARKER_50,
        first_last: LIGHTER_40,
        high_low: 0.0,
        negative: 0.0,
    },
    ThemeRow {
        series: DARKER_25,
        markers: DARKER_25,
        first_last: LIGHTER_40,
        high_low: DARKER_50,
        negative: DARKER_25,
    },
    ThemeRow {
        series: 0.0,
        markers: DARKER_50,
        first_last: DARKER_25,
        high_low: DARKER_50,
        negative: DARKER_50,
    },
    ThemeRow {
        series: LIGHTER_40,
        markers: DARKER_25,
        first_last: DARKER_25,
        high_low: DARKER_50,
        negative: 0.0,
    },
    ThemeRow {
        series: LIGHTER_60,
        markers: DARKER_25,
        first_last: 0.0,
        high_low: DARKER_25,
        negative: DARKER_25,
    },
];

/// Series, negative and marker colors of the fixed-color row
const FIXED_ROW: [(u32, u32, u32); 6] = [
    (0x323232, 0xD00000, 0xD00000),
    (0x000000, 0x0070C0, 0x0070C0),
    (0x376092, 0xD00000, 0xD00000),
    (0x0070C0, 0x000000, 0x000000),
    (0x5F5F5F, 0xFFB620, 0xFFB620),
    (0x5687C2, 0xFFB620, 0xFFB620),
];

const AXIS: PresetColor = PresetColor::Rgb(0x000000);

impl SparklineStyle {
    pub const ALL: [SparklineStyle; 36] = [
        SparklineStyle::Style1,
        SparklineStyle::Style2,
        SparklineStyle::Style3,
        SparklineStyle::Style4,
        SparklineStyle::Style5,
        SparklineStyle::Style6,
        SparklineStyle::Style7,
        SparklineStyle::Style8,
        SparklineStyle::Style9,
        SparklineStyle::Style10,
        SparklineStyle::Style11,
        SparklineStyle::Style12,
        SparklineStyle::Style13,
        SparklineStyle::Style14,
        SparklineStyle::Style15,
        SparklineStyle::Style16,
        SparklineStyle::Style17,
        SparklineStyle::Style18,
        SparklineStyle::Style19,
        SparklineStyle::Style20,
        SparklineStyle::Style21,
        SparklineStyle::Style22,
        SparklineStyle::Style23,
        SparklineStyle::Style24,
        SparklineStyle::Style25,
        SparklineStyle::Style26,
        SparklineStyle::Style27,
        SparklineStyle::Style28,
        SparklineStyle::Style29,
        SparklineStyle::Style30,
        SparklineStyle::Style31,
        SparklineStyle::Style32,
        SparklineStyle::Style33,
        SparklineStyle::Style34,
        SparklineStyle::Style35,
        SparklineStyle::Style36,
    ];

    /// Gallery number, 1-36
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    pub(crate) fn preset(self) -> SparklineStylePreset {
        let offset = self as usize;
        let (row, column) = (offset / 6, offset % 6);

        match THEME_ROWS.get(row) {
            Some(tints) => {
                let accent = ACCENTS[column];
                let next = ACCENTS[(column + 1) % 6];
                let theme = |tint| PresetColor::Theme(accent, tint);
                SparklineStylePreset {
                    series: theme(tints.series),
                    negative: PresetColor::Theme(next, tints.negative),
                    axis: AXIS,
                    markers: theme(tints.markers),
                    first: theme(tints.first_last),
                    last: theme(tints.first_last),
                    high: theme(tints.high_low),
                    low: theme(tints.high_low),
                }
            }
            None => {
                let (series, negative, markers) = FIXED_ROW[column];
                let markers = PresetColor::Rgb(markers);
                SparklineStylePreset {
                    series: PresetColor::Rgb(series),
                    negative: PresetColor::Rgb(negative),
                    axis: AXIS,
                    markers,
                    first: markers,
                    last: markers,
                    high: markers,
                    low: markers,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(SparklineStyle::Style1.number(), 1);
        assert_eq!(SparklineStyle::Style36.number(), 36);
        assert_eq!(SparklineStyle::from_number(7), Some(SparklineStyle::Style7));
        assert_eq!(SparklineStyle::from_number(0), None);
        assert_eq!(SparklineStyle::from_number(37), None);
    }

    #[test]
    fn test_first_row_uses_accents() {
        let preset = SparklineStyle::Style2.preset();
        assert_eq!(
            preset.series,
            PresetColor::Theme(ThemeColorIndex::Accent2, DARKER_50)
        );
        assert_eq!(
            preset.negative,
            PresetColor::Theme(ThemeColorIndex::Accent3, 0.0)
        );

        let wrap = SparklineStyle::Style6.preset();
        assert_eq!(wrap.negative, PresetColor::Theme(ThemeColorIndex::Accent1, 0.0));
    }

    fn theme(index: ThemeColorIndex, tint: f64) -> PresetColor {
        PresetColor::Theme(index, tint)
    }

    #[test]
    fn test_second_row() {
        use ThemeColorIndex::*;
        let preset = SparklineStyle::Style9.preset();
        assert_eq!(preset.series, theme(Accent3, DARKER_25));
        assert_eq!(preset.negative, theme(Accent4, DARKER_25));
        assert_eq!(preset.markers, theme(Accent3, DARKER_25));
        assert_eq!(preset.first, theme(Accent3, LIGHTER_40));
        assert_eq!(preset.high, theme(Accent3, DARKER_50));
    }

    #[test]
    fn test_third_row() {
        use ThemeColorIndex::*;
        let preset = SparklineStyle::Style13.preset();
        assert_eq!(preset.series, theme(Accent1, 0.0));
        assert_eq!(preset.negative, theme(Accent2, DARKER_50));
        assert_eq!(preset.markers, theme(Accent1, DARKER_50));
        assert_eq!(preset.last, theme(Accent1, DARKER_25));
        assert_eq!(preset.low, theme(Accent1, DARKER_50));
    }

    #[test]
    fn test_fourth_row() {
        use ThemeColorIndex::*;
        let preset = SparklineStyle::Style24.preset();
        assert_eq!(preset.series, theme(Accent6, LIGHTER_40));
        assert_eq!(preset.negative, theme(Accent1, 0.0));
        assert_eq!(preset.markers, theme(Accent6, DARKER_25));
        assert_eq!(preset.last, theme(Accent6, DARKER_25));
        assert_eq!(preset.low, theme(Accent6, DARKER_50));
    }

    #[test]
    fn test_fifth_row() {
        use ThemeColorIndex::*;
        let preset = SparklineStyle::Style28.preset();
        assert_eq!(preset.series, theme(Accent4, LIGHTER_60));
        assert_eq!(preset.negative, theme(Accent5, DARKER_25));
        assert_eq!(preset.markers, theme(Accent4, DARKER_25));
        assert_eq!(preset.first, theme(Accent4, 0.0));
        assert_eq!(preset.high, theme(Accent4, DARKER_25));
    }

    #[test]
    fn test_fixed_row() {
        let preset = SparklineStyle::Style33.preset();
        assert_eq!(preset.series, PresetColor::Rgb(0x376092));
        assert_eq!(preset.high, PresetColor::Rgb(0xD00000));
        assert!(SparklineStyle::ALL
            .iter()
            .all(|s| s.preset().axis == PresetColor::Rgb(0)));
    }
}
