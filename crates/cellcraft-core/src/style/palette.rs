//! Concrete colors, theme and indexed palettes, and tint resolution

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// A concrete ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const BLACK: Argb = Argb::rgb(0, 0, 0);
    pub const WHITE: Argb = Argb::rgb(255, 255, 255);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from `0xRRGGBB`
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `RRGGBB` or `AARRGGBB`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Eight-digit uppercase hex, as written in `rgb` attributes
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Theme color roles in SpreadsheetML `theme` attribute order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeColorIndex {
    Light1 = 0,
    Dark1 = 1,
    Light2 = 2,
    Dark2 = 3,
    Accent1 = 4,
    Accent2 = 5,
    Accent3 = 6,
    Accent4 = 7,
    Accent5 = 8,
    Accent6 = 9,
    Hyperlink = 10,
    FollowedHyperlink = 11,
}

impl ThemeColorIndex {
    pub const ALL: [ThemeColorIndex; 12] = [
        ThemeColorIndex::Light1,
        ThemeColorIndex::Dark1,
        ThemeColorIndex::Light2,
        ThemeColorIndex::Dark2,
        ThemeColorIndex::Accent1,
        ThemeColorIndex::Accent2,
        ThemeColorIndex::Accent3,
        ThemeColorIndex::Accent4,
        ThemeColorIndex::Accent5,
        ThemeColorIndex::Accent6,
        ThemeColorIndex::Hyperlink,
        ThemeColorIndex::FollowedHyperlink,
    ];

    /// Value of the `theme` attribute
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Accent 1-6 by number
    pub fn accent(n: u8) -> Option<Self> {
        match n {
            1..=6 => Self::from_index(3 + n as u32),
            _ => None,
        }
    }
}

/// Office 2007-2010 default theme, in `ThemeColorIndex` order
const DEFAULT_THEME: [u32; 12] = [
    0xFFFFFF, 0x000000, 0xEEECE1, 0x1F497D, 0x4F81BD, 0xC0504D, 0x9BBB59, 0x8064A2, 0x4BACC6,
    0xF79646, 0x0000FF, 0x800080,
];

/// Legacy indexed color palette (indices 0-63)
const DEFAULT_INDEXED: [u32; 64] = [
    0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF, // 0-7
    0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF, // 8-15
    0x800000, 0x008000, 0x000080, 0x808000, 0x800080, 0x008080, 0xC0C0C0, 0x808080, // 16-23
    0x9999FF, 0x993366, 0xFFFFCC, 0xCCFFFF, 0x660066, 0xFF8080, 0x0066CC, 0xCCCCFF, // 24-31
    0x000080, 0xFF00FF, 0xFFFF00, 0x00FFFF, 0x800080, 0x800000, 0x008080, 0x0000FF, // 32-39
    0x00CCFF, 0xCCFFFF, 0xCCFFCC, 0xFFFF99, 0x99CCFF, 0xFF99CC, 0xCC99FF, 0xFFCC99, // 40-47
    0x3366FF, 0x33CCCC, 0x99CC00, 0xFFCC00, 0xFF9900, 0xFF6600, 0x666699, 0x969696, // 48-55
    0x003366, 0x339966, 0x003300, 0x333300, 0x993300, 0x993366, 0x333399, 0x333333, // 56-63
];

static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new(
        DEFAULT_THEME.iter().copied().map(Argb::from_u32).collect::<Vec<_>>(),
        DEFAULT_INDEXED.iter().copied().map(Argb::from_u32).collect::<Vec<_>>(),
    )
});

/// Theme and indexed color tables used to resolve indirect colors
///
/// A palette is immutable once built; mirrors keep the palette they were
/// built with, so building a different palette later never changes colors
/// that were already resolved. Cloning only bumps reference counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    theme: Arc<[Argb]>,
    indexed: Arc<[Argb]>,
}

impl Palette {
    pub fn new(theme: impl Into<Arc<[Argb]>>, indexed: impl Into<Arc<[Argb]>>) -> Self {
        Self {
            theme: theme.into(),
            indexed: indexed.into(),
        }
    }

    /// Custom theme colors with the default indexed palette
    pub fn with_theme(theme: impl Into<Arc<[Argb]>>) -> Self {
        Self {
            theme: theme.into(),
            indexed: DEFAULT_PALETTE.indexed.clone(),
        }
    }

    pub fn theme_colors(&self) -> &[Argb] {
        &self.theme
    }

    pub fn indexed_colors(&self) -> &[Argb] {
        &self.indexed
    }

    /// Base theme color; out-of-range indices resolve to black
    pub fn theme_color(&self, index: u32) -> Argb {
        self.theme.get(index as usize).copied().unwrap_or_else(|| {
            log::debug!("theme color index {} out of range, using black", index);
            Argb::BLACK
        })
    }

    /// Base indexed color; out-of-range indices resolve to black
    pub fn indexed_color(&self, index: u32) -> Argb {
        self.indexed.get(index as usize).copied().unwrap_or_else(|| {
            log::debug!("indexed color {} out of range, using black", index);
            Argb::BLACK
        })
    }

    /// Theme color with an optional tint applied
    pub fn resolve_theme(&self, index: u32, tint: Option<f64>) -> Argb {
        let base = self.theme_color(index);
        tint.map_or(base, |t| apply_tint(base, t))
    }

    /// Indexed color with an optional tint applied
    pub fn resolve_indexed(&self, index: u32, tint: Option<f64>) -> Argb {
        let base = self.indexed_color(index);
        tint.map_or(base, |t| apply_tint(base, t))
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE.clone()
    }
}

/// Clamp a tint into [-1.0, 1.0]; NaN becomes 0
pub fn clamp_tint(tint: f64) -> f64 {
    if tint.is_nan() {
        return 0.0;
    }
    let clamped = tint.clamp(-1.0, 1.0);
    if clamped != tint {
        log::trace!("tint {} clamped to {}", tint, clamped);
    }
    clamped
}

/// Shift the HSL lightness of a color
///
/// Negative tints darken toward black (`L * (1 + tint)`), positive tints
/// lighten toward white (`L * (1 - tint) + tint`). Alpha is kept.
pub fn apply_tint(color: Argb, tint: f64) -> Argb {
    let tint = clamp_tint(tint);
    if tint == 0.0 {
        return color;
    }

    let (h, s, l) = rgb_to_hsl(color);
    let l = if tint < 0.0 {
        l * (1.0 + tint)
    } else {
        l * (1.0 - tint) + tint
    };
    let (r, g, b) = hsl_to_rgb(h, s, l.clamp(0.0, 1.0));
    Argb::new(color.a, r, g, b)
}

fn rgb_to_hsl(color: Argb) -> (f64, f64, f64) {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let channel = |v: f64| (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let v = channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    (
        channel(hue(h + 1.0 / 3.0)),
        channel(hue(h)),
        channel(hue(h - 1.0 / 3.0)),
    )
}
