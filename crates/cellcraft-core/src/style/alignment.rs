//! Alignment and protection mirrors

use cellcraft_ooxml::{Alignment, HorizontalAlignmentValues, Protection, VerticalAlignmentValues};

use super::overlay;
use super::palette::Palette;
use super::pool::StyleKeyed;

/// `textRotation` value for vertically stacked text
pub const STACKED_TEXT_ROTATION: u32 = 255;

/// Text rotation as a user thinks of it
///
/// Positive degrees rotate counterclockwise, negative clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextRotation {
    /// -90 to 90
    Degrees(i16),
    /// Letters stacked top to bottom
    Stacked,
}

/// Decode a `textRotation` attribute
///
/// 0-90 are counterclockwise degrees, 91-180 encode clockwise rotation as
/// `90 - value`, 255 is stacked text. Other values are clamped into 0-180.
pub fn text_rotation_to_intuitive(value: u32) -> TextRotation {
    if value == STACKED_TEXT_ROTATION {
        return TextRotation::Stacked;
    }
    let value = if value > 180 {
        log::trace!("text rotation {} clamped to 180", value);
        180
    } else {
        value
    };
    if value <= 90 {
        TextRotation::Degrees(value as i16)
    } else {
        TextRotation::Degrees(90 - value as i16)
    }
}

/// Encode a rotation as a `textRotation` attribute; degrees are clamped into -90..=90
pub fn text_rotation_to_ooxml(rotation: TextRotation) -> u32 {
    match rotation {
        TextRotation::Stacked => STACKED_TEXT_ROTATION,
        TextRotation::Degrees(d) => {
            let clamped = d.clamp(-90, 90);
            if clamped != d {
                log::trace!("text rotation {} clamped to {}", d, clamped);
            }
            if clamped >= 0 {
                clamped as u32
            } else {
                (90 - clamped) as u32
            }
        }
    }
}

/// Reading order of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingOrder {
    ContextDependent = 0,
    LeftToRight = 1,
    RightToLeft = 2,
}

impl ReadingOrder {
    fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(ReadingOrder::ContextDependent),
            1 => Some(ReadingOrder::LeftToRight),
            2 => Some(ReadingOrder::RightToLeft),
            other => {
                log::debug!("ignoring unknown reading order {}", other);
                None
            }
        }
    }
}

/// Cell alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SlAlignment {
    pub horizontal: Option<HorizontalAlignmentValues>,
    pub vertical: Option<VerticalAlignmentValues>,
    pub text_rotation: Option<TextRotation>,
    pub wrap_text: Option<bool>,
    pub indent: Option<u32>,
    pub relative_indent: Option<i32>,
    pub justify_last_line: Option<bool>,
    pub shrink_to_fit: Option<bool>,
    pub reading_order: Option<ReadingOrder>,
}

impl SlAlignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay every property `other` has set
    pub fn merge(&mut self, other: &SlAlignment) {
        overlay(&mut self.horizontal, other.horizontal);
        overlay(&mut self.vertical, other.vertical);
        overlay(&mut self.text_rotation, other.text_rotation);
        overlay(&mut self.wrap_text, other.wrap_text);
        overlay(&mut self.indent, other.indent);
        overlay(&mut self.relative_indent, other.relative_indent);
        overlay(&mut self.justify_last_line, other.justify_last_line);
        overlay(&mut self.shrink_to_fit, other.shrink_to_fit);
        overlay(&mut self.reading_order, other.reading_order);
    }

    pub fn from_element(element: &Alignment) -> Self {
        Self {
            horizontal: element.horizontal,
            vertical: element.vertical,
            text_rotation: element.text_rotation.map(text_rotation_to_intuitive),
            wrap_text: element.wrap_text,
            indent: element.indent,
            relative_indent: element.relative_indent,
            justify_last_line: element.justify_last_line,
            shrink_to_fit: element.shrink_to_fit,
            reading_order: element.reading_order.and_then(ReadingOrder::from_value),
        }
    }

    pub fn to_element(&self) -> Alignment {
        Alignment {
            horizontal: self.horizontal,
            vertical: self.vertical,
            text_rotation: self.text_rotation.map(text_rotation_to_ooxml),
            wrap_text: self.wrap_text,
            indent: self.indent,
            relative_indent: self.relative_indent,
            justify_last_line: self.justify_last_line,
            shrink_to_fit: self.shrink_to_fit,
            reading_order: self.reading_order.map(|r| r as u32),
        }
    }
}

impl StyleKeyed for SlAlignment {
    type Key = Alignment;

    fn to_key(&self) -> Alignment {
        self.to_element()
    }

    fn from_key(key: &Alignment, _palette: &Palette) -> Self {
        Self::from_element(key)
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlProtection {
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
}

impl SlProtection {
    pub fn is_empty(&self) -> bool {
        self.locked.is_none() && self.hidden.is_none()
    }

    pub fn merge(&mut self, other: &SlProtection) {
        overlay(&mut self.locked, other.locked);
        overlay(&mut self.hidden, other.hidden);
    }

    pub fn from_element(element: &Protection) -> Self {
        Self {
            locked: element.locked,
            hidden: element.hidden,
        }
    }

    pub fn to_element(&self) -> Protection {
        Protection {
            locked: self.locked,
            hidden: self.hidden,
        }
    }
}

impl StyleKeyed for SlProtection {
    type Key = Protection;

    fn to_key(&self) -> Protection {
        self.to_element()
    }

    fn from_key(key: &Protection, _palette: &Palette) -> Self {
        Self::from_element(key)
    }
}
