//! Border mirrors

use cellcraft_ooxml::{Border, BorderEdge, BorderStyleValues};

use super::color::SlColor;
use super::palette::{Argb, Palette, ThemeColorIndex};
use super::pool::StyleKeyed;

/// Style and color of one border edge
#[derive(Debug, Clone, PartialEq)]
pub struct SlBorderProperties {
    pub style: Option<BorderStyleValues>,
    /// Blank when unset
    pub color: SlColor,
}

impl SlBorderProperties {
    pub fn new(palette: &Palette) -> Self {
        Self {
            style: None,
            color: SlColor::new(palette),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_empty()
    }

    fn merge(&mut self, other: &SlBorderProperties) {
        if other.style.is_some() {
            self.style = other.style;
        }
        if !other.color.is_empty() {
            self.color = other.color.clone();
        }
    }

    pub fn from_element(element: &BorderEdge, palette: &Palette) -> Self {
        Self {
            style: element.style,
            color: match &element.color {
                Some(c) => SlColor::from_element(c, palette),
                None => SlColor::new(palette),
            },
        }
    }

    pub fn to_element(&self) -> BorderEdge {
        BorderEdge {
            style: self.style,
            color: (!self.color.is_empty()).then(|| self.color.to_element()),
        }
    }
}

impl StyleKeyed for SlBorderProperties {
    type Key = BorderEdge;

    fn to_key(&self) -> BorderEdge {
        self.to_element()
    }

    fn from_key(key: &BorderEdge, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}

/// The edges of a cell border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
    Diagonal,
    /// Inner vertical edges of a range (table styles and dxfs only)
    Vertical,
    /// Inner horizontal edges of a range (table styles and dxfs only)
    Horizontal,
}

impl BorderSide {
    pub const ALL: [BorderSide; 7] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
        BorderSide::Diagonal,
        BorderSide::Vertical,
        BorderSide::Horizontal,
    ];
}

/// Cell border
#[derive(Debug, Clone, PartialEq)]
pub struct SlBorder {
    pub left: Option<SlBorderProperties>,
    pub right: Option<SlBorderProperties>,
    pub top: Option<SlBorderProperties>,
    pub bottom: Option<SlBorderProperties>,
    pub diagonal: Option<SlBorderProperties>,
    pub vertical: Option<SlBorderProperties>,
    pub horizontal: Option<SlBorderProperties>,
    /// Diagonal runs bottom-left to top-right
    pub diagonal_up: Option<bool>,
    /// Diagonal runs top-left to bottom-right
    pub diagonal_down: Option<bool>,
    /// Apply left/right/top/bottom to the outline of a range only
    pub outline: Option<bool>,
    palette: Palette,
}

macro_rules! side_setters {
    ($( $side:ident: $set:ident, $set_theme:ident, $remove:ident; )+) => {
        $(
            pub fn $set(&mut self, style: BorderStyleValues, color: Argb) {
                self.set_border(BorderSide::$side, style, color);
            }

            pub fn $set_theme(&mut self, style: BorderStyleValues, index: ThemeColorIndex, tint: f64) {
                self.set_border_theme(BorderSide::$side, style, index, tint);
            }

            pub fn $remove(&mut self) {
                self.remove_border(BorderSide::$side);
            }
        )+
    };
}

impl SlBorder {
    /// Border with no edges
    pub fn new(palette: &Palette) -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
            diagonal: None,
            vertical: None,
            horizontal: None,
            diagonal_up: None,
            diagonal_down: None,
            outline: None,
            palette: palette.clone(),
        }
    }

    pub fn side(&self, side: BorderSide) -> Option<&SlBorderProperties> {
        self.slot(side).as_ref()
    }

    fn slot(&self, side: BorderSide) -> &Option<SlBorderProperties> {
        match side {
            BorderSide::Left => &self.left,
            BorderSide::Right => &self.right,
            BorderSide::Top => &self.top,
            BorderSide::Bottom => &self.bottom,
            BorderSide::Diagonal => &self.diagonal,
            BorderSide::Vertical => &self.vertical,
            BorderSide::Horizontal => &self.horizontal,
        }
    }

    fn slot_mut(&mut self, side: BorderSide) -> &mut Option<SlBorderProperties> {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
            BorderSide::Diagonal => &mut self.diagonal,
            BorderSide::Vertical => &mut self.vertical,
            BorderSide::Horizontal => &mut self.horizontal,
        }
    }

    fn edge_mut(&mut self, side: BorderSide) -> &mut SlBorderProperties {
        let palette = self.palette.clone();
        self.slot_mut(side)
            .get_or_insert_with(|| SlBorderProperties::new(&palette))
    }

    /// Set one edge to a style in a literal color
    pub fn set_border(&mut self, side: BorderSide, style: BorderStyleValues, color: Argb) {
        let edge = self.edge_mut(side);
        edge.style = Some(style);
        edge.color.set_color(color);
    }

    /// Set one edge to a style in a theme color
    pub fn set_border_theme(
        &mut self,
        side: BorderSide,
        style: BorderStyleValues,
        index: ThemeColorIndex,
        tint: f64,
    ) {
        let edge = self.edge_mut(side);
        edge.style = Some(style);
        edge.color.set_theme_color(index, tint);
    }

    /// Set only the style of an edge, keeping its color
    pub fn set_border_style(&mut self, side: BorderSide, style: BorderStyleValues) {
        self.edge_mut(side).style = Some(style);
    }

    pub fn remove_border(&mut self, side: BorderSide) {
        *self.slot_mut(side) = None;
    }

    side_setters! {
        Left: set_left_border, set_left_border_theme, remove_left_border;
        Right: set_right_border, set_right_border_theme, remove_right_border;
        Top: set_top_border, set_top_border_theme, remove_top_border;
        Bottom: set_bottom_border, set_bottom_border_theme, remove_bottom_border;
        Diagonal: set_diagonal_border, set_diagonal_border_theme, remove_diagonal_border;
        Vertical: set_vertical_border, set_vertical_border_theme, remove_vertical_border;
        Horizontal: set_horizontal_border, set_horizontal_border_theme, remove_horizontal_border;
    }

    /// Same style and color on left, right, top and bottom
    pub fn set_outline(&mut self, style: BorderStyleValues, color: Argb) {
        for side in [BorderSide::Left, BorderSide::Right, BorderSide::Top, BorderSide::Bottom] {
            self.set_border(side, style, color);
        }
    }

    pub fn set_diagonal_up(&mut self, up: bool) {
        self.diagonal_up = Some(up);
    }

    pub fn set_diagonal_down(&mut self, down: bool) {
        self.diagonal_down = Some(down);
    }

    pub fn is_empty(&self) -> bool {
        BorderSide::ALL.iter().all(|s| self.side(*s).is_none())
            && self.diagonal_up.is_none()
            && self.diagonal_down.is_none()
            && self.outline.is_none()
    }

    /// Overlay every edge and flag `other` has set
    pub fn merge(&mut self, other: &SlBorder) {
        for side in BorderSide::ALL {
            if let Some(theirs) = other.side(side) {
                self.edge_mut(side).merge(theirs);
            }
        }
        if other.diagonal_up.is_some() {
            self.diagonal_up = other.diagonal_up;
        }
        if other.diagonal_down.is_some() {
            self.diagonal_down = other.diagonal_down;
        }
        if other.outline.is_some() {
            self.outline = other.outline;
        }
    }

    pub fn from_element(element: &Border, palette: &Palette) -> Self {
        let edge = |e: &Option<BorderEdge>| {
            e.as_ref()
                .filter(|e| !e.is_empty())
                .map(|e| SlBorderProperties::from_element(e, palette))
        };
        Self {
            left: edge(&element.left),
            right: edge(&element.right),
            top: edge(&element.top),
            bottom: edge(&element.bottom),
            diagonal: edge(&element.diagonal),
            vertical: edge(&element.vertical),
            horizontal: edge(&element.horizontal),
            diagonal_up: element.diagonal_up,
            diagonal_down: element.diagonal_down,
            outline: element.outline,
            palette: palette.clone(),
        }
    }

    pub fn to_element(&self) -> Border {
        let edge = |e: &Option<SlBorderProperties>| {
            e.as_ref()
                .filter(|e| !e.is_empty())
                .map(SlBorderProperties::to_element)
        };
        Border {
            diagonal_up: self.diagonal_up,
            diagonal_down: self.diagonal_down,
            outline: self.outline,
            left: edge(&self.left),
            right: edge(&self.right),
            top: edge(&self.top),
            bottom: edge(&self.bottom),
            diagonal: edge(&self.diagonal),
            vertical: edge(&self.vertical),
            horizontal: edge(&self.horizontal),
        }
    }
}

impl Default for SlBorder {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlBorder {
    type Key = Border;

    fn to_key(&self) -> Border {
        self.to_element()
    }

    fn from_key(key: &Border, palette: &Palette) -> Self {
        Self::from_element(key, palette)
    }
}
