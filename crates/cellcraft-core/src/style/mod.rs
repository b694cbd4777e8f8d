//! Cell styling types
//!
//! Each formatting concept has a mirror type that reads from and writes to
//! its SpreadsheetML element:
//! - [`SlStyle`] - Complete cell style (an `xf` record plus its parts)
//! - [`SlFont`] - Font settings
//! - [`SlFill`] - Pattern or gradient fill
//! - [`SlBorder`] - Cell borders
//! - [`SlAlignment`] / [`SlProtection`] - Alignment and protection
//! - [`SlNumberingFormat`] - Number format
//! - [`SlColor`] - Color with its theme/indexed/rgb source
//! - [`SlDifferentialFormat`] - Sparse format used by conditional formatting

mod alignment;
mod border;
mod color;
mod differential;
mod fill;
mod font;
mod named;
mod number_format;
mod palette;
mod pool;
mod tables;

pub use alignment::{
    text_rotation_to_intuitive, text_rotation_to_ooxml, ReadingOrder, SlAlignment, SlProtection,
    TextRotation, STACKED_TEXT_ROTATION,
};
pub use border::{BorderSide, SlBorder, SlBorderProperties};
pub use color::{ColorSource, SlColor};
pub use differential::SlDifferentialFormat;
pub use fill::{FillMode, GradientShading, SlFill, SlGradientFill, SlGradientStop, SlPatternFill};
pub use font::{SlFont, DEFAULT_FONT_SIZE, MAJOR_FONT, MINOR_FONT};
pub use named::NamedCellStyle;
pub(crate) use named::PresetColor;
pub use number_format::{
    builtin_format_code, builtin_id_for, SlNumberingFormat, FIRST_CUSTOM_FORMAT_ID, ID_COMMA,
    ID_COMMA0, ID_CURRENCY, ID_CURRENCY0, ID_GENERAL, ID_PERCENT, ID_TEXT,
};
pub use palette::{apply_tint, clamp_tint, Argb, Palette, ThemeColorIndex};
pub use pool::{KeyTable, StyleKeyed};
pub use tables::StyleTables;

use cellcraft_ooxml::{
    Border, BorderStyleValues, CellFormat, Fill, Font, HorizontalAlignmentValues, PatternValues,
    VerticalAlignmentValues,
};

/// Set `target` when `value` is set
pub(crate) fn overlay<T: Clone>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// Complete cell style
///
/// The ids are positions into the shared font/fill/border/number format
/// tables of a styles part. They are filled in by [`StyleTables`] when the
/// style is registered, or read from an `xf` record.
#[derive(Debug, Clone, PartialEq)]
pub struct SlStyle {
    pub alignment: SlAlignment,
    pub protection: SlProtection,
    /// Unset means General
    pub number_format: Option<SlNumberingFormat>,
    pub font: SlFont,
    pub fill: SlFill,
    pub border: SlBorder,

    pub number_format_id: Option<u32>,
    pub font_id: Option<u32>,
    pub fill_id: Option<u32>,
    pub border_id: Option<u32>,
    /// `xfId`: the cell style record this style derives from
    pub format_id: Option<u32>,
    pub quote_prefix: Option<bool>,
    pub pivot_button: Option<bool>,

    pub apply_number_format: Option<bool>,
    pub apply_font: Option<bool>,
    pub apply_fill: Option<bool>,
    pub apply_border: Option<bool>,
    pub apply_alignment: Option<bool>,
    pub apply_protection: Option<bool>,

    palette: Palette,
}

/// Dedup key of a complete style: the `xf` record plus the parts it points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub cell_format: CellFormat,
    pub number_format: Option<String>,
    pub font: Font,
    pub fill: Fill,
    pub border: Border,
}

impl SlStyle {
    /// Blank style
    pub fn new(palette: &Palette) -> Self {
        Self {
            alignment: SlAlignment::default(),
            protection: SlProtection::default(),
            number_format: None,
            font: SlFont::new(palette),
            fill: SlFill::new(palette),
            border: SlBorder::new(palette),
            number_format_id: None,
            font_id: None,
            fill_id: None,
            border_id: None,
            format_id: None,
            quote_prefix: None,
            pivot_button: None,
            apply_number_format: None,
            apply_font: None,
            apply_fill: None,
            apply_border: None,
            apply_alignment: None,
            apply_protection: None,
            palette: palette.clone(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Set font name and size
    pub fn set_font<S: Into<String>>(&mut self, name: S, size: f64) {
        self.font.set_font(name, size);
    }

    pub fn set_font_color(&mut self, color: Argb) {
        self.font.set_font_color(color);
    }

    pub fn set_font_theme_color(&mut self, index: ThemeColorIndex, tint: f64) {
        self.font.set_font_theme_color(index, tint);
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.font.set_bold(bold);
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.font.set_italic(italic);
    }

    /// Pattern fill with foreground and background colors
    pub fn set_pattern_fill(&mut self, pattern: PatternValues, foreground: Argb, background: Argb) {
        self.fill.set_pattern(pattern, foreground, background);
    }

    /// Solid fill in a literal color
    pub fn set_solid_fill(&mut self, color: Argb) {
        self.fill.set_solid(color);
    }

    /// Solid fill in a theme color
    pub fn set_solid_fill_theme(&mut self, index: ThemeColorIndex, tint: f64) {
        self.fill.set_solid_theme(index, tint);
    }

    /// Two-color gradient fill
    pub fn set_gradient_fill(&mut self, shading: GradientShading, color1: Argb, color2: Argb) {
        self.fill.set_gradient(shading, color1, color2);
    }

    pub fn set_left_border(&mut self, style: BorderStyleValues, color: Argb) {
        self.border.set_left_border(style, color);
    }

    pub fn set_right_border(&mut self, style: BorderStyleValues, color: Argb) {
        self.border.set_right_border(style, color);
    }

    pub fn set_top_border(&mut self, style: BorderStyleValues, color: Argb) {
        self.border.set_top_border(style, color);
    }

    pub fn set_bottom_border(&mut self, style: BorderStyleValues, color: Argb) {
        self.border.set_bottom_border(style, color);
    }

    pub fn set_horizontal_alignment(&mut self, align: HorizontalAlignmentValues) {
        self.alignment.horizontal = Some(align);
    }

    pub fn set_vertical_alignment(&mut self, align: VerticalAlignmentValues) {
        self.alignment.vertical = Some(align);
    }

    pub fn set_text_rotation(&mut self, rotation: TextRotation) {
        self.alignment.text_rotation = Some(rotation);
    }

    pub fn set_wrap_text(&mut self, wrap: bool) {
        self.alignment.wrap_text = Some(wrap);
    }

    pub fn set_shrink_to_fit(&mut self, shrink: bool) {
        self.alignment.shrink_to_fit = Some(shrink);
    }

    pub fn set_indent(&mut self, indent: u32) {
        self.alignment.indent = Some(indent);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.protection.locked = Some(locked);
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.protection.hidden = Some(hidden);
    }

    /// Number format from a format code; built-in codes get their built-in id
    pub fn set_format_code<S: Into<String>>(&mut self, code: S) {
        let format = SlNumberingFormat::from_format_code(code);
        self.number_format_id = format.number_format_id;
        self.number_format = Some(format);
    }

    /// Built-in number format by id
    pub fn set_number_format_id(&mut self, id: u32) {
        self.number_format = Some(SlNumberingFormat::builtin(id));
        self.number_format_id = self
            .number_format
            .as_ref()
            .and_then(|f| f.number_format_id);
    }

    /// Number format in effect (General when unset)
    pub fn format_code(&self) -> &str {
        self.number_format
            .as_ref()
            .map_or("General", |f| f.format_code.as_str())
    }

    /// Overlay every attribute `other` has set
    ///
    /// Unset attributes of `other` leave this style untouched. Nested parts
    /// merge property by property.
    pub fn merge_style(&mut self, other: &SlStyle) {
        self.alignment.merge(&other.alignment);
        self.protection.merge(&other.protection);
        overlay(&mut self.number_format, other.number_format.clone());
        self.font.merge(&other.font);
        self.fill.merge(&other.fill);
        self.border.merge(&other.border);

        overlay(&mut self.number_format_id, other.number_format_id);
        overlay(&mut self.font_id, other.font_id);
        overlay(&mut self.fill_id, other.fill_id);
        overlay(&mut self.border_id, other.border_id);
        overlay(&mut self.format_id, other.format_id);
        overlay(&mut self.quote_prefix, other.quote_prefix);
        overlay(&mut self.pivot_button, other.pivot_button);
        overlay(&mut self.apply_number_format, other.apply_number_format);
        overlay(&mut self.apply_font, other.apply_font);
        overlay(&mut self.apply_fill, other.apply_fill);
        overlay(&mut self.apply_border, other.apply_border);
        overlay(&mut self.apply_alignment, other.apply_alignment);
        overlay(&mut self.apply_protection, other.apply_protection);
    }

    /// Build the `xf` record from the stored ids and inline parts
    pub fn to_cell_format(&self) -> CellFormat {
        CellFormat {
            number_format_id: self.number_format_id,
            font_id: self.font_id,
            fill_id: self.fill_id,
            border_id: self.border_id,
            format_id: self.format_id,
            quote_prefix: self.quote_prefix,
            pivot_button: self.pivot_button,
            apply_number_format: self.apply_number_format,
            apply_font: self.apply_font,
            apply_fill: self.apply_fill,
            apply_border: self.apply_border,
            apply_alignment: self.apply_alignment,
            apply_protection: self.apply_protection,
            alignment: (!self.alignment.is_empty()).then(|| self.alignment.to_element()),
            protection: (!self.protection.is_empty()).then(|| self.protection.to_element()),
        }
    }

    /// Read an `xf` record, resolving its ids through `tables`
    ///
    /// Ids that point past the end of a table leave that part blank.
    pub fn from_cell_format(element: &CellFormat, tables: &StyleTables) -> Self {
        let palette = tables.palette();
        let mut style = Self::new(palette);

        if let Some(id) = element.font_id {
            match tables.fonts().get(id) {
                Some(font) => style.font = SlFont::from_element(font, palette),
                None => log::debug!("xf font id {} out of range", id),
            }
        }
        if let Some(id) = element.fill_id {
            match tables.fills().get(id) {
                Some(fill) => style.fill = SlFill::from_element(fill, palette),
                None => log::debug!("xf fill id {} out of range", id),
            }
        }
        if let Some(id) = element.border_id {
            match tables.borders().get(id) {
                Some(border) => style.border = SlBorder::from_element(border, palette),
                None => log::debug!("xf border id {} out of range", id),
            }
        }
        style.number_format = element
            .number_format_id
            .and_then(|id| tables.number_format(id));

        style.alignment = element
            .alignment
            .as_ref()
            .map(SlAlignment::from_element)
            .unwrap_or_default();
        style.protection = element
            .protection
            .as_ref()
            .map(SlProtection::from_element)
            .unwrap_or_default();

        style.number_format_id = element.number_format_id;
        style.font_id = element.font_id;
        style.fill_id = element.fill_id;
        style.border_id = element.border_id;
        style.format_id = element.format_id;
        style.quote_prefix = element.quote_prefix;
        style.pivot_button = element.pivot_button;
        style.apply_number_format = element.apply_number_format;
        style.apply_font = element.apply_font;
        style.apply_fill = element.apply_fill;
        style.apply_border = element.apply_border;
        style.apply_alignment = element.apply_alignment;
        style.apply_protection = element.apply_protection;
        style
    }
}

impl Default for SlStyle {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}

impl StyleKeyed for SlStyle {
    type Key = StyleKey;

    fn to_key(&self) -> StyleKey {
        StyleKey {
            cell_format: self.to_cell_format(),
            number_format: self.number_format.as_ref().map(|f| f.format_code.clone()),
            font: self.font.to_key(),
            fill: self.fill.to_key(),
            border: self.border.to_key(),
        }
    }

    fn from_key(key: &StyleKey, palette: &Palette) -> Self {
        let xf = &key.cell_format;
        let mut style = Self::new(palette);
        style.font = SlFont::from_key(&key.font, palette);
        style.fill = SlFill::from_key(&key.fill, palette);
        style.border = SlBorder::from_key(&key.border, palette);
        style.number_format = key.number_format.as_ref().map(|code| {
            let mut format = SlNumberingFormat::from_format_code(code.as_str());
            if format.number_format_id.is_none() {
                format.number_format_id = xf.number_format_id;
            }
            format
        });
        style.alignment = xf
            .alignment
            .as_ref()
            .map(SlAlignment::from_element)
            .unwrap_or_default();
        style.protection = xf
            .protection
            .as_ref()
            .map(SlProtection::from_element)
            .unwrap_or_default();
        style.number_format_id = xf.number_format_id;
        style.font_id = xf.font_id;
        style.fill_id = xf.fill_id;
        style.border_id = xf.border_id;
        style.format_id = xf.format_id;
        style.quote_prefix = xf.quote_prefix;
        style.pivot_button = xf.pivot_button;
        style.apply_number_format = xf.apply_number_format;
        style.apply_font = xf.apply_font;
        style.apply_fill = xf.apply_fill;
        style.apply_border = xf.apply_border;
        style.apply_alignment = xf.apply_alignment;
        style.apply_protection = xf.apply_protection;
        style
    }
}
