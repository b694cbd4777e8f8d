//! Shared style tables of a styles part

use cellcraft_ooxml::{Border, CellFormat, DifferentialFormat, Fill, Font, PatternFill, PatternValues};

use super::differential::SlDifferentialFormat;
use super::font::SlFont;
use super::number_format::{builtin_format_code, SlNumberingFormat, FIRST_CUSTOM_FORMAT_ID};
use super::palette::Palette;
use super::pool::{KeyTable, StyleKeyed};
use super::SlStyle;

/// The deduplicated font, fill, border, number format, `xf` and `dxf`
/// tables a workbook's styles part is built from
///
/// A new set of tables holds the records every styles part starts with:
/// the default font, the `none` and `gray125` fills, an empty border and
/// the default cell format.
#[derive(Debug, Clone)]
pub struct StyleTables {
    fonts: KeyTable<Font>,
    fills: KeyTable<Fill>,
    borders: KeyTable<Border>,
    custom_formats: KeyTable<String>,
    cell_formats: KeyTable<CellFormat>,
    differential_formats: KeyTable<DifferentialFormat>,
    palette: Palette,
}

fn pattern_fill(pattern: PatternValues) -> Fill {
    Fill::Pattern(PatternFill {
        pattern_type: Some(pattern),
        foreground_color: None,
        background_color: None,
    })
}

impl StyleTables {
    pub fn new(palette: &Palette) -> Self {
        let mut tables = Self {
            fonts: KeyTable::new(),
            fills: KeyTable::new(),
            borders: KeyTable::new(),
            custom_formats: KeyTable::new(),
            cell_formats: KeyTable::new(),
            differential_formats: KeyTable::new(),
            palette: palette.clone(),
        };
        tables.fonts.insert_mirror(&SlFont::default_font(palette));
        tables.fills.get_or_insert(pattern_fill(PatternValues::None));
        tables.fills.get_or_insert(pattern_fill(PatternValues::Gray125));
        tables.borders.get_or_insert(Border::default());
        tables.cell_formats.get_or_insert(CellFormat {
            number_format_id: Some(0),
            font_id: Some(0),
            fill_id: Some(0),
            border_id: Some(0),
            format_id: Some(0),
            ..Default::default()
        });
        tables
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn fonts(&self) -> &KeyTable<Font> {
        &self.fonts
    }

    pub fn fills(&self) -> &KeyTable<Fill> {
        &self.fills
    }

    pub fn borders(&self) -> &KeyTable<Border> {
        &self.borders
    }

    pub fn cell_formats(&self) -> &KeyTable<CellFormat> {
        &self.cell_formats
    }

    pub fn differential_formats(&self) -> &KeyTable<DifferentialFormat> {
        &self.differential_formats
    }

    /// Id of a number format: its built-in id, or a custom id from 164 up
    pub fn number_format_id(&mut self, format: &SlNumberingFormat) -> u32 {
        match format.number_format_id {
            Some(id) if format.is_builtin() => id,
            _ => FIRST_CUSTOM_FORMAT_ID + self.custom_formats.get_or_insert(format.to_key()),
        }
    }

    /// Number format for an id, built-in or custom
    pub fn number_format(&self, id: u32) -> Option<SlNumberingFormat> {
        if id < FIRST_CUSTOM_FORMAT_ID {
            return builtin_format_code(id).map(|_| SlNumberingFormat::builtin(id));
        }
        self.custom_formats
            .get(id - FIRST_CUSTOM_FORMAT_ID)
            .map(|code| SlNumberingFormat {
                number_format_id: Some(id),
                format_code: code.clone(),
            })
    }

    /// Custom number formats with their ids, as written to `numFmts`
    pub fn custom_formats(&self) -> impl Iterator<Item = (u32, &str)> {
        self.custom_formats
            .iter()
            .map(|(i, code)| (FIRST_CUSTOM_FORMAT_ID + i, code.as_str()))
    }

    /// Add a style's parts and `xf` record, returning the `xf` id
    ///
    /// Blank parts map to the default records. `apply*` flags the style
    /// leaves unset are turned on for every non-blank part.
    pub fn register_style(&mut self, style: &SlStyle) -> u32 {
        let mut style = style.clone();

        style.font_id = Some(if style.font.is_empty() {
            0
        } else {
            self.fonts.insert_mirror(&style.font)
        });
        style.fill_id = Some(if style.fill.is_empty() {
            0
        } else {
            self.fills.insert_mirror(&style.fill)
        });
        style.border_id = Some(if style.border.is_empty() {
            0
        } else {
            self.borders.insert_mirror(&style.border)
        });
        style.number_format_id = Some(match &style.number_format {
            Some(format) => self.number_format_id(format),
            None => 0,
        });
        if style.format_id.is_none() {
            style.format_id = Some(0);
        }

        let flag = |explicit: Option<bool>, set: bool| explicit.or(set.then_some(true));
        style.apply_font = flag(style.apply_font, !style.font.is_empty());
        style.apply_fill = flag(style.apply_fill, !style.fill.is_empty());
        style.apply_border = flag(style.apply_border, !style.border.is_empty());
        style.apply_number_format =
            flag(style.apply_number_format, style.number_format.is_some());
        style.apply_alignment = flag(style.apply_alignment, !style.alignment.is_empty());
        style.apply_protection = flag(style.apply_protection, !style.protection.is_empty());

        self.cell_formats.get_or_insert(style.to_cell_format())
    }

    /// Style of a registered `xf` record
    pub fn style(&self, id: u32) -> Option<SlStyle> {
        self.cell_formats
            .get(id)
            .map(|xf| SlStyle::from_cell_format(xf, self))
    }

    /// Add a differential format, returning its `dxf` id
    pub fn register_differential_format(&mut self, format: &SlDifferentialFormat) -> u32 {
        self.differential_formats.insert_mirror(format)
    }

    pub fn differential_format(&self, id: u32) -> Option<SlDifferentialFormat> {
        self.differential_formats
            .get(id)
            .map(|dxf| SlDifferentialFormat::from_element(dxf, &self.palette))
    }
}

impl Default for StyleTables {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}
