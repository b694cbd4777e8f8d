//! Number format mirror and the built-in format table

use cellcraft_ooxml::NumberingFormat;

use super::palette::Palette;
use super::pool::StyleKeyed;

/// First id available to custom (non built-in) formats
pub const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// 0 - General
pub const ID_GENERAL: u32 = 0;
/// 9 - 0%
pub const ID_PERCENT: u32 = 9;
/// 41 - accounting without symbol, no decimals
pub const ID_COMMA0: u32 = 41;
/// 42 - accounting with currency symbol, no decimals
pub const ID_CURRENCY0: u32 = 42;
/// 43 - accounting without symbol, 2 decimals
pub const ID_COMMA: u32 = 43;
/// 44 - accounting with currency symbol, 2 decimals
pub const ID_CURRENCY: u32 = 44;
/// 49 - @
pub const ID_TEXT: u32 = 49;

/// Built-in formats with an implied code (en-US codes for the locale-dependent ids)
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (5, r##""$"#,##0_);\("$"#,##0\)"##),
    (6, r##""$"#,##0_);[Red]\("$"#,##0\)"##),
    (7, r##""$"#,##0.00_);\("$"#,##0.00\)"##),
    (8, r##""$"#,##0.00_);[Red]\("$"#,##0.00\)"##),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (41, r#"_(* #,##0_);_(* \(#,##0\);_(* "-"_);_(@_)"#),
    (42, r#"_("$"* #,##0_);_("$"* \(#,##0\);_("$"* "-"_);_(@_)"#),
    (43, r#"_(* #,##0.00_);_(* \(#,##0.00\);_(* "-"??_);_(@_)"#),
    (44, r#"_("$"* #,##0.00_);_("$"* \(#,##0.00\);_("$"* "-"??_);_(@_)"#),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Format code of a built-in id
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    BUILTIN_FORMATS
        .iter()
        .find(|(i, _)| *i == id)
        .map(|(_, code)| *code)
}

/// Built-in id of a format code, if the code is one of the built-ins
pub fn builtin_id_for(code: &str) -> Option<u32> {
    BUILTIN_FORMATS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(id, _)| *id)
}

/// A number format: an id plus the code it stands for
///
/// Built-in formats carry their fixed id. Custom formats have no id until
/// the host assigns one from its format table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlNumberingFormat {
    pub number_format_id: Option<u32>,
    pub format_code: String,
}

impl SlNumberingFormat {
    /// Built-in format by id; unknown ids fall back to General
    pub fn builtin(id: u32) -> Self {
        match builtin_format_code(id) {
            Some(code) => Self {
                number_format_id: Some(id),
                format_code: code.to_string(),
            },
            None => {
                log::debug!("unknown built-in number format {}, using General", id);
                Self::general()
            }
        }
    }

    pub fn general() -> Self {
        Self {
            number_format_id: Some(ID_GENERAL),
            format_code: "General".to_string(),
        }
    }

    /// Format from a code, recognising built-in codes
    pub fn from_format_code<S: Into<String>>(code: S) -> Self {
        let format_code = code.into();
        Self {
            number_format_id: builtin_id_for(&format_code),
            format_code,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.number_format_id
            .map_or(false, |id| id < FIRST_CUSTOM_FORMAT_ID)
    }

    /// Build a `numFmt` element; an unassigned custom format takes the first custom id
    pub fn to_element(&self) -> NumberingFormat {
        NumberingFormat {
            number_format_id: self.number_format_id.unwrap_or(FIRST_CUSTOM_FORMAT_ID),
            format_code: self.format_code.clone(),
        }
    }

    pub fn from_element(element: &NumberingFormat) -> Self {
        Self {
            number_format_id: Some(element.number_format_id),
            format_code: element.format_code.clone(),
        }
    }
}

impl Default for SlNumberingFormat {
    fn default() -> Self {
        Self::general()
    }
}

/// Keyed by format code: the id is a table position, not part of identity
impl StyleKeyed for SlNumberingFormat {
    type Key = String;

    fn to_key(&self) -> String {
        self.format_code.clone()
    }

    fn from_key(key: &String, _palette: &Palette) -> Self {
        Self::from_format_code(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(builtin_format_code(0), Some("General"));
        assert_eq!(builtin_format_code(14), Some("mm-dd-yy"));
        assert_eq!(builtin_format_code(49), Some("@"));
        assert_eq!(builtin_format_code(23), None);
        assert_eq!(builtin_id_for("0.00%"), Some(10));
        assert_eq!(builtin_id_for("0.000"), None);
    }

    #[test]
    fn test_currency_builtins() {
        assert_eq!(builtin_format_code(5), Some("\"$\"#,##0_);\\(\"$\"#,##0\\)"));
        assert_eq!(
            builtin_format_code(8),
            Some("\"$\"#,##0.00_);[Red]\\(\"$\"#,##0.00\\)")
        );
        for id in 5..=8 {
            let code = builtin_format_code(id).unwrap();
            assert!(code.starts_with("\"$\"#,##0"), "{}", code);
            assert_eq!(builtin_id_for(code), Some(id));
        }
        let red = SlNumberingFormat::from_format_code(r##""$"#,##0.00_);\("$"#,##0.00\)"##);
        assert_eq!(red.number_format_id, Some(7));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        for (id, code) in BUILTIN_FORMATS {
            assert_eq!(builtin_id_for(code), Some(*id));
        }
    }

    #[test]
    fn test_from_format_code() {
        let f = SlNumberingFormat::from_format_code("#,##0.00");
        assert_eq!(f.number_format_id, Some(4));
        assert!(f.is_builtin());

        let custom = SlNumberingFormat::from_format_code("0.000");
        assert_eq!(custom.number_format_id, None);
        assert!(!custom.is_builtin());
        assert_eq!(custom.to_element().number_format_id, FIRST_CUSTOM_FORMAT_ID);
    }

    #[test]
    fn test_unknown_builtin_is_general() {
        assert_eq!(SlNumberingFormat::builtin(30), SlNumberingFormat::general());
        assert_eq!(SlNumberingFormat::builtin(ID_CURRENCY).number_format_id, Some(44));
    }

    #[test]
    fn test_key_ignores_id() {
        let a = SlNumberingFormat::from_element(&NumberingFormat {
            number_format_id: 170,
            format_code: "0.0".into(),
        });
        let b = SlNumberingFormat::from_element(&NumberingFormat {
            number_format_id: 165,
            format_code: "0.0".into(),
        });
        assert_eq!(a.to_key(), b.to_key());
    }
}
