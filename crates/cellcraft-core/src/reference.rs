//! Cell references and ranges
//!
//! Row and column indices are 1-based throughout (`A1` is row 1, column 1),
//! matching the numbers a user sees in the spreadsheet UI.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Clamp a row index into `1..=MAX_ROWS`
pub fn clamp_row(row: u32) -> u32 {
    let clamped = row.clamp(1, MAX_ROWS);
    if clamped != row {
        log::debug!("row {} out of range, using {}", row, clamped);
    }
    clamped
}

/// Clamp a column index into `1..=MAX_COLS`
pub fn clamp_col(col: u32) -> u32 {
    let clamped = col.clamp(1, MAX_COLS);
    if clamped != col {
        log::debug!("column {} out of range, using {}", col, clamped);
    }
    clamped
}

/// A single cell reference (e.g. `B2`, `$C$4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A = 1)
    pub col: u32,
    /// Whether the row reference is absolute ($)
    pub row_absolute: bool,
    /// Whether the column reference is absolute ($)
    pub col_absolute: bool,
}

impl CellRef {
    /// Create a relative reference; indices outside the sheet are clamped
    pub fn new(row: u32, col: u32) -> Self {
        Self {
            row: clamp_row(row),
            col: clamp_col(col),
            row_absolute: false,
            col_absolute: false,
        }
    }

    /// Parse an A1-style reference
    ///
    /// # Examples
    /// ```
    /// use cellcraft_core::CellRef;
    ///
    /// let r = CellRef::parse("$B$2").unwrap();
    /// assert_eq!((r.row, r.col), (2, 2));
    /// assert!(r.row_absolute && r.col_absolute);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_absolute = bytes.first() == Some(&b'$');
        if col_absolute {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let col = letters_to_column(&s[col_start..pos])
            .ok_or_else(|| Error::InvalidAddress(format!("invalid column in '{}'", s)))?;

        let row_absolute = bytes.get(pos) == Some(&b'$');
        if row_absolute {
            pos += 1;
        }

        let row: u32 = s[pos..]
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!("row out of range in '{}'", s)));
        }

        Ok(Self {
            row,
            col,
            row_absolute,
            col_absolute,
        })
    }

    /// Parse leniently: an unparsable reference becomes `A1`
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            log::debug!("{}; using A1", e);
            Self::new(1, 1)
        })
    }

    /// Format as `A1`, keeping absolute markers
    pub fn to_a1_string(&self) -> String {
        let mut out = String::new();
        if self.col_absolute {
            out.push('$');
        }
        out.push_str(&column_to_letters(self.col));
        if self.row_absolute {
            out.push('$');
        }
        out.push_str(&self.row.to_string());
        out
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range with 1-based, inclusive bounds
///
/// Constructors normalize the corners so that `start <= end` on both axes,
/// and clamp rows into `1..=MAX_ROWS` and columns into `1..=MAX_COLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl CellRange {
    /// Create a range from two corners in any order
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        let (start_row, end_row) = (clamp_row(start_row), clamp_row(end_row));
        let (start_col, end_col) = (clamp_col(start_col), clamp_col(end_col));
        Self {
            start_row: start_row.min(end_row),
            start_col: start_col.min(end_col),
            end_row: start_row.max(end_row),
            end_col: start_col.max(end_col),
        }
    }

    /// Single-cell range
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row, col)
    }

    /// Parse `A1:C3` or a single cell `B2`; absolute markers are accepted
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (_, s) = split_sheet(s);
        let (a, b) = match s.split_once(':') {
            Some((a, b)) => (a, b),
            None => (s, s),
        };
        let start =
            CellRef::parse(a).map_err(|_| Error::InvalidRange(format!("invalid range '{}'", s)))?;
        let end =
            CellRef::parse(b).map_err(|_| Error::InvalidRange(format!("invalid range '{}'", s)))?;
        Ok(Self::new(start.row, start.col, end.row, end.col))
    }

    /// Parse leniently: unparsable corners become row 1 / column 1
    pub fn parse_or_default(s: &str) -> Self {
        let (_, s) = split_sheet(s.trim());
        let (a, b) = s.split_once(':').unwrap_or((s, s));
        let start = CellRef::parse_or_default(a);
        let end = CellRef::parse_or_default(b);
        Self::new(start.row, start.col, end.row, end.col)
    }

    /// Number of rows spanned
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns spanned
    pub fn col_count(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    /// True for a single cell
    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    /// True when the range is one row or one column
    pub fn is_vector(&self) -> bool {
        self.start_row == self.end_row || self.start_col == self.end_col
    }

    /// Whether a cell lies inside the range
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    /// Format as `A1:C3` (or `A1` for a single cell)
    pub fn to_a1_string(&self) -> String {
        let start = CellRef::new(self.start_row, self.start_col);
        if self.is_single_cell() {
            return start.to_a1_string();
        }
        let end = CellRef::new(self.end_row, self.end_col);
        format!("{}:{}", start, end)
    }

    /// Format as `$A$1:$C$3`
    pub fn to_absolute_string(&self) -> String {
        let abs = |row, col| CellRef {
            row,
            col,
            row_absolute: true,
            col_absolute: true,
        };
        let start = abs(self.start_row, self.start_col);
        if self.is_single_cell() {
            return start.to_a1_string();
        }
        format!("{}:{}", start, abs(self.end_row, self.end_col))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a 1-based column index to letters (1 = A, 27 = AA)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col.max(1);

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 1-based index (A = 1, AA = 27)
pub fn letters_to_column(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    (col <= MAX_COLS).then_some(col)
}

/// Quote a worksheet name for use in a formula when it needs it
pub fn quote_sheet_name(name: &str) -> String {
    let plain = !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// `Sheet1!A1:C3`, quoting the sheet name when needed
pub fn sheet_range_reference(sheet: &str, range: &CellRange) -> String {
    format!("{}!{}", quote_sheet_name(sheet), range.to_a1_string())
}

/// Split `Sheet1!A1:B2` into the unquoted sheet name and the range part
pub fn split_sheet(s: &str) -> (Option<String>, &str) {
    match s.rfind('!') {
        Some(pos) => {
            let sheet = &s[..pos];
            let sheet = match sheet.strip_prefix('\'').and_then(|x| x.strip_suffix('\'')) {
                Some(quoted) => quoted.replace("''", "'"),
                None => sheet.to_string(),
            };
            (Some(sheet), &s[pos + 1..])
        }
        None => (None, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(16_384), "XFD");
        assert_eq!(letters_to_column("A"), Some(1));
        assert_eq!(letters_to_column("xfd"), Some(16_384));
        assert_eq!(letters_to_column("XFE"), None);
        assert_eq!(letters_to_column(""), None);
    }

    #[test]
    fn test_parse_cell() {
        let r = CellRef::parse("C7").unwrap();
        assert_eq!((r.row, r.col), (7, 3));
        assert!(!r.row_absolute);
        assert_eq!(r.to_a1_string(), "C7");

        let r: CellRef = "$AA$10".parse().unwrap();
        assert_eq!((r.row, r.col), (10, 27));
        assert_eq!(r.to_string(), "$AA$10");
    }

    #[test]
    fn test_invalid_cells() {
        assert!(CellRef::parse("").is_err());
        assert!(CellRef::parse("A0").is_err());
        assert!(CellRef::parse("7C").is_err());
        assert!(CellRef::parse("A1048577").is_err());
    }

    #[test]
    fn test_lenient_parse_defaults_to_a1() {
        assert_eq!(CellRef::parse_or_default("nonsense"), CellRef::new(1, 1));
        assert_eq!(
            CellRange::parse_or_default("??:C3"),
            CellRange::new(1, 1, 3, 3)
        );
    }

    #[test]
    fn test_range_normalizes() {
        let r = CellRange::new(5, 4, 2, 1);
        assert_eq!(r, CellRange::new(2, 1, 5, 4));
        assert_eq!(r.row_count(), 4);
        assert_eq!(r.col_count(), 4);
        assert_eq!(r.to_a1_string(), "A2:D5");
        assert_eq!(CellRange::parse("D5:A2").unwrap(), r);
    }

    #[test]
    fn test_zero_and_oversized_indices_clamp() {
        assert_eq!(CellRef::new(0, 0).to_a1_string(), "A1");
        assert_eq!(CellRange::new(0, 0, 3, 2).to_a1_string(), "A1:B3");
        assert_eq!(
            CellRange::new(2, 3, MAX_ROWS + 10, MAX_COLS + 1),
            CellRange::new(2, 3, MAX_ROWS, MAX_COLS)
        );
        assert_eq!(CellRange::cell(0, 5).to_a1_string(), "E1");
    }

    #[test]
    fn test_range_strings() {
        let r = CellRange::cell(3, 2);
        assert!(r.is_single_cell());
        assert_eq!(r.to_a1_string(), "B3");
        assert_eq!(CellRange::new(1, 1, 3, 3).to_absolute_string(), "$A$1:$C$3");
        assert_eq!(CellRange::parse("Sheet1!$B$1:$B$3").unwrap(), CellRange::new(1, 2, 3, 2));
    }

    #[test]
    fn test_sheet_references() {
        let r = CellRange::new(1, 1, 1, 5);
        assert_eq!(sheet_range_reference("Sheet1", &r), "Sheet1!A1:E1");
        assert_eq!(sheet_range_reference("My Data", &r), "'My Data'!A1:E1");
        assert_eq!(sheet_range_reference("Bob's", &r), "'Bob''s'!A1:E1");
        assert_eq!(
            split_sheet("'Bob''s'!A1:E1"),
            (Some("Bob's".to_string()), "A1:E1")
        );
        assert_eq!(split_sheet("A1"), (None, "A1"));
    }

    proptest::proptest! {
        #[test]
        fn column_letters_round_trip(col in 1u32..=MAX_COLS) {
            proptest::prop_assert_eq!(letters_to_column(&column_to_letters(col)), Some(col));
        }

        #[test]
        fn range_string_round_trip(
            r1 in 1u32..=MAX_ROWS, c1 in 1u32..=MAX_COLS,
            r2 in 1u32..=MAX_ROWS, c2 in 1u32..=MAX_COLS
        ) {
            let range = CellRange::new(r1, c1, r2, c2);
            proptest::prop_assert_eq!(CellRange::parse(&range.to_a1_string()).unwrap(), range);
        }
    }
}
