//! A1-style cell addressing

use crate::error::{ScriptError, ScriptResult};
use std::fmt;
use std::str::FromStr;

/// Zero-based cell coordinate, displayed in A1 notation (`(11, 1)` → `B12`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub col: u32,
}

impl CellAddress {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Build from a column letter and a 1-based row number (`"C", 5`)
    pub fn from_parts(column: &str, row_number: u32) -> ScriptResult<Self> {
        if row_number == 0 {
            return Err(ScriptError::Format(
                "Row numbers start at 1".to_string(),
            ));
        }
        let col = column_index(column).ok_or_else(|| {
            ScriptError::Format(format!("Invalid column reference '{}'", column))
        })?;
        Ok(Self::new(row_number - 1, col))
    }

    /// 1-based row number as shown by spreadsheet applications
    pub fn row_number(&self) -> u32 {
        self.row + 1
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row_number())
    }
}

impl FromStr for CellAddress {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ScriptError::Format(format!("Invalid cell address '{}'", s)))?;
        let (letters, digits) = s.split_at(split);
        let row_number: u32 = digits
            .parse()
            .map_err(|_| ScriptError::Format(format!("Invalid cell address '{}'", s)))?;
        Self::from_parts(letters, row_number)
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
pub fn column_letter(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// Convert Excel column letters to a zero-based index (A→0, Z→25, AA→26).
/// Case-insensitive; `None` for anything that is not a column reference.
pub fn column_index(letters: &str) -> Option<u32> {
    let letters = letters.trim();
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index * 26 + digit;
    }
    Some(index - 1)
}
