//! In-memory worksheet view: cell text, last-used-row detection, area extraction

use crate::excel::address::CellAddress;
use crate::text;
use calamine::{Data, ExcelDateTime, Range};
use chrono::Timelike;

/// One addressable cell of an extracted area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub address: CellAddress,
    /// Cell text, empty for blank cells
    pub value: String,
}

impl Cell {
    /// Human-readable reference for diagnostics (`B12`)
    pub fn reference(&self) -> String {
        self.address.to_string()
    }
}

/// A named worksheet of a loaded script, backed by its calamine range
#[derive(Debug, Clone)]
pub struct Worksheet {
    file_name: String,
    name: String,
    range: Range<Data>,
}

impl Worksheet {
    pub fn new(file_name: impl Into<String>, name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            file_name: file_name.into(),
            name: name.into(),
            range,
        }
    }

    /// Build a worksheet from text rows anchored at `A1`. Empty strings stay blank.
    pub fn from_rows<S: AsRef<str>>(
        file_name: impl Into<String>,
        name: impl Into<String>,
        rows: &[Vec<S>],
    ) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;

        let range = if height == 0 || width == 0 {
            Range::empty()
        } else {
            let mut range = Range::new((0, 0), (height - 1, width - 1));
            for (r, row) in rows.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    let value = value.as_ref();
                    if !value.is_empty() {
                        range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                    }
                }
            }
            range
        };

        Self::new(file_name, name, range)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name (no directories) of the workbook this sheet belongs to
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Text of the cell at `address`, empty when blank or outside the used range
    pub fn cell_value(&self, address: CellAddress) -> String {
        self.range
            .get_value((address.row, address.col))
            .map(cell_text)
            .unwrap_or_default()
    }

    /// Last row (zero-based) at or below `start_row` whose cell in `column`
    /// holds non-blank text.
    pub fn last_data_row(&self, column: u32, start_row: u32) -> Option<u32> {
        let (end_row, _) = self.range.end()?;
        if end_row < start_row {
            return None;
        }

        (start_row..=end_row)
            .rev()
            .find(|&row| !text::is_blank(&self.cell_value(CellAddress::new(row, column))))
    }

    /// Rows of the rectangle spanned by `first` and `last` (both inclusive),
    /// top to bottom, each row left to right. Empty when `last` lies above `first`.
    pub fn area(&self, first: CellAddress, last: CellAddress) -> Vec<Vec<Cell>> {
        if last.row < first.row || last.col < first.col {
            return Vec::new();
        }

        (first.row..=last.row)
            .map(|row| {
                (first.col..=last.col)
                    .map(|col| {
                        let address = CellAddress::new(row, col);
                        Cell {
                            address,
                            value: self.cell_value(address),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Textual value of a calamine cell.
///
/// Dates render as `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` when they carry a
/// time of day. Durations keep their serial value.
pub fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => date_text(dt),
        other => other.to_string(),
    }
}

fn date_text(dt: &ExcelDateTime) -> String {
    if !dt.is_datetime() {
        return dt.as_f64().to_string();
    }
    match dt.as_datetime() {
        Some(value) if value.num_seconds_from_midnight() == 0 => {
            value.format("%Y-%m-%d").to_string()
        }
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    fn sheet() -> Worksheet {
        Worksheet::from_rows(
            "script.xlsx",
            "Smoke",
            &[
                vec!["activity", "description", "cmd type", "command"],
                vec!["Open", "", "web", "open"],
                vec!["", "", "", ""],
                vec!["", "", "web", "click"],
                vec!["", "", "", ""],
            ],
        )
    }

    #[test]
    fn test_cell_text_variants() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("abc".to_string())), "abc");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Float(5.0)), "5");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_text(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn test_cell_text_renders_dates() {
        let date = ExcelDateTime::new(45943.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_text(&Data::DateTime(date)), "2025-10-13");

        let noon = ExcelDateTime::new(45943.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_text(&Data::DateTime(noon)), "2025-10-13 12:00:00");

        let elapsed = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(cell_text(&Data::DateTime(elapsed)), "1.5");
    }

    #[test]
    fn test_cell_value_outside_range_is_blank() {
        let ws = sheet();
        assert_eq!(ws.cell_value(CellAddress::new(1, 0)), "Open");
        assert_eq!(ws.cell_value(CellAddress::new(99, 99)), "");
    }

    #[test]
    fn test_last_data_row_skips_trailing_blanks() {
        let ws = sheet();
        assert_eq!(ws.last_data_row(2, 1), Some(3));
        assert_eq!(ws.last_data_row(0, 1), Some(1));
        // nothing populated at/after row 4
        assert_eq!(ws.last_data_row(2, 4), None);
        // start beyond the used range
        assert_eq!(ws.last_data_row(2, 50), None);
    }

    #[test]
    fn test_last_data_row_on_empty_sheet() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let ws = Worksheet::from_rows("a.xlsx", "Empty", &rows);
        assert_eq!(ws.last_data_row(0, 0), None);
    }

    #[test]
    fn test_area_is_row_major_and_addressable() {
        let ws = sheet();
        let area = ws.area(CellAddress::new(1, 0), CellAddress::new(3, 3));
        assert_eq!(area.len(), 3);
        assert!(area.iter().all(|row| row.len() == 4));
        assert_eq!(area[0][0].value, "Open");
        assert_eq!(area[0][0].reference(), "A2");
        assert_eq!(area[2][3].value, "click");
        assert_eq!(area[2][3].reference(), "D4");
    }

    #[test]
    fn test_area_extends_past_used_columns() {
        let ws = sheet();
        let area = ws.area(CellAddress::new(1, 0), CellAddress::new(1, 13));
        assert_eq!(area[0].len(), 14);
        assert_eq!(area[0][13].value, "");
        assert_eq!(area[0][13].reference(), "N2");
    }

    #[test]
    fn test_inverted_area_is_empty() {
        let ws = sheet();
        assert!(ws.area(CellAddress::new(4, 0), CellAddress::new(3, 13)).is_empty());
    }
}
