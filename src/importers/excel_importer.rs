use calamine::{Data, Range};
use thiserror::Error;
use tracing::debug;

use crate::table::Table;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Resource not found: {0}")]
    SourceNotFound(String),

    #[error("Failed to open workbook {name}: {msg}")]
    WorkbookOpen { name: String, msg: String },

    #[error("Workbook {0} contains no worksheets")]
    NoWorksheet(String),

    #[error("Unparseable numeric cell at row {row}, col {col}: {content:?}")]
    MalformedCell {
        row: usize,
        col: usize,
        content: String,
    },
}

/// Outcome of reading one spreadsheet cell as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum CellNumber {
    /// The cell held a numeric value, or text that parses as one.
    Value(f64),
    /// The cell is empty or of a non-numeric type.
    Absent,
    /// The cell held text that does not parse as a number.
    Malformed(String),
}

impl CellNumber {
    /// Collapses to the value the legacy data path stores: absent cells and
    /// parse defects both become `0.0`.
    pub fn or_zero(&self) -> f64 {
        match self {
            CellNumber::Value(v) => *v,
            CellNumber::Absent | CellNumber::Malformed(_) => 0.0,
        }
    }
}

/// Reads a cell as an f64, classifying what it found.
///
/// Date-formatted cells are numeric at the storage level and yield their
/// serial value. Text is trimmed before parsing; whitespace-only text counts
/// as empty, any other unparseable text is a defect.
pub fn coerce_cell(cell: &Data) -> CellNumber {
    match cell {
        Data::Float(f) => CellNumber::Value(*f),
        Data::Int(i) => CellNumber::Value(*i as f64),
        Data::DateTime(dt) => CellNumber::Value(dt.as_f64()),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellNumber::Absent
            } else {
                match trimmed.parse::<f64>() {
                    Ok(v) => CellNumber::Value(v),
                    Err(_) => CellNumber::Malformed(s.clone()),
                }
            }
        }
        _ => CellNumber::Absent,
    }
}

/// Row span of one logical table within a physical worksheet, 0-based.
///
/// `end` is exclusive; `None` reads to the end of the sheet. The row at
/// `start` is a header line and is never copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub start: usize,
    pub end: Option<usize>,
}

impl RowWindow {
    pub const fn new(start: usize, end: Option<usize>) -> Self {
        RowWindow { start, end }
    }

    /// Window from `start` to the end of the sheet.
    pub const fn to_end(start: usize) -> Self {
        RowWindow { start, end: None }
    }
}

/// Copies a windowed block of worksheet rows into a fixed-shape table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetImporter {
    strict: bool,
}

impl SheetImporter {
    pub fn new() -> Self {
        SheetImporter { strict: false }
    }

    /// Strict importers reject malformed text cells instead of storing `0.0`.
    pub fn with_strict(strict: bool) -> Self {
        SheetImporter { strict }
    }

    /// Fills `table` from `range` according to `window`.
    ///
    /// The row after `window.start` is the first data row and lands in table
    /// row 0. Reading stops at the window end, the end of the sheet, or once
    /// the table is full, whichever comes first. Absent cells leave the table
    /// at its `0.0` default; rows with no cells at all do not shift later rows.
    pub fn fill_table(
        &self,
        range: &Range<Data>,
        window: RowWindow,
        table: &mut Table,
    ) -> Result<(), ImportError> {
        let height = range.height();
        let end = match window.end {
            Some(end) if end <= height => end,
            _ => height,
        };

        let mut copied = 0usize;
        for row in (window.start + 1)..end {
            let dest = row - window.start - 1;
            if dest >= table.rows() {
                break;
            }

            for col in 0..table.cols() {
                let Some(cell) = range.get((row, col)) else {
                    continue;
                };
                match coerce_cell(cell) {
                    CellNumber::Value(v) => table.set(dest, col, v),
                    CellNumber::Absent => {}
                    CellNumber::Malformed(content) => {
                        if self.strict {
                            return Err(ImportError::MalformedCell { row, col, content });
                        }
                        debug!(row, col, cell = %content, "unparseable text cell stored as 0.0");
                        table.set(dest, col, 0.0);
                    }
                }
            }
            copied += 1;
        }

        debug!(rows = copied, "copied worksheet rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_pass_through() {
        assert_eq!(coerce_cell(&Data::Float(3.14)), CellNumber::Value(3.14));
        assert_eq!(coerce_cell(&Data::Int(7)), CellNumber::Value(7.0));
    }

    #[test]
    fn text_cells_are_parsed() {
        assert_eq!(
            coerce_cell(&Data::String("2.5".to_string())),
            CellNumber::Value(2.5)
        );
        assert_eq!(
            coerce_cell(&Data::String("  6.5  ".to_string())),
            CellNumber::Value(6.5)
        );
        assert_eq!(
            coerce_cell(&Data::String("7.25e-3".to_string())),
            CellNumber::Value(7.25e-3)
        );
    }

    #[test]
    fn unparseable_text_is_a_defect() {
        assert_eq!(
            coerce_cell(&Data::String("abc".to_string())),
            CellNumber::Malformed("abc".to_string())
        );
        assert_eq!(coerce_cell(&Data::String("abc".to_string())).or_zero(), 0.0);
    }

    #[test]
    fn empty_and_non_numeric_cells_are_absent() {
        assert_eq!(coerce_cell(&Data::Empty), CellNumber::Absent);
        assert_eq!(coerce_cell(&Data::Bool(true)), CellNumber::Absent);
        assert_eq!(coerce_cell(&Data::String("   ".to_string())), CellNumber::Absent);
    }
}
