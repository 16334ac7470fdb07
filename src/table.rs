use std::io::{self, Write};

use serde::Serialize;

/// Fixed-shape rectangular numeric table, row-major.
///
/// The shape is set at construction and never changes. Cells that no source
/// row populates keep their default of `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Table {
    /// Creates a zero-filled `rows` x `cols` table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Table {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col), or `None` outside the table bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col] = value;
    }

    /// One row as a slice, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.values[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.cols)
    }

    /// Writes the table row-by-row, tab-separated, one row per line.
    ///
    /// Meant for manual inspection, not a committed file format.
    pub fn write_tsv<W: Write>(&self, mut out: W) -> io::Result<()> {
        for row in self.iter_rows() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(out, "\t")?;
                }
                write!(out, "{value}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_zero_filled() {
        let table = Table::new(3, 2);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 2);
        for r in 0..3 {
            for c in 0..2 {
                assert_eq!(table.get(r, c), Some(0.0));
            }
        }
    }

    #[test]
    fn get_outside_bounds_is_none() {
        let table = Table::new(2, 2);
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut table = Table::new(2, 3);
        table.set(1, 2, 42.5);
        assert_eq!(table.get(1, 2), Some(42.5));
        assert_eq!(table.row(1), Some(&[0.0, 0.0, 42.5][..]));
    }

    #[test]
    fn tsv_dump_is_tab_separated() {
        let mut table = Table::new(2, 2);
        table.set(0, 0, 1.0);
        table.set(0, 1, 2.5);
        table.set(1, 0, 3.0);

        let mut buf = Vec::new();
        table.write_tsv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\t2.5\n3\t0\n");
    }
}
