//! Memo table for the coupling recurrence.
//!
//! A dense row-major `rows × cols` grid. Every cell starts unset and may be
//! filled exactly once.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<f64>>,
}

impl MemoTable {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols, "cell ({i},{j}) out of bounds");
        i * self.cols + j
    }

    /// Value of cell `(i, j)`, or `None` while it is unset.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[self.index(i, j)]
    }

    #[inline]
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some()
    }

    /// Fill cell `(i, j)`.
    ///
    /// # Panics
    /// In debug builds, panics if the cell was already set.
    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        debug_assert!(self.cells[idx].is_none(), "cell ({i},{j}) set twice");
        self.cells[idx] = Some(value);
    }

    /// Number of cells that hold a value.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// One row of the grid.
    pub fn row(&self, i: usize) -> &[Option<f64>] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Value at the terminal cell `(rows-1, cols-1)`.
    pub fn terminal(&self) -> Option<f64> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Debug dump: one grid row per line, unset cells as `-`.
impl fmt::Display for MemoTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, cell) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(v) => write!(f, "{v:>9.4}")?,
                    None => write!(f, "{:>9}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoTable;

    #[test]
    fn starts_unset() {
        let t = MemoTable::new(2, 3);
        assert_eq!(t.filled(), 0);
        assert!(!t.is_complete());
        assert_eq!(t.terminal(), None);
    }

    #[test]
    fn set_is_row_major() {
        let mut t = MemoTable::new(2, 3);
        t.set(1, 0, 4.0);
        assert_eq!(t.row(1), &[Some(4.0), None, None]);
        assert_eq!(t.row(0), &[None, None, None]);
        t.set(1, 2, 7.5);
        assert_eq!(t.terminal(), Some(7.5));
        assert_eq!(t.filled(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "set twice")]
    fn double_set_panics_in_debug() {
        let mut t = MemoTable::new(1, 1);
        t.set(0, 0, 1.0);
        t.set(0, 0, 1.0);
    }

    #[test]
    fn zero_sized_has_no_terminal() {
        let t = MemoTable::new(0, 4);
        assert_eq!(t.terminal(), None);
        assert!(t.is_complete());
    }

    #[test]
    fn dump_marks_unset_cells() {
        let mut t = MemoTable::new(1, 2);
        t.set(0, 0, 5.0);
        let dump = t.to_string();
        assert_eq!(dump, "   5.0000         -\n");
    }
}
