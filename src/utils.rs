//! Assorted utilities and helpers.

use crate::engine::Strategy;

/// Grids above this many cells are evaluated in linear space instead of
/// allocating a full memo table (16 bytes per cell).
pub const MAX_TABLE_CELLS: usize = 1 << 26;

/// Smallest grid side for which anti-diagonal parallelism pays off.
pub const PARALLEL_MIN_SIDE: usize = 512;

/// Pick an evaluation strategy for a `rows × cols` grid.
///
/// This is the heuristic used by [`crate::engine::FrechetEngine::new`]:
/// row-major by default, anti-diagonal when the `parallel` feature is on and
/// both sides are long, linear space once the table would not fit.
#[inline]
pub fn default_strategy(rows: usize, cols: usize) -> Strategy {
    let cells = rows.saturating_mul(cols);
    if cells > MAX_TABLE_CELLS {
        Strategy::LinearSpace
    } else if cfg!(feature = "parallel") && rows.min(cols) >= PARALLEL_MIN_SIDE {
        Strategy::AntiDiagonal
    } else {
        Strategy::BottomUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grids_fill_row_major() {
        assert_eq!(default_strategy(1, 1), Strategy::BottomUp);
        assert_eq!(default_strategy(0, 10), Strategy::BottomUp);
        assert_eq!(default_strategy(100, 3), Strategy::BottomUp);
    }

    #[test]
    fn huge_grids_drop_the_table() {
        assert_eq!(default_strategy(1 << 14, 1 << 13), Strategy::LinearSpace);
        assert_eq!(default_strategy(usize::MAX, 2), Strategy::LinearSpace);
    }

    #[test]
    fn long_square_grids_depend_on_feature() {
        let expected = if cfg!(feature = "parallel") {
            Strategy::AntiDiagonal
        } else {
            Strategy::BottomUp
        };
        assert_eq!(default_strategy(1024, 1024), expected);
        // one short side never goes parallel
        assert_eq!(default_strategy(1024, 8), Strategy::BottomUp);
    }
}
