//! Core trait for bottleneck coupling problems on a 2-D grid.
//!
//! The engine evaluates the min-max recurrence
//!
//! ```text
//! v(0,0) = c(0,0)
//! v(i,0) = max(v(i-1,0), c(i,0))
//! v(0,j) = max(v(0,j-1), c(0,j))
//! v(i,j) = max(min(v(i-1,j), v(i-1,j-1), v(i,j-1)), c(i,j))
//! ```
//!
//! over an `rows × cols` grid. A problem only has to say how large the grid is
//! and what the link cost `c(i,j)` of pairing row `i` with column `j` is; the
//! engine owns the memo table, the evaluation order and the coupling
//! reconstruction.

/// A fixed instance of a coupling problem.
///
/// Implementations must be pure: `link_cost(i, j)` has to return the same
/// value every time it is called, and must be non-negative and not NaN for
/// every in-bounds cell. Both dimensions reported by [`shape`](Self::shape)
/// are at least 1 once the problem has been constructed.
pub trait CouplingProblem {
    /// Grid dimensions `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// Cost of linking row `i` with column `j`.
    ///
    /// Only called with `i < rows` and `j < cols`.
    fn link_cost(&self, i: usize, j: usize) -> f64;
}

impl<T: CouplingProblem + ?Sized> CouplingProblem for &T {
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn link_cost(&self, i: usize, j: usize) -> f64 {
        (**self).link_cost(i, j)
    }
}
