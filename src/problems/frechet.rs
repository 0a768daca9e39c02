//! Discrete Fréchet distance as a coupling problem.
//!
//! Rows index curve P, columns index curve Q, and the link cost of `(i, j)`
//! is the Euclidean distance between `P[i]` and `Q[j]`. Construction
//! validates both curves so the engine never sees an empty grid or a pair of
//! points it cannot measure.

use crate::error::{DfdError, Result, SequenceLabel};
use crate::point::{check_dimensions, Point};
use crate::traits::CouplingProblem;

#[derive(Clone, Debug)]
pub struct FrechetProblem<'a> {
    p: &'a [Point],
    q: &'a [Point],
}

impl<'a> FrechetProblem<'a> {
    /// Validate the two curves and wrap them as a grid problem.
    ///
    /// # Errors
    /// - [`DfdError::EmptySequence`] if either curve has no points.
    /// - [`DfdError::DimensionMismatch`] if any point differs in
    ///   dimensionality from `P[0]`.
    pub fn new(p: &'a [Point], q: &'a [Point]) -> Result<Self> {
        let first = p.first().ok_or(DfdError::EmptySequence {
            which: SequenceLabel::P,
        })?;
        if q.is_empty() {
            return Err(DfdError::EmptySequence {
                which: SequenceLabel::Q,
            });
        }
        let dims = first.dimensions();
        check_dimensions(p, dims, SequenceLabel::P)?;
        check_dimensions(q, dims, SequenceLabel::Q)?;
        Ok(Self { p, q })
    }

    /// Dimensionality shared by every point of both curves.
    pub fn dimensions(&self) -> usize {
        self.p[0].dimensions()
    }
}

impl CouplingProblem for FrechetProblem<'_> {
    fn shape(&self) -> (usize, usize) {
        (self.p.len(), self.q.len())
    }

    #[inline]
    fn link_cost(&self, i: usize, j: usize) -> f64 {
        self.p[i].distance(&self.q[j])
    }
}
