//! Points and the Euclidean metric.
//!
//! A [`Point`] is an immutable tuple of integer coordinates. Distances are
//! taken in `f64` over every coordinate, so both operands must share the
//! same dimensionality.

use std::fmt;

use crate::error::{DfdError, Result, SequenceLabel};

/// Immutable point with one or more integer coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    coords: Box<[i64]>,
}

impl Point {
    /// Build a point from its coordinates.
    ///
    /// # Panics
    /// Panics if `coords` is empty; every point has at least one dimension.
    pub fn new(coords: Vec<i64>) -> Self {
        assert!(!coords.is_empty(), "a point needs at least one coordinate");
        Self {
            coords: coords.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Euclidean distance to `other` without a dimensionality check.
    ///
    /// Callers must have validated that both points share one dimensionality;
    /// extra coordinates on either side are otherwise ignored.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| {
                let diff = a as f64 - b as f64;
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(vec![x, y])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (k, c) in self.coords.iter().enumerate() {
            if k > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

/// Checked Euclidean distance between two points.
///
/// # Errors
/// [`DfdError::IncompatiblePoints`] when the dimensionalities differ.
pub fn euclidean(a: &Point, b: &Point) -> Result<f64> {
    if a.dimensions() != b.dimensions() {
        return Err(DfdError::IncompatiblePoints {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(a.distance(b))
}

/// Verify that every point of `seq` has exactly `expected` coordinates.
pub(crate) fn check_dimensions(seq: &[Point], expected: usize, which: SequenceLabel) -> Result<()> {
    match seq
        .iter()
        .enumerate()
        .find(|(_, p)| p.dimensions() != expected)
    {
        Some((index, p)) => Err(DfdError::DimensionMismatch {
            expected,
            found: p.dimensions(),
            sequence: which,
            index,
        }),
        None => Ok(()),
    }
}
