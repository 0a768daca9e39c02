//! Text format for time series.
//!
//! A line holds semicolon-separated tuples of comma-separated integer
//! coordinates, e.g. `64,25;42,55;37,21`. Each tuple becomes one [`Point`].
//!
//! Blank tuples (a trailing `;`, an empty line) are skipped, so a degenerate
//! line parses to an empty sequence; whether that is acceptable is the
//! caller's decision.

use crate::error::{DfdError, Result};
use crate::point::Point;

pub const TUPLE_SEPARATOR: char = ';';
pub const COORD_SEPARATOR: char = ',';

/// How to treat coordinate tokens that are not integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Coerce the token to `0` and keep going.
    #[default]
    Lenient,
    /// Fail with [`DfdError::UnparsableCoordinate`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceParser {
    mode: ParseMode,
}

impl SequenceParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parse one line into an ordered sequence of points.
    ///
    /// # Errors
    /// Only in [`ParseMode::Strict`], when a coordinate is not an integer.
    pub fn parse(&self, line: &str) -> Result<Vec<Point>> {
        line.split(TUPLE_SEPARATOR)
            .filter(|tuple| !tuple.trim().is_empty())
            .enumerate()
            .map(|(tuple_idx, tuple)| self.parse_tuple(tuple_idx, tuple))
            .collect()
    }

    fn parse_tuple(&self, tuple_idx: usize, tuple: &str) -> Result<Point> {
        let coords = tuple
            .split(COORD_SEPARATOR)
            .enumerate()
            .map(|(position, token)| self.parse_coord(tuple_idx, position, token))
            .collect::<Result<Vec<i64>>>()?;
        // split always yields at least one token
        Ok(Point::new(coords))
    }

    fn parse_coord(&self, tuple: usize, position: usize, token: &str) -> Result<i64> {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(v) => Ok(v),
            Err(_) => match self.mode {
                ParseMode::Lenient => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(tuple, position, token, "coercing unparsable coordinate to 0");
                    Ok(0)
                }
                ParseMode::Strict => Err(DfdError::UnparsableCoordinate {
                    tuple,
                    position,
                    token: token.to_string(),
                }),
            },
        }
    }
}
