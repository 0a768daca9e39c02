//! Discrete Fréchet Distance (DFD) between point sequences.
//!
//! The DFD is the shortest "leash" that lets two walkers traverse two
//! polygonal curves in order, each either waiting or stepping forward, while
//! staying connected. It is robust to differences in sampling rate and speed.
//!
//! ## Core idea
//! 1. Parse each curve from a line like `64,25;42,55;37,21` ([`parser`]).
//! 2. Wrap the two curves as a [`problems::frechet::FrechetProblem`], an
//!    instance of the [`CouplingProblem`] grid recurrence.
//! 3. Let [`FrechetEngine`] fill the `n × m` memo table and read the answer
//!    at its terminal cell, optionally reconstructing the optimal coupling.
//!
//! ## Quick start
//! ```
//! use frechet_dp::{frechet_from_lines, ParseMode};
//!
//! let outcome = frechet_from_lines("0,0;1,1", "0,0;1,1", ParseMode::Lenient).unwrap();
//! assert_eq!(outcome.distance, 0.0);
//! assert_eq!(outcome.coupling(), Some(vec![(0, 0), (1, 1)]));
//! ```
//!
//! ## Features
//! - `tracing` (default): spans and events around parsing and evaluation.
//! - `parallel`: evaluate anti-diagonals of the grid with rayon.

pub mod builder;
pub mod engine;
pub mod error;
pub mod parser;
pub mod point;
pub mod problems;
pub mod shell;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::FrechetEngineBuilder;
pub use crate::engine::{optimal_coupling, FrechetEngine, FrechetOutcome, Strategy};
pub use crate::error::{DfdError, ErrorKind, Result, SequenceLabel};
pub use crate::parser::{ParseMode, SequenceParser};
pub use crate::point::{euclidean, Point};
pub use crate::table::MemoTable;
pub use crate::traits::CouplingProblem;

use crate::problems::frechet::FrechetProblem;

/// Discrete Fréchet distance between two curves.
///
/// # Errors
/// - [`DfdError::EmptySequence`] if either curve is empty.
/// - [`DfdError::DimensionMismatch`] if the points do not share one
///   dimensionality.
pub fn discrete_frechet(p: &[Point], q: &[Point]) -> Result<f64> {
    let problem = FrechetProblem::new(p, q)?;
    Ok(FrechetEngine::new(problem).run()?.distance)
}

/// Parse the two input lines, rejecting any that yields no tuples.
///
/// # Errors
/// [`DfdError::MalformedInput`] for an empty or degenerate line, plus any
/// error from the parser in strict mode.
pub fn parse_pair(p_line: &str, q_line: &str, mode: ParseMode) -> Result<(Vec<Point>, Vec<Point>)> {
    let parser = SequenceParser::new(mode);
    let p = parser.parse(p_line)?;
    if p.is_empty() {
        return Err(DfdError::MalformedInput {
            which: SequenceLabel::P,
        });
    }
    let q = parser.parse(q_line)?;
    if q.is_empty() {
        return Err(DfdError::MalformedInput {
            which: SequenceLabel::Q,
        });
    }
    Ok((p, q))
}

/// Parse two raw lines and evaluate their distance with the default engine.
pub fn frechet_from_lines(p_line: &str, q_line: &str, mode: ParseMode) -> Result<FrechetOutcome> {
    let (p, q) = parse_pair(p_line, q_line, mode)?;
    let problem = FrechetProblem::new(&p, &q)?;
    FrechetEngine::new(problem).run()
}
