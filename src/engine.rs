//! Generic engine for bottleneck coupling recurrences.
//!
//! The engine evaluates the min-max recurrence documented on
//! [`CouplingProblem`] with one of several [`Strategy`] orders. Every
//! strategy computes each grid cell at most once and produces bit-identical
//! results, because each cell is the same `max`/`min` selection over the same
//! link costs regardless of evaluation order.
//!
//! Cell `(i, j)` depends only on `(i-1, j)`, `(i-1, j-1)` and `(i, j-1)`, so
//! the sum `i + j` strictly decreases along every dependency. That gives a
//! valid order for the row-major fill, makes all cells on one anti-diagonal
//! independent of each other, and guarantees that the demand-driven top-down
//! walk terminates.

use std::fmt;
use std::str::FromStr;

use crate::error::{DfdError, Result, SequenceLabel};
use crate::table::MemoTable;
use crate::traits::CouplingProblem;
use crate::utils::default_strategy;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Order in which the memo table is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Demand-driven memoized evaluation starting at the terminal cell,
    /// driven by an explicit work stack rather than the call stack.
    TopDown,
    /// Row-major iterative fill.
    BottomUp,
    /// Fill one anti-diagonal `i + j = d` at a time; parallel within a
    /// diagonal when the `parallel` feature is enabled.
    AntiDiagonal,
    /// Two rolling rows; `O(cols)` memory and no table in the outcome.
    LinearSpace,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::TopDown,
        Strategy::BottomUp,
        Strategy::AntiDiagonal,
        Strategy::LinearSpace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::TopDown => "top-down",
            Strategy::BottomUp => "bottom-up",
            Strategy::AntiDiagonal => "anti-diagonal",
            Strategy::LinearSpace => "linear-space",
        }
    }

    /// Whether the strategy keeps the full memo table.
    pub fn retains_table(self) -> bool {
        !matches!(self, Strategy::LinearSpace)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.label() == value)
            .ok_or_else(|| {
                format!(
                    "unknown strategy '{value}' (expected top-down, bottom-up, anti-diagonal or linear-space)"
                )
            })
    }
}

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct FrechetOutcome {
    /// Value at the terminal cell `(rows-1, cols-1)`.
    pub distance: f64,
    /// The filled memo table, unless the strategy discards it.
    pub table: Option<MemoTable>,
}

impl FrechetOutcome {
    /// An optimal coupling, if the table was retained.
    pub fn coupling(&self) -> Option<Vec<(usize, usize)>> {
        self.table.as_ref().and_then(optimal_coupling)
    }
}

/// Engine for a given problem instance `P`.
///
/// ```
/// use frechet_dp::{FrechetEngine, Point, problems::frechet::FrechetProblem};
///
/// let p = vec![Point::from((0, 0)), Point::from((1, 1))];
/// let q = vec![Point::from((0, 1)), Point::from((1, 2))];
/// let problem = FrechetProblem::new(&p, &q).unwrap();
/// let outcome = FrechetEngine::new(problem).run().unwrap();
/// assert_eq!(outcome.distance, 1.0);
/// ```
pub struct FrechetEngine<P: CouplingProblem> {
    problem: P,
    strategy: Strategy,
}

impl<P: CouplingProblem> FrechetEngine<P> {
    /// Create an engine with a size-based default strategy.
    pub fn new(problem: P) -> Self {
        let (rows, cols) = problem.shape();
        let strategy = default_strategy(rows, cols);
        Self::with_strategy(problem, strategy)
    }

    pub fn with_strategy(problem: P, strategy: Strategy) -> Self {
        Self { problem, strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Shared driver: validates the grid, then dispatches on the strategy.
    fn execute<F>(&self, fill_anti_diagonals: F) -> Result<FrechetOutcome>
    where
        F: FnOnce(&P, &mut MemoTable),
    {
        let (rows, cols) = self.problem.shape();
        if rows == 0 {
            return Err(DfdError::EmptySequence {
                which: SequenceLabel::P,
            });
        }
        if cols == 0 {
            return Err(DfdError::EmptySequence {
                which: SequenceLabel::Q,
            });
        }

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("frechet_run", rows, cols, strategy = self.strategy.label());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let outcome = match self.strategy {
            Strategy::LinearSpace => FrechetOutcome {
                distance: rolling_rows(&self.problem, rows, cols),
                table: None,
            },
            strategy => {
                let mut table = MemoTable::new(rows, cols);
                {
                    #[cfg(feature = "tracing")]
                    let span = tracing::debug_span!("fill_table");
                    #[cfg(feature = "tracing")]
                    let _enter = span.enter();
                    match strategy {
                        Strategy::TopDown => fill_top_down(&self.problem, &mut table),
                        Strategy::BottomUp => fill_row_major(&self.problem, &mut table),
                        _ => fill_anti_diagonals(&self.problem, &mut table),
                    }
                }
                let distance = table
                    .terminal()
                    .expect("every strategy evaluates the terminal cell");
                FrechetOutcome {
                    distance,
                    table: Some(table),
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(distance = outcome.distance, "coupling distance computed");

        Ok(outcome)
    }
}

#[cfg(feature = "parallel")]
impl<P> FrechetEngine<P>
where
    P: CouplingProblem + Sync,
{
    /// Evaluate the recurrence and return the terminal value, plus the memo
    /// table for strategies that keep it.
    ///
    /// # Errors
    /// [`DfdError::EmptySequence`] if either grid dimension is zero.
    pub fn run(&self) -> Result<FrechetOutcome> {
        self.execute(fill_anti_diagonals_parallel::<P>)
    }
}

#[cfg(not(feature = "parallel"))]
impl<P: CouplingProblem> FrechetEngine<P> {
    /// Evaluate the recurrence and return the terminal value, plus the memo
    /// table for strategies that keep it.
    ///
    /// # Errors
    /// [`DfdError::EmptySequence`] if either grid dimension is zero.
    pub fn run(&self) -> Result<FrechetOutcome> {
        self.execute(fill_anti_diagonals_sequential::<P>)
    }
}

/// In-grid predecessors of `(i, j)`: up, diagonal, left.
#[inline]
fn predecessors(i: usize, j: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = i.checked_sub(1).map(|pi| (pi, j));
    let diag = i.checked_sub(1).zip(j.checked_sub(1));
    let left = j.checked_sub(1).map(|pj| (i, pj));
    [up, diag, left].into_iter().flatten()
}

/// `max(reach, link)`, where `reach` is the best predecessor value and is
/// absent only at the origin.
#[inline]
fn settle(link: f64, reach: Option<f64>) -> f64 {
    match reach {
        Some(r) => r.max(link),
        None => link,
    }
}

/// Value of `(i, j)` given that all of its predecessors are already set.
#[inline]
fn evaluate_cell<P: CouplingProblem>(problem: &P, table: &MemoTable, i: usize, j: usize) -> f64 {
    let reach = predecessors(i, j)
        .map(|(pi, pj)| {
            table
                .get(pi, pj)
                .expect("predecessor evaluated before its successor")
        })
        .reduce(f64::min);
    settle(problem.link_cost(i, j), reach)
}

fn fill_row_major<P: CouplingProblem>(problem: &P, table: &mut MemoTable) {
    for i in 0..table.rows() {
        for j in 0..table.cols() {
            let v = evaluate_cell(problem, table, i, j);
            table.set(i, j, v);
        }
    }
}

fn fill_top_down<P: CouplingProblem>(problem: &P, table: &mut MemoTable) {
    let mut stack = vec![(table.rows() - 1, table.cols() - 1)];
    while let Some(&(i, j)) = stack.last() {
        if table.is_set(i, j) {
            stack.pop();
            continue;
        }
        let pending = stack.len();
        stack.extend(predecessors(i, j).filter(|&(pi, pj)| !table.is_set(pi, pj)));
        if stack.len() == pending {
            let v = evaluate_cell(problem, table, i, j);
            table.set(i, j, v);
            stack.pop();
        }
    }
}

/// Row range `lo..=hi` of anti-diagonal `d` in a `rows × cols` grid.
#[inline]
fn diagonal_rows(d: usize, rows: usize, cols: usize) -> (usize, usize) {
    (d.saturating_sub(cols - 1), d.min(rows - 1))
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn fill_anti_diagonals_sequential<P: CouplingProblem>(problem: &P, table: &mut MemoTable) {
    let (rows, cols) = (table.rows(), table.cols());
    for d in 0..rows + cols - 1 {
        let (lo, hi) = diagonal_rows(d, rows, cols);
        for i in lo..=hi {
            let v = evaluate_cell(problem, table, i, d - i);
            table.set(i, d - i, v);
        }
    }
}

#[cfg(feature = "parallel")]
fn fill_anti_diagonals_parallel<P>(problem: &P, table: &mut MemoTable)
where
    P: CouplingProblem + Sync,
{
    let (rows, cols) = (table.rows(), table.cols());
    for d in 0..rows + cols - 1 {
        let (lo, hi) = diagonal_rows(d, rows, cols);
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("anti_diagonal", d, cells = hi - lo + 1);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        let values: Vec<f64> = {
            let view: &MemoTable = table;
            (lo..=hi)
                .into_par_iter()
                .map(|i| evaluate_cell(problem, view, i, d - i))
                .collect()
        };
        for (i, v) in (lo..=hi).zip(values) {
            table.set(i, d - i, v);
        }
    }
}

fn rolling_rows<P: CouplingProblem>(problem: &P, rows: usize, cols: usize) -> f64 {
    let mut prev = vec![0.0f64; cols];
    let mut curr = vec![0.0f64; cols];
    for i in 0..rows {
        for j in 0..cols {
            let reach = match (i, j) {
                (0, 0) => None,
                (0, _) => Some(curr[j - 1]),
                (_, 0) => Some(prev[0]),
                (_, _) => Some(prev[j].min(prev[j - 1]).min(curr[j - 1])),
            };
            curr[j] = settle(problem.link_cost(i, j), reach);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[cols - 1]
}

/// Reconstruct an optimal coupling from a filled table.
///
/// Walks back from the terminal cell, always stepping to the predecessor
/// with the smallest value (diagonal first on ties). The returned path runs
/// from `(0, 0)` to `(rows-1, cols-1)`, advances each index by at most one per
/// step, and its largest link cost equals the terminal value.
///
/// Returns `None` for an empty table or when a cell on the walk is unset.
pub fn optimal_coupling(table: &MemoTable) -> Option<Vec<(usize, usize)>> {
    if table.rows() == 0 || table.cols() == 0 {
        return None;
    }
    let (mut i, mut j) = (table.rows() - 1, table.cols() - 1);
    table.get(i, j)?;
    let mut rev_path = Vec::with_capacity(table.rows() + table.cols() - 1);
    rev_path.push((i, j));

    while (i, j) != (0, 0) {
        let mut best: Option<((usize, usize), f64)> = None;
        let candidates = [
            i.checked_sub(1).zip(j.checked_sub(1)),
            i.checked_sub(1).map(|pi| (pi, j)),
            j.checked_sub(1).map(|pj| (i, pj)),
        ];
        for cell in candidates.into_iter().flatten() {
            let v = table.get(cell.0, cell.1)?;
            if best.map_or(true, |(_, bv)| v < bv) {
                best = Some((cell, v));
            }
        }
        let ((pi, pj), _) = best?;
        i = pi;
        j = pj;
        rev_path.push((i, j));
    }

    rev_path.reverse();
    Some(rev_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Link cost `|i - j|`.
    struct Banded {
        rows: usize,
        cols: usize,
    }

    impl CouplingProblem for Banded {
        fn shape(&self) -> (usize, usize) {
            (self.rows, self.cols)
        }
        fn link_cost(&self, i: usize, j: usize) -> f64 {
            (i as f64 - j as f64).abs()
        }
    }

    #[test]
    fn predecessors_stay_in_grid() {
        assert_eq!(predecessors(0, 0).count(), 0);
        assert_eq!(predecessors(0, 3).collect::<Vec<_>>(), vec![(0, 2)]);
        assert_eq!(predecessors(2, 0).collect::<Vec<_>>(), vec![(1, 0)]);
        assert_eq!(
            predecessors(2, 3).collect::<Vec<_>>(),
            vec![(1, 3), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn diagonal_rows_cover_grid() {
        let (rows, cols) = (3, 5);
        let mut seen = 0;
        for d in 0..rows + cols - 1 {
            let (lo, hi) = diagonal_rows(d, rows, cols);
            for i in lo..=hi {
                assert!(d - i < cols);
                seen += 1;
            }
        }
        assert_eq!(seen, rows * cols);
    }

    #[test]
    fn square_grid_follows_diagonal() {
        let engine = FrechetEngine::with_strategy(Banded { rows: 4, cols: 4 }, Strategy::BottomUp);
        let outcome = engine.run().unwrap();
        assert_eq!(outcome.distance, 0.0);
        assert_eq!(
            outcome.coupling().unwrap(),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn rectangular_grid_must_stretch() {
        for strategy in Strategy::ALL {
            let engine = FrechetEngine::with_strategy(Banded { rows: 2, cols: 5 }, strategy);
            let outcome = engine.run().unwrap();
            assert_eq!(outcome.distance, 3.0, "strategy {strategy}");
            assert_eq!(outcome.table.is_some(), strategy.retains_table());
        }
    }

    #[test]
    fn every_strategy_fills_the_whole_table() {
        for strategy in Strategy::ALL.into_iter().filter(|s| s.retains_table()) {
            let engine = FrechetEngine::with_strategy(Banded { rows: 3, cols: 7 }, strategy);
            let table = engine.run().unwrap().table.unwrap();
            assert!(table.is_complete(), "strategy {strategy}");
            assert_eq!(table.filled(), 21);
        }
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let engine = FrechetEngine::new(Banded { rows: 0, cols: 3 });
        assert_eq!(
            engine.run().unwrap_err(),
            DfdError::EmptySequence {
                which: SequenceLabel::P
            }
        );
        let engine = FrechetEngine::new(Banded { rows: 3, cols: 0 });
        assert_eq!(
            engine.run().unwrap_err(),
            DfdError::EmptySequence {
                which: SequenceLabel::Q
            }
        );
    }

    #[test]
    fn strategy_labels_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.label().parse::<Strategy>(), Ok(s));
        }
        assert!("sideways".parse::<Strategy>().is_err());
    }

    #[test]
    fn coupling_of_incomplete_table_is_none() {
        let table = MemoTable::new(2, 2);
        assert_eq!(optimal_coupling(&table), None);
        assert_eq!(optimal_coupling(&MemoTable::new(0, 0)), None);
    }
}
