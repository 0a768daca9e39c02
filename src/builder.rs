use crate::engine::Strategy;
use crate::utils::default_strategy;
use crate::{CouplingProblem, FrechetEngine};

pub struct FrechetEngineBuilder<P: CouplingProblem> {
    problem: P,
    strategy: Option<Strategy>,
}

impl<P: CouplingProblem> FrechetEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            strategy: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    /// Keep the memo table even if the default heuristic would drop it.
    pub fn retain_table(mut self) -> Self {
        let (rows, cols) = self.problem.shape();
        let strategy = self.strategy.unwrap_or_else(|| default_strategy(rows, cols));
        if !strategy.retains_table() {
            self.strategy = Some(Strategy::BottomUp);
        }
        self
    }
    pub fn build(self) -> FrechetEngine<P> {
        match self.strategy {
            Some(s) => FrechetEngine::with_strategy(self.problem, s),
            None => FrechetEngine::new(self.problem),
        }
    }
}
