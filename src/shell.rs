//! Interactive shell around the engine.
//!
//! A [`Session`] prompts for the two curves on its writer, reads one line
//! each from its reader, and prints either the distance with the elapsed
//! computation time or a usage message. It holds no state between runs.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use thiserror::Error;

use crate::engine::{FrechetOutcome, Strategy};
use crate::error::{DfdError, ErrorKind};
use crate::parser::ParseMode;
use crate::problems::frechet::FrechetProblem;
use crate::{parse_pair, FrechetEngineBuilder};

pub const EXAMPLE_P: &str = "64,25;42,55;37,21";
pub const EXAMPLE_Q: &str = "61,32;48,50;35,25";

pub const USAGE: &str = "\
Usage: enter two time series, one per line.
Each time series is a list of points separated by ';',
each point a list of integer coordinates separated by ','.

Example:
  P: 64,25;42,55;37,21
  Q: 61,32;48,50;35,25
";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] DfdError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    pub mode: ParseMode,
    /// Overrides the engine's size-based default.
    pub strategy: Option<Strategy>,
    /// Dump the memo table and the optimal coupling after the result.
    pub debug: bool,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Release the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one prompt/compute/report cycle and return the distance.
    ///
    /// Input errors are reported on the writer before being returned.
    pub fn run(&mut self) -> Result<f64, ShellError> {
        let p_line = self.prompt("Enter time series P: ")?;
        let q_line = self.prompt("Enter time series Q: ")?;

        match self.compute(&p_line, &q_line) {
            Ok((outcome, elapsed_ms)) => {
                writeln!(self.output, "Discrete Fréchet distance: {:.4}", outcome.distance)?;
                writeln!(self.output, "Computed in {elapsed_ms:.3} ms")?;
                if self.options.debug {
                    self.dump(&outcome)?;
                }
                Ok(outcome.distance)
            }
            Err(err) => {
                match err.kind() {
                    ErrorKind::MalformedInput => {
                        writeln!(self.output, "error: {err}")?;
                        write!(self.output, "{USAGE}")?;
                    }
                    ErrorKind::InvalidInput => writeln!(self.output, "error: {err}")?,
                }
                Err(err.into())
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        // EOF leaves the line empty, which parses as malformed input
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn compute(&self, p_line: &str, q_line: &str) -> Result<(FrechetOutcome, f64), DfdError> {
        let (p, q) = parse_pair(p_line, q_line, self.options.mode)?;
        let problem = FrechetProblem::new(&p, &q)?;
        let mut builder = FrechetEngineBuilder::new(problem);
        if let Some(strategy) = self.options.strategy {
            builder = builder.with_strategy(strategy);
        }
        if self.options.debug {
            builder = builder.retain_table();
        }
        let engine = builder.build();

        let start = Instant::now();
        let outcome = engine.run()?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        Ok((outcome, elapsed_ms))
    }

    fn dump(&mut self, outcome: &FrechetOutcome) -> io::Result<()> {
        let Some(table) = &outcome.table else {
            return writeln!(self.output, "Memo table not retained");
        };
        writeln!(self.output, "Memo table ({}x{}):", table.rows(), table.cols())?;
        write!(self.output, "{table}")?;
        if let Some(path) = outcome.coupling() {
            let cells: Vec<String> = path.iter().map(|(i, j)| format!("({i},{j})")).collect();
            writeln!(self.output, "Coupling: {}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SequenceParser;

    #[test]
    fn usage_examples_parse() {
        let parser = SequenceParser::default();
        assert_eq!(parser.parse(EXAMPLE_P).unwrap().len(), 3);
        assert_eq!(parser.parse(EXAMPLE_Q).unwrap().len(), 3);
        assert!(USAGE.contains(EXAMPLE_P));
        assert!(USAGE.contains(EXAMPLE_Q));
    }
}
