//! Error taxonomy for parsing and distance evaluation.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DfdError>;

/// Which of the two input curves an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceLabel {
    P,
    Q,
}

impl fmt::Display for SequenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceLabel::P => f.write_str("P"),
            SequenceLabel::Q => f.write_str("Q"),
        }
    }
}

/// Coarse classification used by callers to decide how to report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The raw text could not be turned into a usable sequence; show usage.
    MalformedInput,
    /// The parsed data is unusable for the recurrence.
    InvalidInput,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DfdError {
    /// An input line was empty or produced zero tuples.
    #[error("time series {which} is empty or has no tuples")]
    MalformedInput { which: SequenceLabel },

    /// A coordinate token is not an integer (strict parsing only).
    #[error("tuple {tuple}, coordinate {position}: '{token}' is not an integer")]
    UnparsableCoordinate {
        tuple: usize,
        position: usize,
        token: String,
    },

    /// Points do not share a single dimensionality.
    #[error(
        "dimension mismatch in {sequence} at point {index}: expected {expected}, found {found}"
    )]
    DimensionMismatch {
        expected: usize,
        found: usize,
        sequence: SequenceLabel,
        index: usize,
    },

    /// Two standalone points were compared across different dimensionalities.
    #[error("points have different dimensions: {left} vs {right}")]
    IncompatiblePoints { left: usize, right: usize },

    /// The engine was handed a sequence with no points.
    #[error("time series {which} has no points")]
    EmptySequence { which: SequenceLabel },
}

impl DfdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DfdError::MalformedInput { .. } | DfdError::UnparsableCoordinate { .. } => {
                ErrorKind::MalformedInput
            }
            DfdError::DimensionMismatch { .. }
            | DfdError::IncompatiblePoints { .. }
            | DfdError::EmptySequence { .. } => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_parse_and_engine_errors() {
        let malformed = DfdError::MalformedInput {
            which: SequenceLabel::Q,
        };
        assert_eq!(malformed.kind(), ErrorKind::MalformedInput);
        let empty = DfdError::EmptySequence {
            which: SequenceLabel::P,
        };
        assert_eq!(empty.kind(), ErrorKind::InvalidInput);
        let pair = DfdError::IncompatiblePoints { left: 3, right: 2 };
        assert_eq!(pair.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn messages_name_the_sequence() {
        let err = DfdError::DimensionMismatch {
            expected: 2,
            found: 3,
            sequence: SequenceLabel::Q,
            index: 4,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch in Q at point 4: expected 2, found 3"
        );
    }

    #[test]
    fn point_pair_message_has_no_sequence_context() {
        let err = DfdError::IncompatiblePoints { left: 3, right: 2 };
        assert_eq!(err.to_string(), "points have different dimensions: 3 vs 2");
    }
}
