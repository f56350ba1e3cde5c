//! Error type for summation and config loading

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// The sum of `1..=bound` does not fit in an `i64`
    Overflow { bound: u64 },
    /// A single `Accumulator::add` would leave the `i64` range
    AddOverflow { total: i64, term: i64 },
    /// A config file could not be read or parsed
    Config(String),
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumError::Overflow { bound } => write!(
                f,
                "sum of 1..={} overflows a 64-bit signed integer (max bound is {})",
                bound,
                crate::MAX_BOUND
            ),
            SumError::AddOverflow { total, term } => write!(
                f,
                "adding {} to running total {} overflows a 64-bit signed integer",
                term, total
            ),
            SumError::Config(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SumError {}
