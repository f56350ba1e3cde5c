//! Text report for a finished check
//!
//! Output format, one item per line:
//!
//! ```text
//! 50000005000000
//! Correct!
//! ```
//!
//! or, on mismatch:
//!
//! ```text
//! 49999995000000
//! Wrong answer: 49999995000000
//! Expected: 50000005000000
//! ```
//!
//! followed by `Elapsed time: <secs>s` when timing was requested.

use crate::verdict::Verdict;
use std::io::{self, Write};
use std::time::Duration;

/// Result of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Computed sum
    pub sum: i64,
    pub verdict: Verdict,
    /// Wall time of the summation, present only when timing was requested
    pub elapsed: Option<Duration>,
}

pub fn write_report<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{}", outcome.sum)?;

    match outcome.verdict {
        Verdict::Correct => writeln!(out, "Correct!")?,
        Verdict::Mismatch { actual, expected } => {
            writeln!(out, "Wrong answer: {}", actual)?;
            writeln!(out, "Expected: {}", expected)?;
        }
    }

    if let Some(elapsed) = outcome.elapsed {
        writeln!(out, "Elapsed time: {:.3}s", elapsed.as_secs_f64())?;
    }
    Ok(())
}
