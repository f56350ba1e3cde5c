//! sumcheck core library
//!
//! Sums the integers `1..=N` with a running accumulator and checks the
//! result against the closed form `N(N+1)/2`.
//!
//! # Example
//!
//! ```rust
//! use sumcheck_core::{CheckConfig, run_check};
//!
//! let outcome = run_check(&CheckConfig::default()).unwrap();
//! assert_eq!(outcome.sum, 50_000_005_000_000);
//! assert!(outcome.verdict.is_correct());
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod report;
pub mod verdict;

pub use accumulator::{Accumulator, MAX_BOUND, closed_form, sum_to};
pub use config::{CheckConfig, DEFAULT_BOUND, DEFAULT_EXPECTED};
pub use error::SumError;
pub use report::{Outcome, write_report};
pub use verdict::Verdict;

use std::time::Instant;
use tracing::debug;

/// Run the summation described by `config` and judge it
///
/// The elapsed time is always measured; whether it is printed is up to
/// the caller (see [`CheckConfig::timing`]).
pub fn run_check(config: &CheckConfig) -> Result<Outcome, SumError> {
    let expected = config.expected_value()?;
    debug!(bound = config.bound, expected, "starting summation");

    let start = Instant::now();
    let sum = sum_to(config.bound)?;
    let elapsed = start.elapsed();

    let verdict = Verdict::judge(sum, expected);
    debug!(sum, ?verdict, ?elapsed, "summation finished");

    Ok(Outcome {
        sum,
        verdict,
        elapsed: config.timing.then_some(elapsed),
    })
}
