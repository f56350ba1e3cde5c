//! Running-sum accumulator and the closed form it is checked against
//!
//! The accumulator adds `1..=N` one term at a time into an `i64`. Every
//! addition is checked, so a bound whose sum would leave the `i64` range
//! is reported as [`SumError::Overflow`] instead of wrapping.

use crate::error::SumError;

/// Largest bound whose sum `N(N+1)/2` still fits in an `i64`
///
/// `4_294_967_295 * 4_294_967_296 / 2 = 2^63 - 2^31`.
pub const MAX_BOUND: u64 = 4_294_967_295;

/// Running total across loop iterations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    total: i64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term to the running total
    ///
    /// On overflow the total is left unchanged.
    pub fn add(&mut self, term: i64) -> Result<(), SumError> {
        self.total = self
            .total
            .checked_add(term)
            .ok_or(SumError::AddOverflow {
                total: self.total,
                term,
            })?;
        Ok(())
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// Sum the integers `1..=n` by iteration
///
/// `n = 0` yields 0.
pub fn sum_to(n: u64) -> Result<i64, SumError> {
    if n > MAX_BOUND {
        return Err(SumError::Overflow { bound: n });
    }

    let mut acc = Accumulator::new();
    // n <= MAX_BOUND < i64::MAX, so every term converts losslessly
    for i in 1..=n as i64 {
        acc.add(i).map_err(|_| SumError::Overflow { bound: n })?;
    }
    Ok(acc.total())
}

/// `n(n+1)/2`, computed without iterating
pub fn closed_form(n: u64) -> Result<i64, SumError> {
    let wide = n as u128 * (n as u128 + 1) / 2;
    i64::try_from(wide).map_err(|_| SumError::Overflow { bound: n })
}
