//! Check configuration
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, a TOML file, then the built-in defaults. The defaults reproduce
//! the reference run: sum `1..=10_000_000` and expect `50_000_005_000_000`.
//!
//! ```toml
//! bound = 10000000
//! expected = 50000005000000
//! strict = false
//! timing = false
//! ```

use crate::accumulator::closed_form;
use crate::error::SumError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default upper bound of the summation
pub const DEFAULT_BOUND: u64 = 10_000_000;

/// `DEFAULT_BOUND * (DEFAULT_BOUND + 1) / 2`
pub const DEFAULT_EXPECTED: i64 = 50_000_005_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Upper bound N, inclusive
    pub bound: u64,
    /// Value the sum is checked against; the closed form of `bound` when unset
    pub expected: Option<i64>,
    /// Exit non-zero on mismatch
    pub strict: bool,
    /// Report elapsed time after the verdict
    pub timing: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            bound: DEFAULT_BOUND,
            expected: None,
            strict: false,
            timing: false,
        }
    }
}

impl CheckConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SumError> {
        toml::from_str(toml_str)
            .map_err(|e| SumError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self, SumError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SumError::Config(format!("Error reading config {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content)
    }

    /// The value the computed sum must equal
    pub fn expected_value(&self) -> Result<i64, SumError> {
        match self.expected {
            Some(expected) => Ok(expected),
            None => closed_form(self.bound),
        }
    }
}
