//! Comparison of the computed sum against the expected value

/// Outcome of checking a computed sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Mismatch { actual: i64, expected: i64 },
}

impl Verdict {
    pub fn judge(actual: i64, expected: i64) -> Self {
        if actual == expected {
            Verdict::Correct
        } else {
            Verdict::Mismatch { actual, expected }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_are_correct() {
        assert_eq!(Verdict::judge(5050, 5050), Verdict::Correct);
        assert!(Verdict::judge(0, 0).is_correct());
    }

    #[test]
    fn test_different_values_keep_both_sides() {
        let verdict = Verdict::judge(49_999_995_000_000, 50_000_005_000_000);
        assert!(!verdict.is_correct());
        assert_eq!(
            verdict,
            Verdict::Mismatch {
                actual: 49_999_995_000_000,
                expected: 50_000_005_000_000,
            }
        );
    }
}
