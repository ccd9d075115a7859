//! Truth-level module - signal counts and the verdict derived from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-family pattern hit counts for one headline
///
/// Each count is the number of distinct patterns in the family that matched,
/// not the number of occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalCounts {
    /// Patterns suggesting a verifiable fact (announcements, funding, studies)
    pub verifiable: usize,
    /// Patterns suggesting speculation or prediction
    pub speculative: usize,
    /// Patterns suggesting an extreme or unlikely claim
    pub extreme: usize,
}

impl SignalCounts {
    /// Create a new set of counts
    pub fn new(verifiable: usize, speculative: usize, extreme: usize) -> Self {
        Self {
            verifiable,
            speculative,
            extreme,
        }
    }
}

/// Categorical verdict on how a headline reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthLevel {
    /// Two or more extreme-claim patterns
    ExtremeClaim,
    /// Extreme claim from an untrusted source
    LikelyFalse,
    /// Extreme claim from a trusted source
    ShockingButTrue,
    /// More speculative than verifiable signals
    Speculation,
    /// Verifiable signals dominate
    LikelyTrue,
    /// Nothing conclusive
    Uncertain,
}

impl TruthLevel {
    /// Get the verdict name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TruthLevel::ExtremeClaim => "EXTREME_CLAIM",
            TruthLevel::LikelyFalse => "LIKELY_FALSE",
            TruthLevel::ShockingButTrue => "SHOCKING_BUT_TRUE",
            TruthLevel::Speculation => "SPECULATION",
            TruthLevel::LikelyTrue => "LIKELY_TRUE",
            TruthLevel::Uncertain => "UNCERTAIN",
        }
    }
}

impl fmt::Display for TruthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts_are_zero() {
        assert_eq!(SignalCounts::default(), SignalCounts::new(0, 0, 0));
    }

    #[test]
    fn test_truth_level_names() {
        assert_eq!(TruthLevel::ShockingButTrue.to_string(), "SHOCKING_BUT_TRUE");
        let json = serde_json::to_string(&TruthLevel::LikelyFalse).unwrap();
        assert_eq!(json, "\"LIKELY_FALSE\"");
    }
}
