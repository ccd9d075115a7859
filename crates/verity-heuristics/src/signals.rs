//! Title signal extraction

use crate::config::SignalPatterns;
use crate::patterns::PatternSet;
use crate::HeuristicsError;
use verity_domain::SignalCounts;

/// Counts verifiable, speculative and extreme signals in a headline
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    verifiable: PatternSet,
    speculative: PatternSet,
    extreme: PatternSet,
}

impl SignalExtractor {
    /// Compile the three pattern families
    pub fn new(patterns: &SignalPatterns) -> Result<Self, HeuristicsError> {
        Ok(Self {
            verifiable: PatternSet::compile(&patterns.verifiable)?,
            speculative: PatternSet::compile(&patterns.speculative)?,
            extreme: PatternSet::compile(&patterns.extreme)?,
        })
    }

    /// Count distinct matching patterns per family
    pub fn extract(&self, title: &str) -> SignalCounts {
        SignalCounts {
            verifiable: self.verifiable.count_matches(title),
            speculative: self.speculative.count_matches(title),
            extreme: self.extreme.count_matches(title),
        }
    }
}
