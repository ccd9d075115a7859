//! Sensationalism ("fake-sounding") scoring

use crate::config::SensationalConfig;
use crate::patterns::PatternSet;
use crate::HeuristicsError;
use regex::Regex;

/// Score and evidence for one headline
#[derive(Debug, Clone, PartialEq)]
pub struct SensationalScore {
    /// Total score, never negative
    pub score: f64,
    /// Matched pattern identifiers, in declaration order
    pub patterns: Vec<String>,
}

/// Scores how sensational a headline sounds
///
/// +1 per distinct sensational pattern, plus independent boosts for shock
/// keywords, digits and length. Independent of the source's tier.
#[derive(Debug, Clone)]
pub struct SensationalismScorer {
    patterns: PatternSet,
    shock_keywords: Vec<String>,
    digit: Regex,
    keyword_boost: f64,
    digit_boost: f64,
    length_boost: f64,
    length_threshold: usize,
}

impl SensationalismScorer {
    /// Build a scorer from configuration
    pub fn new(config: &SensationalConfig) -> Result<Self, HeuristicsError> {
        let digit = Regex::new(r"\d").map_err(|e| HeuristicsError::Pattern {
            pattern: r"\d".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            patterns: PatternSet::compile(&config.patterns)?,
            shock_keywords: config.shock_keywords.iter().map(|k| k.to_lowercase()).collect(),
            digit,
            keyword_boost: config.keyword_boost,
            digit_boost: config.digit_boost,
            length_boost: config.length_boost,
            length_threshold: config.length_threshold,
        })
    }

    /// Score a headline
    pub fn score(&self, title: &str) -> SensationalScore {
        let patterns: Vec<String> = self.patterns.matches(title).map(str::to_string).collect();
        let mut score = patterns.len() as f64;

        let lowered = title.to_lowercase();
        if self.shock_keywords.iter().any(|k| lowered.contains(k.as_str())) {
            score += self.keyword_boost;
        }

        if self.digit.is_match(title) {
            score += self.digit_boost;
        }

        if title.chars().count() > self.length_threshold {
            score += self.length_boost;
        }

        SensationalScore { score, patterns }
    }
}
