//! Heuristics configuration
//!
//! Every table the engine consults lives here as data: tier domain lists,
//! signal pattern families, the sensational pattern list, boost magnitudes
//! and per-tier shortlist quotas. Operators retune these through a TOML file;
//! the matching algorithms never change.

use crate::patterns::PatternSet;
use crate::HeuristicsError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use verity_domain::CredibilityTier;

/// Curated domain list for one credibility tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDomains {
    /// Tier assigned when any entry matches
    pub tier: CredibilityTier,

    /// Domain fragments, matched by substring containment
    pub domains: Vec<String>,
}

/// Pattern families used for truth-level estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalPatterns {
    /// Patterns suggesting a verifiable fact
    pub verifiable: Vec<String>,

    /// Patterns suggesting speculation or prediction
    pub speculative: Vec<String>,

    /// Patterns suggesting an extreme or unlikely claim
    pub extreme: Vec<String>,
}

/// Sensationalism scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensationalConfig {
    /// Patterns worth +1 each when found
    pub patterns: Vec<String>,

    /// Shock adjectives (substring match, case-insensitive)
    pub shock_keywords: Vec<String>,

    /// Added once when any shock keyword is present
    pub keyword_boost: f64,

    /// Added once when the title contains a digit
    pub digit_boost: f64,

    /// Added once when the title is longer than `length_threshold` characters
    pub length_boost: f64,

    /// Character count a title must exceed to receive `length_boost`
    pub length_threshold: usize,
}

/// Maximum shortlist contribution per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TierQuotas {
    /// Quota for `HIGH`
    pub high: usize,
    /// Quota for `MEDIUM`
    pub medium: usize,
    /// Quota for `MEDIUM_LOW`
    pub medium_low: usize,
    /// Quota for `LOW`
    pub low: usize,
    /// Quota for `UNKNOWN`
    pub unknown: usize,
}

impl TierQuotas {
    /// Quota for a tier
    pub fn get(&self, tier: CredibilityTier) -> usize {
        match tier {
            CredibilityTier::High => self.high,
            CredibilityTier::Medium => self.medium,
            CredibilityTier::MediumLow => self.medium_low,
            CredibilityTier::Low => self.low,
            CredibilityTier::Unknown => self.unknown,
        }
    }

    /// Sum of all quotas, the largest possible shortlist
    pub fn total(&self) -> usize {
        CredibilityTier::ALL.iter().map(|t| self.get(*t)).sum()
    }
}

impl Default for TierQuotas {
    fn default() -> Self {
        Self {
            high: 12,
            medium: 8,
            medium_low: 8,
            low: 8,
            unknown: 4,
        }
    }
}

/// Complete heuristics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicsConfig {
    /// Curated domain lists; matched in tier priority order
    pub tiers: Vec<TierDomains>,

    /// Truth-level signal families
    pub signals: SignalPatterns,

    /// Sensationalism scoring rules
    pub sensational: SensationalConfig,

    /// Per-tier shortlist quotas
    pub quotas: TierQuotas,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SignalPatterns {
    fn default() -> Self {
        Self {
            verifiable: strings(&[
                r"announces?",
                r"launches?",
                r"releases?",
                r"unveils?",
                r"raises? \$\d+",
                r"funding",
                r"acquired?",
                r"study shows?",
                r"research finds?",
                r"report",
            ]),
            speculative: strings(&[
                r"predicts?",
                r"will be",
                r"could be",
                r"might",
                r"forecasts?",
                r"expects?",
                r"by \d{4}",
                r"next",
                r"future",
                r"soon",
            ]),
            extreme: strings(&[
                r"living viruses",
                r"please die",
                r"apocalypse",
                r"end of (?:the world|humanity|everything)",
                r"superintelligence",
                r"AGI by",
                r"crushes",
                r"changed everything",
                r"biggest.*ever",
            ]),
        }
    }
}

impl Default for SensationalConfig {
    fn default() -> Self {
        Self {
            patterns: strings(&[
                r"breakthrough",
                r"shock",
                r"revolutionar",
                r"biggest",
                r"changed everything",
                r"crushes",
                r"doom",
                r"frightening",
                r"apocal",
                r"\d+\s*(million|billion)",
                r"AGI",
                r"superintelligence",
                r"living viruses",
                r"deceive",
                r"faking",
                r"please die",
                r"\$\d+",
                r"more.*than people",
                r"end of",
                r"beginning of the end",
                r"beat.*gpt",
                r"better than",
                r"top \d+",
                r"best.*ever",
                r"what.*looks like",
                r"2027",
                r"2030",
                r"alignment faking",
                r"astonishing",
                r"ultimate",
                r"definitive",
                r"threatening",
            ]),
            shock_keywords: strings(&["shocking", "unbelievable", "insane", "crazy"]),
            keyword_boost: 2.0,
            digit_boost: 0.5,
            length_boost: 0.5,
            length_threshold: 60,
        }
    }
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierDomains {
                    tier: CredibilityTier::High,
                    domains: strings(&[
                        "technologyreview.com",
                        "spectrum.ieee.org",
                        "techcrunch.com",
                        "venturebeat.com",
                        "fortune.com",
                        "cnbc.com",
                        "theverge.com",
                        "nature.com",
                        "sciencemag.org",
                        "acm.org",
                        "ai.meta.com",
                        "blog.google",
                        "anthropic.com",
                        "openai.com",
                        "deepmind.google",
                        "blog.ml.cmu.edu",
                        "karpathy.ai",
                        "lilianweng.github.io",
                        "ben-evans.com",
                        "stratechery.com",
                        "deeplearning.ai",
                    ]),
                },
                TierDomains {
                    tier: CredibilityTier::Medium,
                    domains: strings(&[
                        "towardsai.net",
                        "analyticsvidhya.com",
                        "hackernoon.com",
                        "kdnuggets.com",
                        "sebastianraschka.com",
                        "alignmentforum.org",
                        "lesswrong.com",
                        "oneusefulthing.org",
                        "jack-clark.net",
                        "situational-awareness.ai",
                    ]),
                },
                TierDomains {
                    tier: CredibilityTier::MediumLow,
                    domains: strings(&["medium.com", "towardsdatascience.com", "substack.com"]),
                },
                TierDomains {
                    tier: CredibilityTier::Low,
                    domains: strings(&[
                        "machine.news",
                        "ts2.tech",
                        "penbrief.com",
                        "rollingstone.com",
                        "threadreaderapp.com",
                        "twitter.com",
                        "x.com",
                    ]),
                },
            ],
            signals: SignalPatterns::default(),
            sensational: SensationalConfig::default(),
            quotas: TierQuotas::default(),
        }
    }
}

impl HeuristicsConfig {
    /// Validate the configuration
    ///
    /// Rejects anything that would make matching ambiguous or degenerate:
    /// a list for `UNKNOWN`, a tier listed twice, empty domain fragments or
    /// patterns (which would match everything), negative or non-finite boosts,
    /// and patterns that do not compile.
    pub fn validate(&self) -> Result<(), HeuristicsError> {
        let mut seen = HashSet::new();
        for list in &self.tiers {
            if list.tier == CredibilityTier::Unknown {
                return Err(HeuristicsError::Config(
                    "UNKNOWN is the fallback tier and cannot have a domain list".to_string(),
                ));
            }
            if !seen.insert(list.tier) {
                return Err(HeuristicsError::Config(format!(
                    "tier {} has more than one domain list",
                    list.tier
                )));
            }
            if list.domains.iter().any(|d| d.trim().is_empty()) {
                return Err(HeuristicsError::Config(format!(
                    "tier {} contains an empty domain entry",
                    list.tier
                )));
            }
        }

        let s = &self.sensational;
        for (name, value) in [
            ("keyword_boost", s.keyword_boost),
            ("digit_boost", s.digit_boost),
            ("length_boost", s.length_boost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(HeuristicsError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if s.shock_keywords.iter().any(|k| k.is_empty()) {
            return Err(HeuristicsError::Config(
                "shock_keywords contains an empty keyword".to_string(),
            ));
        }

        for patterns in [
            &self.signals.verifiable,
            &self.signals.speculative,
            &self.signals.extreme,
            &self.sensational.patterns,
        ] {
            PatternSet::compile(patterns)?;
        }

        Ok(())
    }

    /// Load configuration from TOML string
    ///
    /// Sections left out of the document keep their default values.
    pub fn from_toml(toml_str: &str) -> Result<Self, HeuristicsError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HeuristicsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, HeuristicsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
