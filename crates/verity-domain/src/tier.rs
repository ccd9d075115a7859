//! Tier module - credibility buckets for publishing domains

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credibility tier of a publishing domain
///
/// Declaration order is priority order: domain matching tries `High` first,
/// and reports list tiers in this order. `Unknown` is the fallback when no
/// curated list matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredibilityTier {
    /// Established outlets, research labs and well-known authors
    High,

    /// Established blogs and newsletters
    Medium,

    /// General blogging platforms and aggregators
    #[serde(alias = "MEDIUM-LOW")]
    MediumLow,

    /// Questionable or sensational sources, social posts
    Low,

    /// No curated list matched
    Unknown,
}

impl CredibilityTier {
    /// All tiers in priority (and display) order
    pub const ALL: [CredibilityTier; 5] = [
        CredibilityTier::High,
        CredibilityTier::Medium,
        CredibilityTier::MediumLow,
        CredibilityTier::Low,
        CredibilityTier::Unknown,
    ];

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CredibilityTier::High => "HIGH",
            CredibilityTier::Medium => "MEDIUM",
            CredibilityTier::MediumLow => "MEDIUM_LOW",
            CredibilityTier::Low => "LOW",
            CredibilityTier::Unknown => "UNKNOWN",
        }
    }

    /// Parse a tier from a string (case-insensitive, `-` and `_` interchangeable)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "HIGH" => Some(CredibilityTier::High),
            "MEDIUM" => Some(CredibilityTier::Medium),
            "MEDIUM_LOW" => Some(CredibilityTier::MediumLow),
            "LOW" => Some(CredibilityTier::Low),
            "UNKNOWN" => Some(CredibilityTier::Unknown),
            _ => None,
        }
    }

    /// Whether the tier is considered untrusted for truth estimation
    pub fn is_untrusted(&self) -> bool {
        matches!(self, CredibilityTier::Low | CredibilityTier::Unknown)
    }

    /// Whether the tier is considered trusted for truth estimation
    ///
    /// `MediumLow` is neither trusted nor untrusted.
    pub fn is_trusted(&self) -> bool {
        matches!(self, CredibilityTier::High | CredibilityTier::Medium)
    }
}

impl fmt::Display for CredibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CredibilityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid credibility tier: {}", s))
    }
}
