//! Truth-level estimation as an ordered decision table

use verity_domain::{CredibilityTier, SignalCounts, TruthLevel};

/// One row of the decision table
#[derive(Debug, Clone, Copy)]
pub struct TruthRule {
    /// Short rule name for logs and audits
    pub name: &'static str,
    /// Whether the rule fires for a tier and signal counts
    pub applies: fn(CredibilityTier, &SignalCounts) -> bool,
    /// Verdict when the rule fires
    pub verdict: TruthLevel,
}

/// The decision table, evaluated top to bottom; the first rule that fires wins.
/// The last rule always fires.
pub const TRUTH_RULES: [TruthRule; 6] = [
    TruthRule {
        name: "multiple_extreme",
        applies: |_, s| s.extreme >= 2,
        verdict: TruthLevel::ExtremeClaim,
    },
    TruthRule {
        name: "extreme_untrusted_source",
        applies: |tier, s| s.extreme >= 1 && tier.is_untrusted(),
        verdict: TruthLevel::LikelyFalse,
    },
    TruthRule {
        name: "extreme_trusted_source",
        applies: |tier, s| s.extreme >= 1 && tier.is_trusted(),
        verdict: TruthLevel::ShockingButTrue,
    },
    TruthRule {
        name: "speculation_dominates",
        applies: |_, s| s.speculative > s.verifiable,
        verdict: TruthLevel::Speculation,
    },
    TruthRule {
        name: "verifiable",
        applies: |_, s| s.verifiable > 0,
        verdict: TruthLevel::LikelyTrue,
    },
    TruthRule {
        name: "fallback",
        applies: |_, _| true,
        verdict: TruthLevel::Uncertain,
    },
];

/// The rule that decides the verdict for a tier and signal counts
pub fn deciding_rule(tier: CredibilityTier, signals: &SignalCounts) -> &'static TruthRule {
    TRUTH_RULES
        .iter()
        .find(|rule| (rule.applies)(tier, signals))
        .unwrap_or(&TRUTH_RULES[TRUTH_RULES.len() - 1])
}

/// Estimate the truth level of a headline
pub fn estimate(tier: CredibilityTier, signals: &SignalCounts) -> TruthLevel {
    deciding_rule(tier, signals).verdict
}
