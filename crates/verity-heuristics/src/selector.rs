//! Diversity-balanced shortlist selection

use crate::config::TierQuotas;
use std::collections::BTreeMap;
use verity_domain::{AnalyzedTitle, CredibilityTier, Shortlist};

/// Stable sort, highest score first; ties keep their input order
fn sort_by_score_desc(items: &mut [AnalyzedTitle]) {
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Picks the most sensational headlines from every credibility tier
///
/// Plain top-K by score would be dominated by low-credibility sources, so each
/// tier contributes at most its quota. Tiers with fewer items than their
/// quota are not backfilled from other tiers.
#[derive(Debug, Clone, Default)]
pub struct DiversitySelector {
    quotas: TierQuotas,
}

impl DiversitySelector {
    /// Create a selector with the given quotas
    pub fn new(quotas: TierQuotas) -> Self {
        Self { quotas }
    }

    /// Select the shortlist from a complete analyzed batch
    pub fn select(&self, analyzed: &[AnalyzedTitle]) -> Shortlist {
        let mut by_tier: BTreeMap<CredibilityTier, Vec<AnalyzedTitle>> = BTreeMap::new();
        for item in analyzed.iter().filter(|i| i.score > 0.0) {
            by_tier.entry(item.credibility).or_default().push(item.clone());
        }

        let mut selected = Vec::with_capacity(self.quotas.total());
        for (tier, mut group) in by_tier {
            sort_by_score_desc(&mut group);
            let quota = self.quotas.get(tier);
            tracing::debug!(
                tier = %tier,
                candidates = group.len(),
                quota,
                "selecting tier"
            );
            group.truncate(quota);
            selected.extend(group);
        }

        sort_by_score_desc(&mut selected);
        Shortlist::new(selected)
    }
}
