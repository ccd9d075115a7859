//! Analysis results - scored headlines and the reviewer shortlist

use crate::{CredibilityTier, TruthLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One classified and scored headline
///
/// Immutable once built by the heuristic engine; the selector only reorders
/// and filters these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTitle {
    /// Headline text
    pub title: String,

    /// Article URL
    pub url: String,

    /// Sensationalism ("fake-sounding") score, never negative
    pub score: f64,

    /// Matched sensational pattern identifiers, in declaration order
    pub patterns: Vec<String>,

    /// Trust tier of the publishing domain
    pub credibility: CredibilityTier,

    /// Truth-level verdict
    pub truth_level: TruthLevel,
}

/// Diversity-balanced selection of headlines, descending by score
///
/// Built by the selector; each tier contributes at most its configured quota.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortlist {
    items: Vec<AnalyzedTitle>,
}

impl Shortlist {
    /// Wrap an already ordered selection
    pub fn new(items: Vec<AnalyzedTitle>) -> Self {
        Self { items }
    }

    /// Selected items in presentation order
    pub fn items(&self) -> &[AnalyzedTitle] {
        &self.items
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over selected items in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, AnalyzedTitle> {
        self.items.iter()
    }

    /// Number of selected items per represented tier, in tier order
    pub fn counts(&self) -> BTreeMap<CredibilityTier, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.credibility).or_insert(0) += 1;
        }
        counts
    }

    /// Items grouped by tier in tier order; empty tiers are omitted
    ///
    /// Within a group the presentation order is preserved.
    pub fn grouped(&self) -> Vec<(CredibilityTier, Vec<&AnalyzedTitle>)> {
        CredibilityTier::ALL
            .iter()
            .filter_map(|tier| {
                let group: Vec<&AnalyzedTitle> =
                    self.items.iter().filter(|i| i.credibility == *tier).collect();
                (!group.is_empty()).then_some((*tier, group))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Shortlist {
    type Item = &'a AnalyzedTitle;
    type IntoIter = std::slice::Iter<'a, AnalyzedTitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
