//! The analyzer façade: per-item pipeline plus batch selection

use crate::classifier::DomainClassifier;
use crate::selector::DiversitySelector;
use crate::sensational::SensationalismScorer;
use crate::signals::SignalExtractor;
use crate::{truth, HeuristicsConfig, HeuristicsError};
use verity_domain::{AnalyzedTitle, CredibilityTier, ScrapedItem, Shortlist, SignalCounts, TruthLevel};

/// Runs classification, signal extraction, truth estimation and scoring for
/// each headline, and diversity selection over a batch
///
/// Holds only compiled configuration; every method takes `&self`, so one
/// analyzer can be shared across threads.
#[derive(Debug, Clone)]
pub struct HeadlineAnalyzer {
    classifier: DomainClassifier,
    signals: SignalExtractor,
    scorer: SensationalismScorer,
    selector: DiversitySelector,
}

impl HeadlineAnalyzer {
    /// Build an analyzer from validated configuration
    pub fn new(config: &HeuristicsConfig) -> Result<Self, HeuristicsError> {
        config.validate()?;
        Ok(Self {
            classifier: DomainClassifier::new(&config.tiers),
            signals: SignalExtractor::new(&config.signals)?,
            scorer: SensationalismScorer::new(&config.sensational)?,
            selector: DiversitySelector::new(config.quotas),
        })
    }

    /// Build an analyzer with the curated default tables
    pub fn default_config() -> Result<Self, HeuristicsError> {
        Self::new(&HeuristicsConfig::default())
    }

    /// Credibility tier of a URL's domain
    pub fn classify(&self, url: &str) -> CredibilityTier {
        self.classifier.classify(url)
    }

    /// Signal counts for a headline
    pub fn extract_signals(&self, title: &str) -> SignalCounts {
        self.signals.extract(title)
    }

    /// Truth level of a headline from a given source
    pub fn truth_level(&self, url: &str, title: &str) -> TruthLevel {
        truth::estimate(self.classify(url), &self.extract_signals(title))
    }

    /// Classify and score one headline
    pub fn analyze(&self, url: &str, title: &str) -> AnalyzedTitle {
        let credibility = self.classify(url);
        let signals = self.extract_signals(title);
        let rule = truth::deciding_rule(credibility, &signals);
        let scored = self.scorer.score(title);

        tracing::debug!(
            url,
            tier = %credibility,
            verifiable = signals.verifiable,
            speculative = signals.speculative,
            extreme = signals.extreme,
            rule = rule.name,
            score = scored.score,
            "analyzed title"
        );

        AnalyzedTitle {
            title: title.to_string(),
            url: url.to_string(),
            score: scored.score,
            patterns: scored.patterns,
            credibility,
            truth_level: rule.verdict,
        }
    }

    /// Analyze a scraped item; `None` when it has no usable headline
    pub fn analyze_item(&self, item: &ScrapedItem) -> Option<AnalyzedTitle> {
        item.analyzable_title().map(|title| self.analyze(&item.url, title))
    }

    /// Analyze every qualifying item, preserving input order
    pub fn analyze_all(&self, items: &[ScrapedItem]) -> Vec<AnalyzedTitle> {
        let analyzed: Vec<AnalyzedTitle> = items.iter().filter_map(|i| self.analyze_item(i)).collect();
        tracing::info!(
            scraped = items.len(),
            analyzed = analyzed.len(),
            "analyzed scraped titles"
        );
        analyzed
    }

    /// Diversity-balanced shortlist over a complete analyzed batch
    pub fn select(&self, analyzed: &[AnalyzedTitle]) -> Shortlist {
        let shortlist = self.selector.select(analyzed);
        tracing::info!(
            candidates = analyzed.len(),
            selected = shortlist.len(),
            "built shortlist"
        );
        shortlist
    }

    /// Analyze a scraped batch and select its shortlist
    pub fn shortlist(&self, items: &[ScrapedItem]) -> Shortlist {
        self.select(&self.analyze_all(items))
    }
}
