//! Property tests for the heuristic engine

use proptest::prelude::*;
use verity_domain::{AnalyzedTitle, CredibilityTier, TruthLevel};
use verity_heuristics::{truth, DiversitySelector, HeadlineAnalyzer, TierQuotas};

const WORDS: &[&str] = &[
    "AGI", "breakthrough", "announces", "predicts", "by 2030", "crushes", "shocking",
    "report", "future", "the", "model", "end of humanity", "top 10", "$500", "funding",
    "superintelligence", "might", "quietly", "update",
];

const URLS: &[&str] = &[
    "https://openai.com/a",
    "https://lesswrong.com/b",
    "https://medium.com/c",
    "https://machine.news/d",
    "https://unlisted.example/e",
    "not a url",
];

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn tier_strategy() -> impl Strategy<Value = CredibilityTier> {
    prop::sample::select(CredibilityTier::ALL.to_vec())
}

fn analyzed_strategy() -> impl Strategy<Value = Vec<AnalyzedTitle>> {
    prop::collection::vec((tier_strategy(), 0u8..8, "[a-z]{1,8}"), 0..80).prop_map(|rows| {
        rows.into_iter()
            .map(|(tier, half_points, title)| AnalyzedTitle {
                url: format!("https://example.com/{}", title),
                title,
                score: f64::from(half_points) * 0.5,
                patterns: vec![],
                credibility: tier,
                truth_level: TruthLevel::Uncertain,
            })
            .collect()
    })
}

fn quotas_strategy() -> impl Strategy<Value = TierQuotas> {
    (0usize..6, 0usize..6, 0usize..6, 0usize..6, 0usize..6).prop_map(
        |(high, medium, medium_low, low, unknown)| TierQuotas {
            high,
            medium,
            medium_low,
            low,
            unknown,
        },
    )
}

proptest! {
    /// Property: analysis is a pure function of (url, title)
    #[test]
    fn test_analysis_is_deterministic(title in title_strategy(), url in prop::sample::select(URLS)) {
        let analyzer = HeadlineAnalyzer::default_config().unwrap();
        let first = analyzer.analyze(url, &title);
        let second = analyzer.analyze(url, &title);
        prop_assert_eq!(&first, &second);

        let fresh = HeadlineAnalyzer::default_config().unwrap();
        prop_assert_eq!(first, fresh.analyze(url, &title));
    }

    /// Property: scores are never negative
    #[test]
    fn test_scores_non_negative(title in title_strategy()) {
        let analyzer = HeadlineAnalyzer::default_config().unwrap();
        prop_assert!(analyzer.analyze("https://openai.com", &title).score >= 0.0);
    }

    /// Property: exactly the first applicable rule decides the verdict
    #[test]
    fn test_first_matching_rule_decides(
        tier in tier_strategy(),
        verifiable in 0usize..4,
        speculative in 0usize..4,
        extreme in 0usize..4,
    ) {
        let signals = verity_domain::SignalCounts::new(verifiable, speculative, extreme);
        let first = truth::TRUTH_RULES
            .iter()
            .position(|r| (r.applies)(tier, &signals))
            .unwrap();
        prop_assert_eq!(truth::estimate(tier, &signals), truth::TRUTH_RULES[first].verdict);
    }

    /// Property: no tier exceeds its quota, and every output item came from the input
    #[test]
    fn test_quota_cap(analyzed in analyzed_strategy(), quotas in quotas_strategy()) {
        let shortlist = DiversitySelector::new(quotas).select(&analyzed);
        for (tier, count) in shortlist.counts() {
            prop_assert!(count <= quotas.get(tier));
        }
        for item in shortlist.iter() {
            prop_assert!(item.score > 0.0);
            prop_assert!(analyzed.contains(item));
        }
    }

    /// Property: each tier contributes min(quota, qualifying items)
    #[test]
    fn test_no_backfill(analyzed in analyzed_strategy(), quotas in quotas_strategy()) {
        let shortlist = DiversitySelector::new(quotas).select(&analyzed);
        let counts = shortlist.counts();
        for tier in CredibilityTier::ALL {
            let qualifying = analyzed.iter().filter(|i| i.credibility == tier && i.score > 0.0).count();
            let expected = qualifying.min(quotas.get(tier));
            prop_assert_eq!(counts.get(&tier).copied().unwrap_or(0), expected);
        }
    }

    /// Property: output is sorted descending by score
    #[test]
    fn test_sorted_descending(analyzed in analyzed_strategy()) {
        let shortlist = DiversitySelector::default().select(&analyzed);
        for pair in shortlist.items().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: selection is idempotent, and selecting a shortlist again changes nothing
    #[test]
    fn test_selection_idempotent(analyzed in analyzed_strategy(), quotas in quotas_strategy()) {
        let selector = DiversitySelector::new(quotas);
        let once = selector.select(&analyzed);
        prop_assert_eq!(&once, &selector.select(&analyzed));
        prop_assert_eq!(&once, &selector.select(once.items()));
    }

    /// Property: a digit plus length over 60 adds at least 1.0
    #[test]
    fn test_digit_and_length_boost(base in "[a-z ]{1,40}", digits in "[0-9]{1,4}") {
        let analyzer = HeadlineAnalyzer::default_config().unwrap();
        let mut boosted = format!("{} {}", base, digits);
        while boosted.chars().count() <= 60 {
            boosted.push_str(" pad");
        }
        let before = analyzer.analyze("https://example.com", &base).score;
        let after = analyzer.analyze("https://example.com", &boosted).score;
        prop_assert!(after - before >= 1.0);
    }
}
