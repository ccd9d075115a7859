//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::{render_report, ShortlistExport};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use verity_domain::{AnalyzedTitle, ArticleStats, CredibilityTier, Review, Shortlist, StoreStatistics};
use verity_heuristics::domain_of;

/// Longest title shown in a table cell
const TABLE_TITLE_CHARS: usize = 70;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a shortlist: console report, grouped JSON, or URLs.
    pub fn format_shortlist(&self, shortlist: &Shortlist, scraped: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ShortlistExport::from_shortlist(shortlist))?),
            OutputFormat::Table => Ok(self.shortlist_table(shortlist) + "\n\n" + &render_report(shortlist, scraped)),
            OutputFormat::Quiet => Ok(shortlist.iter().map(|i| i.url.as_str()).collect::<Vec<_>>().join("\n")),
        }
    }

    fn shortlist_table(&self, shortlist: &Shortlist) -> String {
        if shortlist.is_empty() {
            return self.colorize("No headlines selected.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Tier", "Score", "Truth", "Source", "Title"]);

        for (i, item) in shortlist.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                self.tier_label(item.credibility),
                format!("{:.1}", item.score),
                item.truth_level.to_string(),
                domain_of(&item.url),
                truncate(&item.title, TABLE_TITLE_CHARS),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the full analysis of one headline.
    pub fn format_analysis(&self, analysis: &AnalyzedTitle) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Quiet => Ok(format!("{:.1}", analysis.score)),
            OutputFormat::Table => {
                let patterns = if analysis.patterns.is_empty() {
                    "-".to_string()
                } else {
                    analysis.patterns.join(", ")
                };

                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Title".to_string(), analysis.title.clone()]);
                builder.push_record(["Source".to_string(), domain_of(&analysis.url)]);
                builder.push_record(["Credibility".to_string(), self.tier_label(analysis.credibility)]);
                builder.push_record(["Truth level".to_string(), analysis.truth_level.to_string()]);
                builder.push_record(["Score".to_string(), format!("{:.1}", analysis.score)]);
                builder.push_record(["Patterns".to_string(), patterns]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the credibility tier of a URL.
    pub fn format_tier(&self, url: &str, tier: CredibilityTier) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "url": url,
                "domain": domain_of(url),
                "credibility": tier,
            }))?),
            OutputFormat::Quiet => Ok(tier.to_string()),
            OutputFormat::Table => Ok(format!("{}  {}", self.tier_label(tier), domain_of(url))),
        }
    }

    /// Format reviews of one article with their aggregate.
    pub fn format_reviews(&self, reviews: &[Review], stats: &ArticleStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "reviews": reviews,
                "stats": stats,
            }))?),
            OutputFormat::Quiet => Ok(reviews.iter().map(|r| r.id.to_string()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if reviews.is_empty() {
                    return Ok(self.colorize("No reviews found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Acc", "Cred", "Cite", "Reas", "Conf", "Mean", "Notes"]);
                for review in reviews {
                    let s = &review.scores;
                    builder.push_record([
                        review.id.to_string()[..8].to_string(),
                        s.accuracy.to_string(),
                        s.credibility.to_string(),
                        s.citation.to_string(),
                        s.reasoning.to_string(),
                        s.confidence.to_string(),
                        format!("{:.1}", s.mean()),
                        truncate(&review.notes, 40),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\n{}",
                    table,
                    self.info(&format!("{} review(s), average {:.2}", stats.count, stats.average))
                ))
            }
        }
    }

    /// Format review database statistics.
    pub fn format_statistics(&self, stats: &StoreStatistics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(stats.total_reviews.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                builder.push_record(["Articles".to_string(), stats.total_articles.to_string()]);
                builder.push_record(["Reviews".to_string(), stats.total_reviews.to_string()]);
                builder.push_record(["Reviewed articles".to_string(), stats.articles_with_reviews.to_string()]);
                builder.push_record(["Unreviewed articles".to_string(), stats.articles_without_reviews.to_string()]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn tier_label(&self, tier: CredibilityTier) -> String {
        let color = match tier {
            CredibilityTier::High => "green",
            CredibilityTier::Medium => "cyan",
            CredibilityTier::MediumLow => "yellow",
            CredibilityTier::Low => "red",
            CredibilityTier::Unknown => "magenta",
        };
        self.colorize(tier.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_domain::{ReviewId, ReviewScores, TruthLevel};

    fn analysis() -> AnalyzedTitle {
        AnalyzedTitle {
            title: "AGI by 2027, experts predict".to_string(),
            url: "https://medium.com/@someone/agi".to_string(),
            score: 2.5,
            patterns: vec!["AGI".to_string(), "2027".to_string()],
            credibility: CredibilityTier::MediumLow,
            truth_level: TruthLevel::Speculation,
        }
    }

    fn shortlist() -> Shortlist {
        Shortlist::new(vec![analysis()])
    }

    #[test]
    fn test_json_shortlist() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_shortlist(&shortlist(), 1).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["tiers"]["MEDIUM_LOW"][0]["truth_level"], "SPECULATION");
    }

    #[test]
    fn test_quiet_shortlist() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_shortlist(&shortlist(), 1).unwrap();
        assert_eq!(output, "https://medium.com/@someone/agi");
    }

    #[test]
    fn test_table_shortlist() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_shortlist(&shortlist(), 1).unwrap();
        assert!(output.contains("Truth"));
        assert!(output.contains("MEDIUM_LOW"));
        assert!(output.contains("SUMMARY"));
    }

    #[test]
    fn test_empty_shortlist() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_shortlist(&Shortlist::default(), 0).unwrap();
        assert!(output.contains("No headlines selected."));
    }

    #[test]
    fn test_analysis_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert!(output.contains("SPECULATION"));
        assert!(output.contains("AGI, 2027"));
        assert!(output.contains("medium.com"));
    }

    #[test]
    fn test_quiet_analysis_is_score() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_analysis(&analysis()).unwrap(), "2.5");
    }

    #[test]
    fn test_tier_output() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_tier("https://openai.com", CredibilityTier::High).unwrap();
        assert_eq!(output, "HIGH");
    }

    #[test]
    fn test_reviews_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let review = Review {
            id: ReviewId::new(),
            url: "https://a.example".to_string(),
            scores: ReviewScores {
                accuracy: 2,
                credibility: 4,
                citation: 6,
                reasoning: 8,
                confidence: 10,
            },
            notes: "no sources".to_string(),
            created_at: 0,
        };
        let stats = ArticleStats::from_scores([&review.scores]);

        let output = formatter.format_reviews(&[review], &stats).unwrap();
        assert!(output.contains("no sources"));
        assert!(output.contains("1 review(s), average 6.00"));

        let output = formatter.format_reviews(&[], &ArticleStats::default()).unwrap();
        assert!(output.contains("No reviews found."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
        assert_eq!(formatter.error("Error: test"), "✗ Error: test");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
