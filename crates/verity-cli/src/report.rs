//! Result files and the console report.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use verity_domain::{AnalyzedTitle, ArticleRecord, CredibilityTier, ScrapeStatus, ScrapedItem, Shortlist};
use verity_heuristics::domain_of;

/// Pattern identifiers shown per item in the console report
const REPORT_PATTERNS: usize = 4;

const RULE_WIDTH: usize = 80;

/// Shortlist file layout: totals plus items grouped by tier
///
/// Only represented tiers appear, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistExport {
    /// Number of shortlisted items
    pub total: usize,
    /// Items per tier
    pub counts: BTreeMap<CredibilityTier, usize>,
    /// Items per tier, in presentation order
    pub tiers: BTreeMap<CredibilityTier, Vec<AnalyzedTitle>>,
}

impl ShortlistExport {
    /// Group a shortlist for export
    pub fn from_shortlist(shortlist: &Shortlist) -> Self {
        let tiers = shortlist
            .grouped()
            .into_iter()
            .map(|(tier, items)| (tier, items.into_iter().cloned().collect()))
            .collect();

        Self {
            total: shortlist.len(),
            counts: shortlist.counts(),
            tiers,
        }
    }
}

/// Write every scrape outcome as a pretty JSON array
pub fn write_results(path: &Path, items: &[ScrapedItem]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}

/// Read a results file written by [`write_results`]
pub fn read_results(path: &Path) -> Result<Vec<ScrapedItem>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the grouped shortlist export
pub fn write_shortlist(path: &Path, shortlist: &Shortlist) -> Result<()> {
    ensure_parent(path)?;
    let export = ShortlistExport::from_shortlist(shortlist);
    fs::write(path, serde_json::to_string_pretty(&export)?)?;
    Ok(())
}

#[derive(Deserialize)]
struct ImportEntry {
    #[serde(alias = "URL")]
    url: String,
    #[serde(alias = "Title")]
    title: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Grouped { tiers: BTreeMap<String, Vec<ImportEntry>> },
    Flat(Vec<ImportEntry>),
}

/// Read articles from a shortlist file
///
/// Accepts the grouped export, or a flat array of objects with `url`/`title`
/// (or `URL`/`Title`) fields.
pub fn read_articles(path: &Path) -> Result<Vec<ArticleRecord>> {
    let contents = fs::read_to_string(path)?;
    let entries = match serde_json::from_str::<ImportFile>(&contents)? {
        ImportFile::Grouped { tiers } => tiers.into_values().flatten().collect(),
        ImportFile::Flat(entries) => entries,
    };

    Ok(entries
        .into_iter()
        .map(|e| ArticleRecord {
            url: e.url,
            title: e.title,
        })
        .collect())
}

/// Number of scrape outcomes with a usable title
pub fn successful_scrapes(items: &[ScrapedItem]) -> usize {
    items.iter().filter(|i| i.status == ScrapeStatus::Success).count()
}

/// Render the shortlist grouped by tier, followed by a summary
pub fn render_report(shortlist: &Shortlist, scraped: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "HEADLINES WORTH CHECKING, BY SOURCE CREDIBILITY".to_string(),
        rule.clone(),
    ];

    let mut index = 1;
    for (tier, items) in shortlist.grouped() {
        lines.push(String::new());
        lines.push(rule.clone());
        lines.push(format!("📊 {} CREDIBILITY SOURCES ({} articles)", tier, items.len()));
        lines.push(rule.clone());
        lines.push(String::new());

        for item in items {
            lines.push(format!("{}. [Score: {:.1}] {}", index, item.score, item.title));
            lines.push(format!("   Source: {}", domain_of(&item.url)));
            lines.push(format!("   URL: {}", item.url));
            if !item.patterns.is_empty() {
                let shown: Vec<&str> = item.patterns.iter().take(REPORT_PATTERNS).map(String::as_str).collect();
                lines.push(format!("   Why it sounds fake: {}", shown.join(", ")));
            }
            lines.push(String::new());
            index += 1;
        }
    }

    lines.push(rule.clone());
    lines.push("SUMMARY".to_string());
    lines.push(rule);
    lines.push(format!("✓ Successfully scraped {} articles", scraped));
    lines.push(format!(
        "✓ Found {} fake-sounding articles across all credibility levels",
        shortlist.len()
    ));

    let counts = shortlist.counts();
    if !counts.is_empty() {
        lines.push(String::new());
        lines.push("  Articles per credibility tier:".to_string());
        lines.extend(counts.into_iter().map(|(tier, count)| format!("    {}: {}", tier, count)));
    }

    lines.join("\n") + "\n"
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
