//! URL list loading

use crate::ScraperError;
use std::path::Path;

/// Parse a URL list: one URL per line, blank lines and `#` comments skipped
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a URL list file
pub fn load_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ScraperError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_url_list(&contents))
}
