//! Compiled pattern lists

use crate::HeuristicsError;
use regex::{Regex, RegexBuilder};

/// An ordered list of case-insensitive patterns
///
/// Each pattern keeps its source text, which doubles as its identifier in
/// analysis output.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<(String, Regex)>,
}

impl PatternSet {
    /// Compile a list of pattern sources
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self, HeuristicsError> {
        let patterns = sources
            .iter()
            .map(|source| {
                let source = source.as_ref();
                if source.is_empty() {
                    return Err(HeuristicsError::Pattern {
                        pattern: String::new(),
                        message: "empty pattern matches every title".to_string(),
                    });
                }
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (source.to_string(), regex))
                    .map_err(|e| HeuristicsError::Pattern {
                        pattern: source.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Identifiers of the patterns found anywhere in `text`, in declaration order
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, regex)| regex.is_match(text))
            .map(|(source, _)| source.as_str())
    }

    /// Number of distinct patterns found in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        self.matches(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_distinct_matches() {
        let set = PatternSet::compile(&["agi", "crush(es)?", "never"]).unwrap();
        let hits: Vec<&str> = set.matches("AGI crushes AGI again").collect();
        assert_eq!(hits, vec!["agi", "crush(es)?"]);
        assert_eq!(set.count_matches("AGI crushes AGI again"), 2);
    }

    #[test]
    fn test_declaration_order_kept() {
        let set = PatternSet::compile(&["zeta", "alpha"]).unwrap();
        let hits: Vec<&str> = set.matches("alpha then zeta").collect();
        assert_eq!(hits, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternSet::compile(&["ok", "[unterminated"]).unwrap_err();
        assert!(matches!(err, HeuristicsError::Pattern { .. }));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(PatternSet::compile(&[""]).is_err());
    }

    #[test]
    fn test_empty_set() {
        let set = PatternSet::compile::<&str>(&[]).unwrap();
        assert_eq!(set.matches("anything").count(), 0);
        assert_eq!(set.count_matches("anything"), 0);
    }
}
