//! Domain credibility classification

use crate::config::TierDomains;
use url::Url;
use verity_domain::CredibilityTier;

/// Lower-cased network location of a URL (`[user[:pass]@]host[:port]`)
///
/// Protocol-relative input (`//host/path`) is read as an http URL. A port
/// written in the URL is kept even when it is the scheme default. Returns an
/// empty string for anything else that does not parse as an absolute URL with
/// a host, so malformed input classifies as `UNKNOWN`.
pub fn domain_of(url: &str) -> String {
    let url = url.trim();
    let parsed = if url.starts_with("//") {
        Url::parse(&format!("http:{}", url))
    } else {
        Url::parse(url)
    };
    let Ok(parsed) = parsed else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    let mut netloc = String::new();
    if !parsed.username().is_empty() {
        netloc.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }
    netloc.push_str(host);
    if let Some(port) = written_port(url) {
        netloc.push(':');
        netloc.push_str(port);
    }
    netloc.to_lowercase()
}

/// Port digits as written in the authority; `Url` drops default ports
fn written_port(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("//")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit('@').next()?;
    let (_, port) = host_port.rsplit_once(':')?;
    (!port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())).then_some(port)
}

/// Maps a URL's domain to a credibility tier using curated lists
///
/// Lists are tried in tier priority order (HIGH first); the first list with
/// any entry contained in the domain wins.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    lists: Vec<(CredibilityTier, Vec<String>)>,
}

impl DomainClassifier {
    /// Build a classifier from tier lists in any order
    pub fn new(tiers: &[TierDomains]) -> Self {
        let mut lists: Vec<(CredibilityTier, Vec<String>)> = tiers
            .iter()
            .map(|t| {
                let domains = t.domains.iter().map(|d| d.trim().to_lowercase()).collect();
                (t.tier, domains)
            })
            .collect();
        lists.sort_by_key(|(tier, _)| *tier);
        Self { lists }
    }

    /// Classify a URL
    pub fn classify(&self, url: &str) -> CredibilityTier {
        self.classify_domain(&domain_of(url))
    }

    /// Classify an already extracted, lower-cased domain
    pub fn classify_domain(&self, domain: &str) -> CredibilityTier {
        if domain.is_empty() {
            return CredibilityTier::Unknown;
        }
        self.lists
            .iter()
            .find(|(_, entries)| entries.iter().any(|entry| domain.contains(entry.as_str())))
            .map(|(tier, _)| *tier)
            .unwrap_or(CredibilityTier::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeuristicsConfig;

    fn classifier() -> DomainClassifier {
        DomainClassifier::new(&HeuristicsConfig::default().tiers)
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://OpenAI.com/blog/post"), "openai.com");
        assert_eq!(domain_of("http://user:pw@Example.com:8080/x"), "user:pw@example.com:8080");
        assert_eq!(domain_of("not a url"), "");
        assert_eq!(domain_of("https://[::1]/x"), "[::1]");
        assert_eq!(domain_of("openai.com/no-scheme"), "");
        assert_eq!(domain_of(""), "");
    }

    #[test]
    fn test_protocol_relative_url() {
        assert_eq!(domain_of("//OpenAI.com/x"), "openai.com");
        assert_eq!(classifier().classify("//openai.com/x"), CredibilityTier::High);
    }

    #[test]
    fn test_written_default_port_kept() {
        assert_eq!(domain_of("https://openai.com:443/blog"), "openai.com:443");
        assert_eq!(domain_of("http://a.example:80"), "a.example:80");
        assert_eq!(domain_of("https://[::1]:8443/x"), "[::1]:8443");
        assert_eq!(classifier().classify("https://openai.com:443/blog"), CredibilityTier::High);
    }

    #[test]
    fn test_curated_tiers() {
        let c = classifier();
        assert_eq!(c.classify("https://openai.com/index/gpt"), CredibilityTier::High);
        assert_eq!(c.classify("https://www.lesswrong.com/posts/abc"), CredibilityTier::Medium);
        assert_eq!(c.classify("https://medium.com/@someone/post"), CredibilityTier::MediumLow);
        assert_eq!(c.classify("https://machine.news/story"), CredibilityTier::Low);
        assert_eq!(c.classify("https://example.org/"), CredibilityTier::Unknown);
    }

    #[test]
    fn test_substring_containment() {
        let c = classifier();
        // Subdomains of a curated entry still match
        assert_eq!(c.classify("https://someone.substack.com/p/x"), CredibilityTier::MediumLow);
        // Containment, not suffix: "x.com" is inside "netflix.com"
        assert_eq!(c.classify("https://netflix.com/"), CredibilityTier::Low);
    }

    #[test]
    fn test_priority_order() {
        let c = classifier();
        assert_eq!(c.classify("https://blog.google.medium.com/"), CredibilityTier::High);
    }

    #[test]
    fn test_priority_ignores_config_order() {
        let tiers = vec![
            TierDomains {
                tier: CredibilityTier::Low,
                domains: vec!["example".to_string()],
            },
            TierDomains {
                tier: CredibilityTier::High,
                domains: vec!["trusted.example".to_string()],
            },
        ];
        let c = DomainClassifier::new(&tiers);
        assert_eq!(c.classify("https://trusted.example.com"), CredibilityTier::High);
        assert_eq!(c.classify("https://other.example.com"), CredibilityTier::Low);
    }

    #[test]
    fn test_malformed_urls_are_unknown() {
        let c = classifier();
        assert_eq!(c.classify("openai.com"), CredibilityTier::Unknown);
        assert_eq!(c.classify("::::"), CredibilityTier::Unknown);
        assert_eq!(c.classify("mailto:someone@openai.com"), CredibilityTier::Unknown);
    }

    #[test]
    fn test_extensible_lists() {
        let mut config = HeuristicsConfig::default();
        config.tiers[3].domains.push("rumors.example".to_string());
        let c = DomainClassifier::new(&config.tiers);
        assert_eq!(c.classify("https://rumors.example/x"), CredibilityTier::Low);
    }
}
