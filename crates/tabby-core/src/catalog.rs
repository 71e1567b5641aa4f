//! Built-in URL catalog.
//!
//! An ordered, immutable list of candidate URLs. The list is embedded at
//! build time; nothing mutates it for the lifetime of the process.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

/// Safe sites with varied pages: Wikipedia articles, news pieces, Stack
/// Overflow questions, and a spread of unique domains.
pub const SAFE_SITES: &[&str] = &[
    "https://en.wikipedia.org/wiki/Python_(programming_language)",
    "https://en.wikipedia.org/wiki/Artificial_intelligence",
    "https://en.wikipedia.org/wiki/Space_exploration",
    "https://www.bbc.com/news/technology-56858025",
    "https://www.bbc.com/news/science-environment-56837908",
    "https://www.bbc.com/news/world-us-canada-56857249",
    "https://stackoverflow.com/questions/231767/what-does-the-yield-keyword-do",
    "https://stackoverflow.com/questions/415511/how-to-get-the-current-time-in-python",
    "https://www.github.com",
    "https://www.nationalgeographic.com",
    "https://www.medium.com",
    "https://www.khanacademy.org",
    "https://www.reddit.com",
    "https://www.ted.com",
    "https://www.weather.com",
    "https://www.cnn.com",
    "https://www.bloomberg.com",
    "https://www.theguardian.com",
    "https://www.nytimes.com",
    "https://www.nasa.gov",
    "https://www.imdb.com",
    "https://www.mit.edu",
    "https://www.mozilla.org",
    "https://www.quora.com",
    "https://www.sciencedaily.com",
    "https://www.espn.com",
    "https://www.techcrunch.com",
    "https://www.forbes.com",
    "https://www.adobe.com",
    "https://www.coursera.org",
    "https://www.edx.org",
    "https://www.linkedin.com",
    "https://www.yale.edu",
    "https://www.spotify.com",
];

/// Catalog validation failure (duplicate entry or a URL that does not parse
/// as absolute). Treated as a configuration error: fatal before any launch.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate catalog entry: {url}")]
    Duplicate { url: String },
    #[error("malformed catalog URL {url}: {source}")]
    Malformed {
        url: String,
        source: url::ParseError,
    },
}

/// An ordered collection of candidate URLs.
#[derive(Debug, Clone)]
pub struct Catalog {
    urls: Vec<String>,
}

impl Catalog {
    /// The built-in safe-sites catalog.
    pub fn builtin() -> Self {
        Self::from_urls(SAFE_SITES.iter().copied())
    }

    /// Catalog from arbitrary URLs (tests, imported tab lists).
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Checks the catalog invariants: every entry unique and a well-formed
    /// absolute URL. Relative URLs fail `Url::parse` and are rejected.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for url in &self.urls {
            if !seen.insert(url.as_str()) {
                return Err(CatalogError::Duplicate { url: url.clone() });
            }
            Url::parse(url).map_err(|source| CatalogError::Malformed {
                url: url.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() >= 30);
        catalog.validate().unwrap();
    }

    #[test]
    fn duplicate_entry_rejected() {
        let catalog = Catalog::from_urls(["https://a.example", "https://a.example"]);
        match catalog.validate() {
            Err(CatalogError::Duplicate { url }) => assert_eq!(url, "https://a.example"),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn relative_url_rejected() {
        let catalog = Catalog::from_urls(["https://ok.example", "/not/absolute"]);
        match catalog.validate() {
            Err(CatalogError::Malformed { url, .. }) => assert_eq!(url, "/not/absolute"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
