//! Search interface for turning brand queries into seed URLs.
//!
//! The resolver itself starts from a URL. Where seeds come from (a web
//! search, a curated list, a database) is a collaborator's business; the
//! core only depends on this trait.

use async_trait::async_trait;

/// One search result a provider hands back, best match first.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

/// Trait implemented by seed providers (e.g. a web-search client).
#[async_trait]
pub trait SearchProvider {
    /// Returns hits for `query`, best match first.
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchHit>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Vec<SearchHit>);

    #[async_trait]
    impl SearchProvider for FixedProvider {
        async fn search(&self, _query: &str) -> anyhow::Result<Vec<SearchHit>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn provider_returns_hits_in_order() {
        let provider = FixedProvider(vec![
            SearchHit {
                title: "Example Corp".to_string(),
                url: "https://example.com".to_string(),
                description: Some("Official site".to_string()),
            },
            SearchHit {
                title: "Example Corp on SocialSite".to_string(),
                url: "https://social.example.net/examplecorp".to_string(),
                description: None,
            },
        ]);

        let hits = provider.search("example corp logo").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://example.com");
        assert!(hits[1].description.is_none());
    }
}
