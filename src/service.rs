//! The surface a serving layer talks to: list sources, get one source's
//! entries, or fan out over several.

use crate::cache::{ArticleCache, MemoryCache};
use crate::config::Config;
use crate::error::NewsError;
use crate::fetcher::Fetch;
use crate::models::{Entry, SourceInfo};
use crate::registry::Registry;
use crate::source::Context;
use chrono::Local;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

pub struct NewsSum<'r> {
    registry: &'r Registry,
    fetcher: Arc<dyn Fetch>,
    cache: Option<Arc<dyn ArticleCache>>,
    config: Config,
}

impl<'r> NewsSum<'r> {
    /// A service over `registry`. An in-memory cache is attached when
    /// `config.cache.enabled` is set.
    pub fn new(registry: &'r Registry, fetcher: Arc<dyn Fetch>, config: Config) -> Self {
        let cache: Option<Arc<dyn ArticleCache>> = if config.cache.enabled {
            Some(Arc::new(MemoryCache::new()))
        } else {
            None
        };
        Self {
            registry,
            fetcher,
            cache,
            config,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ArticleCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn list_sources(&self) -> Vec<SourceInfo> {
        self.registry.list()
    }

    #[instrument(level = "info", skip(self))]
    pub async fn get_articles(&self, id: &str) -> Result<Vec<Entry>, NewsError> {
        let source = self
            .registry
            .get(id)
            .ok_or_else(|| NewsError::UnknownSource(id.to_string()))?;

        if let Some(entries) = self.cache.as_ref().and_then(|c| c.get(id)) {
            return Ok(entries);
        }

        let ctx = Context {
            fetcher: self.fetcher.as_ref(),
            max_pages: self.config.listing.max_pages_per_section,
            cutoff_hour: self.config.edition.cutoff_hour,
            now: Local::now().naive_local(),
        };
        let entries = source.articles(&ctx).await;

        if let Some(cache) = &self.cache {
            cache.set(id, &entries, Duration::from_secs(self.config.cache.ttl_secs));
        }
        Ok(entries)
    }

    /// Fetch several sources, at most `concurrency` at a time. Results come
    /// back in request order; one source's failure never touches another's.
    #[instrument(level = "info", skip_all, fields(count = ids.len()))]
    pub async fn get_many(&self, ids: &[String]) -> Vec<(String, Result<Vec<Entry>, NewsError>)> {
        let results: Vec<_> = stream::iter(ids)
            .map(|id| async move { (id.clone(), self.get_articles(id).await) })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        info!(sources = results.len(), failed, "Fetched sources");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::CannedFetcher;
    use crate::source::{Adapter, Source};
    use crate::strategies::Strategy;

    const RSS: &str = r#"<rss><channel>
<item><title>Story</title><link>https://a.example/story</link></item>
</channel></rss>"#;

    fn registry() -> Registry {
        let sources: Vec<Box<dyn Source>> = vec![
            Box::new(Adapter::new(
                "good",
                "Good",
                Strategy::feeds(&[("Top", "https://a.example/rss")]),
            )),
            Box::new(Adapter::new(
                "down",
                "Down",
                Strategy::feeds(&[("Top", "https://down.example/rss")]),
            )),
        ];
        Registry::build(sources).unwrap()
    }

    fn fetcher() -> Arc<CannedFetcher> {
        Arc::new(CannedFetcher::new().with("https://a.example/rss", RSS))
    }

    #[tokio::test]
    async fn test_unknown_source() {
        let registry = registry();
        let service = NewsSum::new(&registry, fetcher(), Config::default());
        assert!(matches!(
            service.get_articles("nope").await,
            Err(NewsError::UnknownSource(id)) if id == "nope"
        ));
    }

    #[tokio::test]
    async fn test_list_sources_in_order() {
        let registry = registry();
        let service = NewsSum::new(&registry, fetcher(), Config::default());
        let ids: Vec<_> = service.list_sources().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["good", "down"]);
    }

    #[tokio::test]
    async fn test_get_many_isolates_failures() {
        let registry = registry();
        let service = NewsSum::new(&registry, fetcher(), Config::default());
        let ids = vec!["down".to_string(), "nope".to_string(), "good".to_string()];
        let results = service.get_many(&ids).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "down");
        assert_eq!(results[0].1.as_ref().unwrap().len(), 1);
        assert!(results[1].1.is_err());
        let good = results[2].1.as_ref().unwrap();
        assert_eq!(good.len(), 2);
        assert_eq!(good[1].url(), Some("https://a.example/story"));
    }

    #[tokio::test]
    async fn test_cache_skips_refetch() {
        let registry = registry();
        let canned = fetcher();
        let mut config = Config::default();
        config.cache.enabled = true;
        let service = NewsSum::new(&registry, canned.clone(), config);

        let first = service.get_articles("good").await.unwrap();
        let second = service.get_articles("good").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(canned.urls().len(), 1);
    }

    #[derive(Default)]
    struct RecordingCache {
        store: MemoryCache,
        hits: std::sync::Mutex<Vec<String>>,
        stored: std::sync::Mutex<Vec<(String, Duration)>>,
    }

    impl ArticleCache for RecordingCache {
        fn get(&self, id: &str) -> Option<Vec<Entry>> {
            let found = self.store.get(id);
            if found.is_some() {
                self.hits.lock().unwrap().push(id.to_string());
            }
            found
        }

        fn set(&self, id: &str, entries: &[Entry], ttl: Duration) {
            self.stored.lock().unwrap().push((id.to_string(), ttl));
            self.store.set(id, entries, ttl);
        }
    }

    #[tokio::test]
    async fn test_injected_cache_skips_fetcher() {
        let registry = registry();
        let canned = fetcher();
        let cache = Arc::new(RecordingCache::default());
        let service =
            NewsSum::new(&registry, canned.clone(), Config::default()).with_cache(cache.clone());

        let first = service.get_articles("good").await.unwrap();
        let second = service.get_articles("good").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(canned.urls(), vec!["https://a.example/rss".to_string()]);
        assert_eq!(*cache.hits.lock().unwrap(), vec!["good".to_string()]);
        assert_eq!(
            *cache.stored.lock().unwrap(),
            vec![("good".to_string(), Duration::from_secs(300))]
        );
    }

    #[tokio::test]
    async fn test_no_cache_by_default() {
        let registry = registry();
        let canned = fetcher();
        let service = NewsSum::new(&registry, canned.clone(), Config::default());
        service.get_articles("good").await.unwrap();
        service.get_articles("good").await.unwrap();
        assert_eq!(canned.urls().len(), 2);
    }
}
