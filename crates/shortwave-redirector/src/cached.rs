use async_trait::async_trait;
use moka::future::Cache;
use shortwave_core::{ReadShortRepository, ShortLink, StorageError};
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Tuning for the in-memory record cache.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheSettings {
    /// Maximum number of records held in memory.
    #[builder(default = 10_000)]
    pub max_capacity: u64,
    /// Evict cached records after this long, regardless of hits.
    #[builder(default, setter(strip_option))]
    pub time_to_live: Option<Duration>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A read-only repository decorator that caches records in memory.
///
/// Lookups check the cache first and fall back to the inner repository,
/// caching whatever they find. Expiry is evaluated by the resolver on
/// every hit, so serving a cached record that has since expired is still
/// correct.
#[derive(Clone)]
pub struct CachedRepository<R> {
    inner: R,
    cache: Cache<String, ShortLink>,
}

impl<R: ReadShortRepository> CachedRepository<R> {
    /// Creates a cached decorator with default settings.
    pub fn new(inner: R) -> Self {
        Self::with_settings(inner, CacheSettings::default())
    }

    /// Creates a cached decorator with the given settings.
    pub fn with_settings(inner: R, settings: CacheSettings) -> Self {
        let mut builder = Cache::builder().max_capacity(settings.max_capacity);
        if let Some(ttl) = settings.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            inner,
            cache: builder.build(),
        }
    }
}

#[async_trait]
impl<R: ReadShortRepository> ReadShortRepository for CachedRepository<R> {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>, StorageError> {
        if let Some(link) = self.cache.get(hash).await {
            trace!(hash = %hash, "cache hit for short link");
            return Ok(Some(link));
        }

        trace!(hash = %hash, "cache miss, fetching from inner repository");
        let result = self.inner.find_by_hash(hash).await?;

        if let Some(ref link) = result {
            self.cache.insert(hash.to_string(), link.clone()).await;
            debug!(hash = %hash, "cached short link");
        }

        Ok(result)
    }
}
