use async_trait::async_trait;
use redis::AsyncCommands;
use shortwave_core::{ReadShortRepository, ShortLink, ShortRepository, StorageError};
use tracing::{debug, trace, warn};

/// Key holding the JSON-encoded record for a hash.
fn record_key(hash: &str) -> String {
    format!("sw:short:{hash}")
}

/// Key holding the set of hashes owned by a principal.
fn owner_key(owner_id: &str) -> String {
    format!("sw:owner:{owner_id}")
}

/// Redis implementation of the repository contract.
///
/// Records are stored as JSON under `sw:short:{hash}`; a per-owner set at
/// `sw:owner:{owner_id}` indexes the hashes for listings. Inserts use
/// `SET NX` so a duplicate hash surfaces as a conflict instead of silently
/// overwriting an existing record.
#[derive(Clone)]
pub struct RedisRepository {
    redis: redis::aio::MultiplexedConnection,
}

impl RedisRepository {
    /// Creates a repository from an existing multiplexed connection.
    pub fn new(redis: redis::aio::MultiplexedConnection) -> Self {
        Self { redis }
    }

    /// Creates a repository by opening a new connection to the given URL.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let redis = client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)?;
        Ok(Self::new(redis))
    }
}

fn map_redis_error(err: redis::RedisError) -> StorageError {
    let message = err.to_string();

    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Query(message)
    }
}

fn decode_record(json: &str) -> Result<ShortLink, StorageError> {
    serde_json::from_str(json)
        .map_err(|e| StorageError::InvalidData(format!("failed to deserialize short link: {e}")))
}

#[async_trait]
impl ReadShortRepository for RedisRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>, StorageError> {
        trace!(hash = %hash, "fetching short link from redis");

        let mut redis = self.redis.clone();
        let raw: Option<String> = redis
            .get(record_key(hash))
            .await
            .map_err(map_redis_error)?;

        raw.as_deref().map(decode_record).transpose()
    }
}

#[async_trait]
impl ShortRepository for RedisRepository {
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, StorageError> {
        let json = serde_json::to_string(&link)
            .map_err(|e| StorageError::InvalidData(format!("failed to serialize short link: {e}")))?;

        let mut redis = self.redis.clone();
        let stored: bool = redis
            .set_nx(record_key(&link.hash), json)
            .await
            .map_err(map_redis_error)?;

        if !stored {
            return Err(StorageError::Conflict(link.hash));
        }

        // A failed insert must leave nothing behind: the caller releases the
        // hash on error and it could be reissued later, so the record cannot
        // be allowed to outlive the error report. Roll it back before
        // surfacing the index write failure.
        if let Err(err) = redis
            .sadd::<_, _, ()>(owner_key(&link.owner_id), &link.hash)
            .await
            .map_err(map_redis_error)
        {
            if let Err(del_err) = redis.del::<_, ()>(record_key(&link.hash)).await {
                warn!(
                    hash = %link.hash,
                    error = %del_err,
                    "failed to roll back short link record after index write failure"
                );
            }
            return Err(err);
        }

        debug!(hash = %link.hash, "stored short link in redis");
        Ok(link)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<ShortLink>, StorageError> {
        trace!(owner_id = %owner_id, "listing short links from redis");

        let mut redis = self.redis.clone();
        let hashes: Vec<String> = redis
            .smembers(owner_key(owner_id))
            .await
            .map_err(map_redis_error)?;

        if hashes.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = hashes.iter().map(|hash| record_key(hash)).collect();
        let raws: Vec<Option<String>> = redis.mget(keys).await.map_err(map_redis_error)?;

        let mut links = Vec::with_capacity(raws.len());
        for raw in raws.into_iter().flatten() {
            links.push(decode_record(&raw)?);
        }

        Ok(links)
    }
}
