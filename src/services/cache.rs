use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ApplicantProfile;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-process response cache
///
/// A single in-memory tier is enough here: the engine is deterministic
/// over an immutable catalog, so a cached ranking stays valid for the
/// life of the process. Entries expire on TTL to bound staleness across
/// catalog redeploys.
pub struct CacheManager {
    l1_cache: moka::future::Cache<String, Vec<u8>>,
}

impl CacheManager {
    /// Create a new cache manager with the given capacity and TTL
    pub fn new(l1_size: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { l1_cache }
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.l1_cache.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a value from cache
    pub async fn delete(&self, key: &str) {
        self.l1_cache.invalidate(key).await;
    }

    /// Number of live entries
    pub fn entry_count(&self) -> u64 {
        self.l1_cache.entry_count()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a deterministic fingerprint for a ranking call
    ///
    /// Interest order is irrelevant to the engine, so interests are
    /// lowercased and sorted to let equivalent profiles share an entry.
    pub fn rank(profile: &ApplicantProfile, limit: usize) -> String {
        let mut interests: Vec<String> = profile
            .research_interests
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
        interests.sort();

        format!(
            "rank:{:.2}:{:?}:{}:{}:{}",
            profile.gpa,
            profile.degree_level,
            profile.field_of_study.trim().to_lowercase(),
            interests.join(","),
            limit
        )
    }
}
