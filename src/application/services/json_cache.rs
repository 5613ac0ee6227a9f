// src/application/services/json_cache.rs
use std::{sync::Arc, time::Duration};

use serde::{Serialize, de::DeserializeOwned};

use crate::application::ports::cache::CacheStore;

/// Typed JSON view over the cache store for memoized responses.
///
/// Store failures and undecodable entries are logged and treated as a miss;
/// callers proceed without the cache.
#[derive(Clone)]
pub struct JsonCache {
    store: Arc<dyn CacheStore>,
}

impl JsonCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(key, error = %err, "cache read failed, continuing without cache");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    pub async fn put<T: Serialize + Sync>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "could not encode cache entry");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &raw, ttl).await {
            tracing::warn!(key, error = %err, "cache write failed, continuing without cache");
        }
    }
}
