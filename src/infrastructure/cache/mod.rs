// src/infrastructure/cache/mod.rs
pub mod memory_store;
pub mod redis_store;

pub use memory_store::InMemoryCacheStore;
pub use redis_store::RedisCacheStore;

use std::sync::Arc;

use crate::application::{ApplicationResult, ports::cache::CacheStore};

/// Redis when a URL is configured, otherwise a process-local store.
pub async fn connect(redis_url: Option<&str>) -> ApplicationResult<Arc<dyn CacheStore>> {
    match redis_url {
        Some(url) => {
            let store = RedisCacheStore::from_url(url)?;
            store.ping().await?;
            tracing::info!("connected to redis cache");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, using in-memory cache; entries are lost on restart");
            Ok(Arc::new(InMemoryCacheStore::new()))
        }
    }
}
