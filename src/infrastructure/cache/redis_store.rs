// src/infrastructure/cache/redis_store.rs
use std::collections::HashSet;
use std::time::Duration;

use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::cache::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

/// Keys requested per SCAN round trip.
const SCAN_COUNT: usize = 500;

#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn conn(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    /// Round-trip check used at startup.
    pub async fn ping(&self) -> ApplicationResult<()> {
        let mut conn = self.conn().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApplicationResult<()> {
        let mut conn = self.conn().await?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }
        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> ApplicationResult<bool> {
        let mut conn = self.conn().await?;
        let written: bool = conn
            .set_nx(key, value)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(written)
    }

    async fn exists(&self, key: &str) -> ApplicationResult<bool> {
        let mut conn = self.conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(exists)
    }

    async fn delete(&self, keys: &[String]) -> ApplicationResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn().await?;
        let removed: u64 = conn
            .del(keys)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(removed)
    }

    async fn scan(&self, pattern: &str, limit: Option<usize>) -> ApplicationResult<Vec<String>> {
        let mut conn = self.conn().await?;
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

            // SCAN may return a key more than once across iterations.
            for key in batch {
                if seen.insert(key.clone()) {
                    keys.push(key);
                }
                if limit.is_some_and(|limit| keys.len() >= limit) {
                    return Ok(keys);
                }
            }

            if next == 0 {
                return Ok(keys);
            }
            cursor = next;
        }
    }
}
