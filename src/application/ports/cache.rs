// src/application/ports/cache.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value store holding memoized upstream responses and slug mappings.
///
/// Values are opaque strings (JSON in practice). The store's own per-key
/// atomicity is relied upon; callers never lock.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;

    /// Store `value`; `ttl == None` means no expiry.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApplicationResult<()>;

    /// Store `value` only when `key` is absent. Returns true when written.
    async fn set_if_absent(&self, key: &str, value: &str) -> ApplicationResult<bool>;

    async fn exists(&self, key: &str) -> ApplicationResult<bool>;

    /// Delete the given keys, returning how many existed.
    async fn delete(&self, keys: &[String]) -> ApplicationResult<u64>;

    /// Keys matching a glob pattern (`*`, `?`, `[..]`), at most `limit` of them.
    async fn scan(&self, pattern: &str, limit: Option<usize>) -> ApplicationResult<Vec<String>>;
}
