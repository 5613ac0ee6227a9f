// src/infrastructure/cache/memory_store.rs
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::cache::CacheStore;
use async_trait::async_trait;
use glob::Pattern;
use tokio::sync::RwLock;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// Process-local store for development and tests. Contents are lost on exit.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let guard = self.entries.read().await;
        guard.values().filter(|e| e.is_live(now)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let now = Instant::now();
        let guard = self.entries.read().await;
        Ok(guard
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApplicationResult<()> {
        let now = Instant::now();
        let mut guard = self.entries.write().await;
        // Expired entries are dropped on every write.
        guard.retain(|_, e| e.is_live(now));
        guard.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| now + ttl),
            },
        );
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> ApplicationResult<bool> {
        let now = Instant::now();
        let mut guard = self.entries.write().await;
        guard.retain(|_, e| e.is_live(now));
        if guard.contains_key(key) {
            return Ok(false);
        }
        guard.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(true)
    }

    async fn exists(&self, key: &str) -> ApplicationResult<bool> {
        let now = Instant::now();
        let guard = self.entries.read().await;
        Ok(guard.get(key).is_some_and(|e| e.is_live(now)))
    }

    async fn delete(&self, keys: &[String]) -> ApplicationResult<u64> {
        let now = Instant::now();
        let mut guard = self.entries.write().await;
        let removed = keys
            .iter()
            .filter_map(|key| guard.remove(key))
            .filter(|e| e.is_live(now))
            .count();
        Ok(removed as u64)
    }

    async fn scan(&self, pattern: &str, limit: Option<usize>) -> ApplicationResult<Vec<String>> {
        let matcher = Pattern::new(pattern)
            .map_err(|err| ApplicationError::validation(format!("invalid pattern: {err}")))?;
        let now = Instant::now();
        let guard = self.entries.read().await;
        let mut keys: Vec<String> = guard
            .iter()
            .filter(|(key, e)| e.is_live(now) && matcher.matches(key))
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        if let Some(limit) = limit {
            keys.truncate(limit);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_if_absent_is_write_once() {
        let store = InMemoryCacheStore::new();
        assert!(store.set_if_absent("slug:nerima", "a").await.unwrap());
        assert!(!store.set_if_absent("slug:nerima", "b").await.unwrap());
        assert_eq!(store.get("slug:nerima").await.unwrap().as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn expired_entries_are_invisible() {
        let store = InMemoryCacheStore::new();
        store.set("search:x", "[]", Some(Duration::ZERO)).await.unwrap();
        assert!(!store.exists("search:x").await.unwrap());
        assert!(store.get("search:x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn writes_drop_expired_entries() {
        let store = InMemoryCacheStore::new();
        store.set("search:old", "[]", Some(Duration::ZERO)).await.unwrap();
        store.set("search:older", "[]", Some(Duration::ZERO)).await.unwrap();
        store.set("place:a", "{}", None).await.unwrap();
        assert_eq!(store.entries.read().await.len(), 1);

        store.set("search:gone", "[]", Some(Duration::ZERO)).await.unwrap();
        assert!(store.set_if_absent("slug:nerima", "a").await.unwrap());
        let raw = store.entries.read().await;
        assert_eq!(raw.len(), 2);
        assert!(raw.contains_key("place:a") && raw.contains_key("slug:nerima"));
    }

    #[tokio::test]
    async fn scan_matches_glob_and_honors_limit() {
        let store = InMemoryCacheStore::new();
        for key in ["search:a", "search:b", "place:a"] {
            store.set(key, "{}", None).await.unwrap();
        }
        let all = store.scan("search:*", None).await.unwrap();
        assert_eq!(all, vec!["search:a".to_string(), "search:b".to_string()]);
        assert_eq!(store.scan("search:*", Some(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_counts_existing_keys() {
        let store = InMemoryCacheStore::new();
        store.set("place:a", "{}", None).await.unwrap();
        let removed = store
            .delete(&["place:a".to_string(), "place:missing".to_string()])
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert!(store.is_empty().await);
    }
}
