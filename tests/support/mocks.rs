// tests/support/mocks.rs
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sougi_core::application::ApplicationResult;
use sougi_core::application::error::ApplicationError;
use sougi_core::application::ports::{
    cache::CacheStore, generator::TextGenerator, places::PlacesClient, romanizer::Romanizer,
    time::Clock, util::TokenGenerator,
};
use sougi_core::domain::place::{PhotoMedia, PhotoName, Place, PlaceId};
use sougi_core::infrastructure::cache::InMemoryCacheStore;

/// Places provider answering from a fixed list.
#[derive(Default)]
pub struct StubPlaces {
    pub places: Vec<Place>,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub last_search: Mutex<Option<String>>,
}

impl StubPlaces {
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            ..Self::default()
        }
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn details(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn last_search_text(&self) -> Option<String> {
        self.last_search.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesClient for StubPlaces {
    async fn text_search(&self, text: &str, max_results: u32) -> ApplicationResult<Vec<Place>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some(text.to_string());
        Ok(self
            .places
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn place_details(&self, id: &PlaceId) -> ApplicationResult<Place> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.places
            .iter()
            .find(|p| p.id == id.as_str())
            .cloned()
            .ok_or_else(|| ApplicationError::upstream(404, "places: NOT_FOUND"))
    }

    async fn photo(&self, _name: &PhotoName, _max_width: u32) -> ApplicationResult<PhotoMedia> {
        Ok(PhotoMedia {
            content_type: "image/png".into(),
            bytes: bytes::Bytes::from_static(b"\x89PNG fake"),
        })
    }
}

/// Generator replaying a script of outputs, one per call.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<ApplicationResult<String>>>,
    pub calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(outputs: Vec<ApplicationResult<String>>) -> Self {
        Self {
            script: Mutex::new(outputs.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(text: &str) -> Self {
        Self::new((0..8).map(|_| Ok(text.to_string())).collect())
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> ApplicationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApplicationError::generation("script exhausted")))
    }

    fn model(&self) -> &str {
        "test-model"
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct FixedToken;

impl TokenGenerator for FixedToken {
    fn random_token(&self) -> String {
        "deadbeef".into()
    }
}

/// Romanizer answering from a lookup table; unknown input is an error.
#[derive(Default)]
pub struct TableRomanizer {
    pub table: HashMap<String, String>,
}

impl TableRomanizer {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            table: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl Romanizer for TableRomanizer {
    async fn romanize(&self, text: &str) -> ApplicationResult<String> {
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| ApplicationError::infrastructure("romanizer: no reading"))
    }
}

/// In-memory store whose deletes misbehave for selected keys.
///
/// `failing` keys make any delete touching them error out `n` times.
/// `sticky` keys survive `n` successful-looking deletes.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: InMemoryCacheStore,
    failing: Mutex<HashMap<String, usize>>,
    sticky: Mutex<HashMap<String, usize>>,
    pub delete_calls: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_deletes(self, key: &str, times: usize) -> Self {
        self.failing.lock().unwrap().insert(key.to_string(), times);
        self
    }

    pub fn stick(self, key: &str, times: usize) -> Self {
        self.sticky.lock().unwrap().insert(key.to_string(), times);
        self
    }

    fn take(map: &Mutex<HashMap<String, usize>>, key: &str) -> bool {
        let mut guard = map.lock().unwrap();
        match guard.get_mut(key) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl CacheStore for FlakyStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApplicationResult<()> {
        self.inner.set(key, value, ttl).await
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> ApplicationResult<bool> {
        self.inner.set_if_absent(key, value).await
    }

    async fn exists(&self, key: &str) -> ApplicationResult<bool> {
        self.inner.exists(key).await
    }

    async fn delete(&self, keys: &[String]) -> ApplicationResult<u64> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut failed = false;
        for key in keys {
            failed |= Self::take(&self.failing, key);
        }
        if failed {
            return Err(ApplicationError::infrastructure("connection reset"));
        }
        let removable: Vec<String> = keys
            .iter()
            .filter(|key| !Self::take(&self.sticky, key))
            .cloned()
            .collect();
        self.inner.delete(&removable).await
    }

    async fn scan(&self, pattern: &str, limit: Option<usize>) -> ApplicationResult<Vec<String>> {
        self.inner.scan(pattern, limit).await
    }
}

/// Store where every call fails, for error-path tests.
pub struct BrokenStore;

#[async_trait]
impl CacheStore for BrokenStore {
    async fn get(&self, _key: &str) -> ApplicationResult<Option<String>> {
        Err(ApplicationError::infrastructure("store down"))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("store down"))
    }

    async fn set_if_absent(&self, _key: &str, _value: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("store down"))
    }

    async fn exists(&self, _key: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("store down"))
    }

    async fn delete(&self, _keys: &[String]) -> ApplicationResult<u64> {
        Err(ApplicationError::infrastructure("store down"))
    }

    async fn scan(&self, _pattern: &str, _limit: Option<usize>) -> ApplicationResult<Vec<String>> {
        Err(ApplicationError::infrastructure("store down"))
    }
}
