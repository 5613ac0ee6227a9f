use std::{sync::Arc, time::Duration};

use crate::application::ports::{cache::CacheStore, time::Clock};

/// Batching and retry knobs for bulk deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearPolicy {
    pub batch_size: usize,
    /// Individual retries per key after its batch failed to remove it.
    pub max_retries: u32,
    /// Retry `n` sleeps `retry_delay * n`.
    pub retry_delay: Duration,
    pub batch_pause: Duration,
}

impl Default for ClearPolicy {
    fn default() -> Self {
        Self {
            batch_size: 50,
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
            batch_pause: Duration::from_millis(100),
        }
    }
}

pub struct CacheCommandService {
    pub(super) store: Arc<dyn CacheStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) policy: ClearPolicy,
}

impl CacheCommandService {
    pub fn new(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>, policy: ClearPolicy) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }
}
