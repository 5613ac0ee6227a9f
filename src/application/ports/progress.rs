// src/application/ports/progress.rs
use crate::application::{ApplicationResult, dto::ClearProgressDto};
use async_trait::async_trait;

/// Receives running counters while a cache clear is in progress.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn record(&self, progress: &ClearProgressDto) -> ApplicationResult<()>;
}
