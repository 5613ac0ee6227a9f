use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailedKeyDto {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClearCacheReportDto {
    pub pattern: String,
    pub scanned: usize,
    pub deleted: usize,
    /// Keys confirmed absent by an existence check.
    pub verified: usize,
    pub failed: Vec<FailedKeyDto>,
    pub batches: usize,
    pub dry_run: bool,
}

impl ClearCacheReportDto {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Running counters persisted while a clear is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearProgressDto {
    pub pattern: String,
    pub scanned: usize,
    pub processed: usize,
    pub deleted: usize,
    pub failed: usize,
    pub batches_done: usize,
    pub batches_total: usize,
    pub updated_at: DateTime<Utc>,
}
