// src/infrastructure/progress.rs
use std::path::{Path, PathBuf};

use crate::application::{
    ApplicationResult, dto::ClearProgressDto, error::ApplicationError,
    ports::progress::ProgressSink,
};
use async_trait::async_trait;

/// Rewrites a JSON snapshot of the running counters after every batch.
///
/// The snapshot goes to a sibling temp file first and is renamed into
/// place, so readers never observe a half-written file.
pub struct FileProgressSink {
    path: PathBuf,
}

impl FileProgressSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressSink for FileProgressSink {
    async fn record(&self, progress: &ClearProgressDto) -> ApplicationResult<()> {
        let json = serde_json::to_vec_pretty(progress)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|err| {
            ApplicationError::infrastructure(format!("{}: {err}", self.path.display()))
        })?;
        Ok(())
    }
}
