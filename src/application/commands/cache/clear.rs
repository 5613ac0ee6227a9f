use std::time::Duration;

use super::CacheCommandService;
use crate::application::{
    cache_keys,
    dto::{ClearCacheReportDto, ClearProgressDto, FailedKeyDto},
    error::{ApplicationError, ApplicationResult},
    ports::progress::ProgressSink,
};

pub struct ClearCacheCommand {
    pub pattern: String,
    pub limit: Option<usize>,
    /// Confirm each deletion with an existence check.
    pub verify: bool,
    pub dry_run: bool,
}

pub struct ClearNamespaceCommand {
    pub namespace: String,
    /// Optional glob narrowing the keys inside the namespace.
    pub suffix: Option<String>,
    pub dry_run: bool,
}

#[derive(Default)]
struct Tally {
    deleted: usize,
    verified: usize,
    failed: Vec<FailedKeyDto>,
}

impl CacheCommandService {
    /// Scan, delete in batches, verify, and retry stubborn keys one by one.
    ///
    /// Every scanned key ends up either absent or listed in `failed`.
    pub async fn clear_cache(
        &self,
        command: ClearCacheCommand,
        progress: Option<&dyn ProgressSink>,
    ) -> ApplicationResult<ClearCacheReportDto> {
        let pattern = command.pattern.trim().to_string();
        if pattern.is_empty() {
            return Err(ApplicationError::validation("pattern must not be empty"));
        }
        let batch_size = self.policy.batch_size.max(1);

        let keys = self.store.scan(&pattern, command.limit).await?;
        let batches_total = keys.len().div_ceil(batch_size);
        tracing::info!(%pattern, scanned = keys.len(), batches = batches_total, "cache clear scanned");

        if command.dry_run {
            return Ok(ClearCacheReportDto {
                pattern,
                scanned: keys.len(),
                deleted: 0,
                verified: 0,
                failed: Vec::new(),
                batches: batches_total,
                dry_run: true,
            });
        }

        let mut tally = Tally::default();
        let mut processed = 0;

        for (index, batch) in keys.chunks(batch_size).enumerate() {
            if index > 0 && !self.policy.batch_pause.is_zero() {
                tokio::time::sleep(self.policy.batch_pause).await;
            }

            let pending = self.delete_batch(batch, command.verify, &mut tally).await;
            for key in pending {
                self.retry_key(key, command.verify, &mut tally).await;
            }
            processed += batch.len();

            if let Some(sink) = progress {
                let snapshot = ClearProgressDto {
                    pattern: pattern.clone(),
                    scanned: keys.len(),
                    processed,
                    deleted: tally.deleted,
                    failed: tally.failed.len(),
                    batches_done: index + 1,
                    batches_total,
                    updated_at: self.clock.now(),
                };
                if let Err(err) = sink.record(&snapshot).await {
                    tracing::warn!(error = %err, "could not record clear progress");
                }
            }
        }

        tracing::info!(
            %pattern,
            deleted = tally.deleted,
            failed = tally.failed.len(),
            "cache clear finished"
        );

        Ok(ClearCacheReportDto {
            pattern,
            scanned: keys.len(),
            deleted: tally.deleted,
            verified: tally.verified,
            failed: tally.failed,
            batches: batches_total,
            dry_run: false,
        })
    }

    /// Clear one of the known key namespaces.
    pub async fn clear_namespace(
        &self,
        command: ClearNamespaceCommand,
    ) -> ApplicationResult<ClearCacheReportDto> {
        let pattern = cache_keys::namespace_pattern(&command.namespace, command.suffix.as_deref())
            .ok_or_else(|| {
                ApplicationError::validation(format!(
                    "unknown namespace '{}', expected one of {}",
                    command.namespace,
                    cache_keys::NAMESPACES.join(", ")
                ))
            })?;

        self.clear_cache(
            ClearCacheCommand {
                pattern,
                limit: None,
                verify: true,
                dry_run: command.dry_run,
            },
            None,
        )
        .await
    }

    /// Delete a batch and return the keys that still need individual retries.
    async fn delete_batch<'a>(
        &self,
        batch: &'a [String],
        verify: bool,
        tally: &mut Tally,
    ) -> Vec<&'a str> {
        if let Err(err) = self.store.delete(batch).await {
            tracing::warn!(error = %err, size = batch.len(), "batch delete failed, retrying keys individually");
            return batch.iter().map(String::as_str).collect();
        }
        if !verify {
            tally.deleted += batch.len();
            return Vec::new();
        }

        let mut pending = Vec::new();
        for key in batch {
            match self.store.exists(key).await {
                Ok(false) => {
                    tally.deleted += 1;
                    tally.verified += 1;
                }
                Ok(true) => pending.push(key.as_str()),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "existence check failed");
                    pending.push(key.as_str());
                }
            }
        }
        pending
    }

    async fn retry_key(&self, key: &str, verify: bool, tally: &mut Tally) {
        let mut last_error = String::from("key still present after delete");

        for attempt in 1..=self.policy.max_retries {
            let delay = self.policy.retry_delay * attempt;
            if delay > Duration::ZERO {
                tokio::time::sleep(delay).await;
            }

            if let Err(err) = self.store.delete(&[key.to_string()]).await {
                last_error = err.to_string();
                tracing::debug!(key = %key, attempt, error = %last_error, "retry delete failed");
                continue;
            }
            if !verify {
                tally.deleted += 1;
                return;
            }
            match self.store.exists(key).await {
                Ok(false) => {
                    tally.deleted += 1;
                    tally.verified += 1;
                    return;
                }
                Ok(true) => last_error = String::from("key still present after delete"),
                Err(err) => last_error = err.to_string(),
            }
        }

        tracing::warn!(key = %key, error = %last_error, "giving up on key");
        tally.failed.push(FailedKeyDto {
            key: key.to_string(),
            error: last_error,
        });
    }
}
