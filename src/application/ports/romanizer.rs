// src/application/ports/romanizer.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Server-side Japanese morphological analyzer returning romaji.
#[async_trait]
pub trait Romanizer: Send + Sync {
    async fn romanize(&self, text: &str) -> ApplicationResult<String>;
}
