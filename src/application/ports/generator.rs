// src/application/ports/generator.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Generative text model with web grounding.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String>;

    /// Model identifier recorded alongside generated output.
    fn model(&self) -> &str;
}
