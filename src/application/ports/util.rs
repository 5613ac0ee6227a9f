// src/application/ports/util.rs
pub trait TokenGenerator: Send + Sync {
    /// Short random token used when no deterministic slug can be built.
    fn random_token(&self) -> String;
}
