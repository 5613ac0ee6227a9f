mod clear;
mod service;

pub use clear::{ClearCacheCommand, ClearNamespaceCommand};
pub use service::{CacheCommandService, ClearPolicy};
