// src/infrastructure/google/mod.rs
pub mod gemini_client;
pub mod places_client;

pub use gemini_client::GeminiClient;
pub use places_client::GooglePlacesClient;
