// src/application/ports/mod.rs
pub mod cache;
pub mod generator;
pub mod places;
pub mod progress;
pub mod romanizer;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type CacheStorePort = dyn cache::CacheStore;
pub type PlacesClientPort = dyn places::PlacesClient;
pub type TextGeneratorPort = dyn generator::TextGenerator;
pub type RomanizerPort = dyn romanizer::Romanizer;
pub type ClockPort = dyn time::Clock;
pub type TokenGeneratorPort = dyn util::TokenGenerator;
