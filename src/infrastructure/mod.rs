// src/infrastructure/mod.rs
pub mod cache;
pub mod google;
pub mod http;
pub mod logging;
pub mod progress;
pub mod romanizer;
pub mod time;
pub mod util;
