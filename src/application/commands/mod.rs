pub mod cache;
pub mod descriptions;
pub mod slugs;
