// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod descriptions;
pub mod places;
pub mod regions;
pub mod slugs;
