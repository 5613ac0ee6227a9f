// src/application/cache_keys.rs
//! Key schema of the shared key-value store.

use crate::domain::place::{PlaceId, SearchQuery, Slug};

pub const DESCRIPTION: &str = "description";
pub const PLACE: &str = "place";
pub const SEARCH: &str = "search";
pub const SLUG: &str = "slug";
pub const PREFIX: &str = "prefix";

/// Namespaces an administrator may clear over HTTP.
pub const NAMESPACES: &[&str] = &[DESCRIPTION, PLACE, SEARCH, SLUG, PREFIX];

pub fn description(id: &PlaceId) -> String {
    format!("{DESCRIPTION}:{id}")
}

pub fn place(id: &PlaceId) -> String {
    format!("{PLACE}:{id}")
}

pub fn search(query: &SearchQuery) -> String {
    format!("{SEARCH}:{query}")
}

pub fn slug(slug: &Slug) -> String {
    format!("{SLUG}:{slug}")
}

pub fn id_prefix(prefix: &str) -> String {
    format!("{PREFIX}:{prefix}")
}

/// Glob covering a whole namespace, optionally narrowed by a suffix glob.
pub fn namespace_pattern(namespace: &str, suffix: Option<&str>) -> Option<String> {
    if !NAMESPACES.contains(&namespace) {
        return None;
    }
    let suffix = suffix.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("*");
    Some(format!("{namespace}:{suffix}"))
}
