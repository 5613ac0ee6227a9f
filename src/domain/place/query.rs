// src/domain/place/query.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_QUERY_CHARS: usize = 200;

/// Keywords that already narrow a text search to funeral facilities.
const FACILITY_KEYWORDS: &[&str] = &["葬儀", "斎場", "葬祭", "セレモニー", "会館", "funeral"];
const DEFAULT_FACILITY_KEYWORD: &str = "葬儀場";

/// A user search string normalized into the form used for cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let normalized = normalize_query(raw);
        if normalized.is_empty() {
            return Err(DomainError::Validation("search query cannot be empty".into()));
        }
        if normalized.chars().count() > MAX_QUERY_CHARS {
            return Err(DomainError::Validation("search query is too long".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text sent to the provider: the query itself, narrowed to funeral homes
    /// when it does not already name a facility type.
    pub fn provider_text(&self) -> String {
        if FACILITY_KEYWORDS.iter().any(|k| self.0.contains(k)) {
            self.0.clone()
        } else {
            format!("{} {}", self.0, DEFAULT_FACILITY_KEYWORD)
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full-width ASCII and ideographic spaces become ASCII, whitespace runs
/// collapse to one space, ASCII letters are lowercased.
pub fn normalize_query(raw: &str) -> String {
    let mapped: String = raw.chars().map(fold_width).collect();
    mapped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Map full-width forms (U+FF01..U+FF5E) and U+3000 onto ASCII.
pub fn fold_width(c: char) -> char {
    match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}
