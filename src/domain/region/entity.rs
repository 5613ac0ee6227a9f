// src/domain/region/entity.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Municipality,
    Station,
    Area,
}

impl RegionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Municipality => "municipality",
            RegionKind::Station => "station",
            RegionKind::Area => "area",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the static municipality/station lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionEntry {
    pub name: String,
    pub romaji: String,
    pub kind: RegionKind,
    /// 1 is the most prominent, 5 the least.
    pub priority: u8,
    #[serde(default)]
    pub prefecture_code: Option<u8>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub line_ids: Vec<String>,
}

impl RegionEntry {
    pub fn has_valid_romaji(&self) -> bool {
        is_slug_text(&self.romaji)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefecture {
    pub code: u8,
    pub name: String,
    pub romaji: String,
    pub region: String,
}

/// Non-empty and limited to `[a-z0-9-]`.
pub fn is_slug_text(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
