// src/domain/place/value_objects.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    slug::clean::MAX_SLUG_LEN,
};
use std::fmt;

const MAX_PLACE_ID_LEN: usize = 256;
pub const ID_PREFIX_LEN: usize = 8;

/// Opaque identifier issued by the mapping provider for a point of interest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::Validation("place id cannot be empty".into()));
        }
        if value.len() > MAX_PLACE_ID_LEN {
            return Err(DomainError::Validation("place id is too long".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "place id may only contain ASCII letters, digits, '-' and '_'".into(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight lowercase alphanumeric characters of the id.
    pub fn short_prefix(&self) -> String {
        self.0
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .take(ID_PREFIX_LEN)
            .collect()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PlaceId> for String {
    fn from(value: PlaceId) -> Self {
        value.0
    }
}

/// URL-safe ASCII identifier derived from a Japanese name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation("slug is too long".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(
                "slug may only contain a-z, 0-9 and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Resource name of a place photo, e.g. `places/{id}/photos/{ref}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoName(String);

impl PhotoName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let valid = value.starts_with("places/")
            && value.contains("/photos/")
            && !value.contains("..")
            && !value.ends_with('/')
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_'));
        if !valid {
            return Err(DomainError::Validation(format!(
                "invalid photo name: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
