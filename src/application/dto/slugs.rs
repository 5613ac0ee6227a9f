use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugMappingDto {
    pub slug: String,
    pub place_id: String,
    pub id_prefix: String,
    /// Fallback tier that produced the slug; absent when an existing mapping
    /// was returned.
    pub source: Option<String>,
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub slug: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlaceIdDto {
    pub place_id: String,
}
