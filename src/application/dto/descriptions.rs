use crate::domain::insight::{FacilityProfile, QaPair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QaPairDto {
    pub question: String,
    pub answer: String,
}

impl From<QaPair> for QaPairDto {
    fn from(pair: QaPair) -> Self {
        Self {
            question: pair.question,
            answer: pair.answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FacilityProfileDto {
    pub title: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<String>,
    #[serde(default)]
    pub qa: Vec<QaPairDto>,
    #[serde(default)]
    pub owner_messages: Vec<String>,
}

impl From<FacilityProfile> for FacilityProfileDto {
    fn from(profile: FacilityProfile) -> Self {
        Self {
            title: profile.title,
            address: profile.address,
            phone: profile.phone,
            rating: profile.rating,
            review_count: profile.review_count,
            reviews: profile.reviews,
            qa: profile.qa.into_iter().map(Into::into).collect(),
            owner_messages: profile.owner_messages,
        }
    }
}

/// AI-generated description of a facility, as cached under
/// `description:{placeId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DescriptionDto {
    pub place_id: String,
    pub name: String,
    pub text: String,
    pub profile: Option<FacilityProfileDto>,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub cached: bool,
    /// True when no attempt passed the quality checks and the text is a
    /// best-effort fallback.
    #[serde(default)]
    pub degraded: bool,
}
