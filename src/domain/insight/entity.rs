// src/domain/insight/entity.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Structured facts about one facility, extracted from generated text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FacilityProfile {
    pub title: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<String>,
    #[serde(default)]
    pub qa: Vec<QaPair>,
    #[serde(default)]
    pub owner_messages: Vec<String>,
}

impl FacilityProfile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
