// src/domain/place/entity.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub attributions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author: Option<String>,
    pub rating: Option<f32>,
    pub text: Option<String>,
    pub relative_time: Option<String>,
}

/// A facility as returned by the places provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_uri: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
}

impl Place {
    pub fn primary_photo(&self) -> Option<&PhotoRef> {
        self.photos.first()
    }
}

/// Raw photo bytes proxied from the provider.
#[derive(Debug, Clone)]
pub struct PhotoMedia {
    pub content_type: String,
    pub bytes: bytes::Bytes,
}
