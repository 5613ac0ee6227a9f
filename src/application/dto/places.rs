use crate::domain::place::{GeoPoint, PhotoRef, Place, PlaceReview};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPointDto {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoPoint> for GeoPointDto {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub attributions: Vec<String>,
}

impl From<PhotoRef> for PhotoDto {
    fn from(photo: PhotoRef) -> Self {
        Self {
            name: photo.name,
            width: photo.width,
            height: photo.height,
            attributions: photo.attributions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub author: Option<String>,
    pub rating: Option<f32>,
    pub text: Option<String>,
    pub relative_time: Option<String>,
}

impl From<PlaceReview> for ReviewDto {
    fn from(review: PlaceReview) -> Self {
        Self {
            author: review.author,
            rating: review.rating,
            text: review.text,
            relative_time: review.relative_time,
        }
    }
}

/// Listing entry returned by text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceSummaryDto {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<GeoPointDto>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub photo_name: Option<String>,
}

impl From<Place> for PlaceSummaryDto {
    fn from(place: Place) -> Self {
        let photo_name = place.primary_photo().map(|p| p.name.clone());
        Self {
            id: place.id,
            name: place.name,
            address: place.address,
            location: place.location.map(Into::into),
            rating: place.rating,
            user_rating_count: place.user_rating_count,
            photo_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetailDto {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<GeoPointDto>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_uri: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PhotoDto>,
    #[serde(default)]
    pub reviews: Vec<ReviewDto>,
    #[serde(default)]
    pub cached: bool,
}

impl From<Place> for PlaceDetailDto {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            address: place.address,
            location: place.location.map(Into::into),
            rating: place.rating,
            user_rating_count: place.user_rating_count,
            phone: place.phone,
            website: place.website,
            google_maps_uri: place.google_maps_uri,
            opening_hours: place.opening_hours,
            photos: place.photos.into_iter().map(Into::into).collect(),
            reviews: place.reviews.into_iter().map(Into::into).collect(),
            cached: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    /// Normalized query used as the cache key.
    pub query: String,
    pub results: Vec<PlaceSummaryDto>,
    pub cached: bool,
}
