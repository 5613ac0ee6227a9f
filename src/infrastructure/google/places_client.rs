// src/infrastructure/google/places_client.rs
use std::time::Duration;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::places::PlacesClient,
};
use crate::domain::place::{GeoPoint, PhotoMedia, PhotoName, PhotoRef, Place, PlaceId, PlaceReview};
use crate::infrastructure::http::{build_client, ensure_success, transport_error};
use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com";

const SERVICE: &str = "places";
const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.location,places.rating,places.userRatingCount,places.photos";
const DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,location,rating,\
userRatingCount,nationalPhoneNumber,websiteUri,googleMapsUri,regularOpeningHours,photos,reviews";
const LANGUAGE: &str = "ja";
const REGION: &str = "JP";

/// Google Places API (New) adapter.
pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> ApplicationResult<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(15))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn api_key(&self) -> ApplicationResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("GOOGLE_PLACES_API_KEY is not set"))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextRequest<'a> {
    text_query: &'a str,
    language_code: &'a str,
    region_code: &'a str,
    max_result_count: u32,
}

#[derive(Deserialize, Default)]
struct SearchTextResponse {
    #[serde(default)]
    places: Vec<PlaceResource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceResource {
    id: String,
    display_name: Option<LocalizedText>,
    formatted_address: Option<String>,
    location: Option<LatLng>,
    rating: Option<f32>,
    user_rating_count: Option<u32>,
    national_phone_number: Option<String>,
    website_uri: Option<String>,
    google_maps_uri: Option<String>,
    regular_opening_hours: Option<OpeningHours>,
    #[serde(default)]
    photos: Vec<PhotoResource>,
    #[serde(default)]
    reviews: Vec<ReviewResource>,
}

#[derive(Deserialize)]
struct LocalizedText {
    text: String,
}

#[derive(Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpeningHours {
    #[serde(default)]
    weekday_descriptions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoResource {
    name: String,
    width_px: Option<u32>,
    height_px: Option<u32>,
    #[serde(default)]
    author_attributions: Vec<Attribution>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Attribution {
    display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewResource {
    rating: Option<f32>,
    text: Option<LocalizedText>,
    relative_publish_time_description: Option<String>,
    author_attribution: Option<Attribution>,
}

impl From<PlaceResource> for Place {
    fn from(res: PlaceResource) -> Self {
        Place {
            name: res
                .display_name
                .map(|n| n.text)
                .unwrap_or_else(|| res.id.clone()),
            id: res.id,
            address: res.formatted_address,
            location: res.location.map(|l| GeoPoint {
                lat: l.latitude,
                lng: l.longitude,
            }),
            rating: res.rating,
            user_rating_count: res.user_rating_count,
            phone: res.national_phone_number,
            website: res.website_uri,
            google_maps_uri: res.google_maps_uri,
            opening_hours: res
                .regular_opening_hours
                .map(|h| h.weekday_descriptions)
                .unwrap_or_default(),
            photos: res
                .photos
                .into_iter()
                .map(|p| PhotoRef {
                    name: p.name,
                    width: p.width_px,
                    height: p.height_px,
                    attributions: p
                        .author_attributions
                        .into_iter()
                        .filter_map(|a| a.display_name)
                        .collect(),
                })
                .collect(),
            reviews: res
                .reviews
                .into_iter()
                .map(|r| PlaceReview {
                    author: r.author_attribution.and_then(|a| a.display_name),
                    rating: r.rating,
                    text: r.text.map(|t| t.text),
                    relative_time: r.relative_publish_time_description,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn text_search(&self, text: &str, max_results: u32) -> ApplicationResult<Vec<Place>> {
        let key = self.api_key()?;
        let body = SearchTextRequest {
            text_query: text,
            language_code: LANGUAGE,
            region_code: REGION,
            max_result_count: max_results,
        };

        let response = self
            .client
            .post(format!("{}/v1/places:searchText", self.base_url))
            .header("X-Goog-Api-Key", key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error(SERVICE, &err))?;
        let response = ensure_success(SERVICE, response).await?;

        let parsed: SearchTextResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("places search decode: {err}")))?;
        Ok(parsed.places.into_iter().map(Place::from).collect())
    }

    async fn place_details(&self, id: &PlaceId) -> ApplicationResult<Place> {
        let key = self.api_key()?;
        let response = self
            .client
            .get(format!("{}/v1/places/{id}", self.base_url))
            .query(&[("languageCode", LANGUAGE), ("regionCode", REGION)])
            .header("X-Goog-Api-Key", key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .send()
            .await
            .map_err(|err| transport_error(SERVICE, &err))?;
        let response = ensure_success(SERVICE, response).await?;

        let parsed: PlaceResource = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("place details decode: {err}")))?;
        Ok(parsed.into())
    }

    async fn photo(&self, name: &PhotoName, max_width: u32) -> ApplicationResult<PhotoMedia> {
        let key = self.api_key()?;
        // The media endpoint answers with a redirect to the image, which
        // reqwest follows.
        let response = self
            .client
            .get(format!("{}/v1/{name}/media", self.base_url))
            .query(&[("maxWidthPx", max_width)])
            .header("X-Goog-Api-Key", key)
            .send()
            .await
            .map_err(|err| transport_error(SERVICE, &err))?;
        let response = ensure_success(SERVICE, response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| transport_error(SERVICE, &err))?;

        Ok(PhotoMedia {
            content_type,
            bytes,
        })
    }
}
