// src/presentation/http/controllers/places.rs
use std::time::{Duration, SystemTime};

use crate::application::{
    dto::{PlaceDetailDto, SearchResultDto},
    queries::places::{GetPhotoQuery, GetPlaceDetailsQuery, SearchPlacesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Browsers may keep proxied photos for a day.
const PHOTO_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SearchParams {
    /// Free-text query, e.g. a ward name or facility name.
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PhotoParams {
    /// Photo resource name, `places/{id}/photos/{ref}`.
    pub name: String,
    pub max_width: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/places/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Funeral homes matching the query.", body = SearchResultDto),
        (status = 400, description = "Empty or oversized query.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Upstream or configuration failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Places"
)]
pub async fn search_places(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultDto>> {
    state
        .services
        .place_queries
        .search_places(SearchPlacesQuery {
            query: params.q,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{place_id}",
    params(("place_id" = String, Path, description = "Provider place identifier")),
    responses(
        (status = 200, description = "Place details.", body = PlaceDetailDto),
        (status = 400, description = "Malformed place id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown place.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Upstream or configuration failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Places"
)]
pub async fn get_place(
    Extension(state): Extension<HttpState>,
    Path(place_id): Path<String>,
) -> HttpResult<Json<PlaceDetailDto>> {
    state
        .services
        .place_queries
        .get_place_details(GetPlaceDetailsQuery { place_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/places/photo",
    params(PhotoParams),
    responses(
        (status = 200, description = "Photo bytes with the upstream content type.", content_type = "image/*"),
        (status = 400, description = "Invalid photo name or width.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown photo.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Places"
)]
pub async fn get_photo(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PhotoParams>,
) -> HttpResult<Response> {
    let media = state
        .services
        .place_queries
        .get_photo(GetPhotoQuery {
            name: params.name,
            max_width: params.max_width,
        })
        .await
        .into_http()?;

    let content_type = HeaderValue::from_str(&media.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    let cache_control = format!("public, max-age={}", PHOTO_MAX_AGE.as_secs());
    let expires = httpdate::fmt_http_date(SystemTime::now() + PHOTO_MAX_AGE);

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_str(&cache_control)
                    .unwrap_or_else(|_| HeaderValue::from_static("public")),
            ),
            (
                header::EXPIRES,
                HeaderValue::from_str(&expires).unwrap_or_else(|_| HeaderValue::from_static("0")),
            ),
        ],
        media.bytes,
    )
        .into_response())
}
