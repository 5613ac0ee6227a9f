// src/presentation/http/controllers/slugs.rs
use crate::application::{
    commands::slugs::RegisterSlugCommand,
    dto::{PlaceIdDto, SlugMappingDto, SlugPreviewDto},
    queries::slugs::{GetPlaceIdByPrefixQuery, GetPlaceIdBySlugQuery, PreviewSlugQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterSlugRequest {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ResolveSlugParams {
    /// Japanese display string: a region name, an address or a facility name.
    #[serde(default)]
    pub text: String,
    pub place_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs",
    request_body = RegisterSlugRequest,
    responses(
        (status = 201, description = "Slug newly bound to the place.", body = SlugMappingDto),
        (status = 200, description = "Place already had this slug.", body = SlugMappingDto),
        (status = 400, description = "Invalid place id or name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn register_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterSlugRequest>,
) -> HttpResult<(StatusCode, Json<SlugMappingDto>)> {
    let mapping = state
        .services
        .slug_commands
        .register_facility_slug(RegisterSlugCommand {
            place_id: payload.place_id,
            name: payload.name,
            address: payload.address,
        })
        .await
        .into_http()?;

    let status = if mapping.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(mapping)))
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/resolve",
    params(ResolveSlugParams),
    responses(
        (status = 200, description = "Slug the fallback chain would produce.", body = SlugPreviewDto),
        (status = 400, description = "Empty text.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn resolve_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ResolveSlugParams>,
) -> HttpResult<Json<SlugPreviewDto>> {
    state
        .services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            text: params.text,
            place_id: params.place_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/{slug}",
    params(("slug" = String, Path, description = "Facility slug")),
    responses(
        (status = 200, description = "Place bound to the slug.", body = PlaceIdDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn get_place_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PlaceIdDto>> {
    state
        .services
        .slug_queries
        .get_place_id_by_slug(GetPlaceIdBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/by-prefix/{prefix}",
    params(("prefix" = String, Path, description = "First 8 lowercase alphanumerics of a place id")),
    responses(
        (status = 200, description = "Place bound to the id prefix.", body = PlaceIdDto),
        (status = 400, description = "Malformed prefix.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown prefix.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn get_place_by_prefix(
    Extension(state): Extension<HttpState>,
    Path(prefix): Path<String>,
) -> HttpResult<Json<PlaceIdDto>> {
    state
        .services
        .slug_queries
        .get_place_id_by_prefix(GetPlaceIdByPrefixQuery { prefix })
        .await
        .into_http()
        .map(Json)
}
