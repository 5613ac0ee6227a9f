// src/presentation/http/controllers/regions.rs
use crate::application::{
    dto::{AreaDto, AreaSearchDto, PrefectureAreasDto, PrefectureDto},
    queries::regions::{GetAreaQuery, ListPrefectureAreasQuery, SearchAreaQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AreaSearchParams {
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/prefectures",
    responses((status = 200, description = "All 47 prefectures.", body = [PrefectureDto])),
    tag = "Regions"
)]
pub async fn list_prefectures(Extension(state): Extension<HttpState>) -> Json<Vec<PrefectureDto>> {
    Json(state.services.region_queries.list_prefectures())
}

#[utoipa::path(
    get,
    path = "/api/v1/prefectures/{code}/areas",
    params(("code" = u8, Path, description = "JIS prefecture code, 1-47")),
    responses(
        (status = 200, description = "Areas of the prefecture by priority.", body = PrefectureAreasDto),
        (status = 404, description = "Unknown prefecture.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn list_prefecture_areas(
    Extension(state): Extension<HttpState>,
    Path(code): Path<u8>,
) -> HttpResult<Json<PrefectureAreasDto>> {
    state
        .services
        .region_queries
        .list_prefecture_areas(ListPrefectureAreasQuery { code })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/areas/{slug}",
    params(("slug" = String, Path, description = "Area romaji slug")),
    responses(
        (status = 200, description = "Area entry.", body = AreaDto),
        (status = 404, description = "Unknown area.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn get_area(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<AreaDto>> {
    state
        .services
        .region_queries
        .get_area(GetAreaQuery { slug })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/areas/{slug}/funeral-homes",
    params(("slug" = String, Path, description = "Area romaji slug"), AreaSearchParams),
    responses(
        (status = 200, description = "Funeral homes in the area.", body = AreaSearchDto),
        (status = 404, description = "Unknown area.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Upstream or configuration failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn search_area(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<AreaSearchParams>,
) -> HttpResult<Json<AreaSearchDto>> {
    state
        .services
        .region_queries
        .search_area(SearchAreaQuery {
            slug,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
