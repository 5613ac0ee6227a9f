// src/presentation/http/controllers/descriptions.rs
use crate::application::{commands::descriptions::GetDescriptionCommand, dto::DescriptionDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAccess;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/places/{place_id}/description",
    params(("place_id" = String, Path, description = "Provider place identifier")),
    responses(
        (status = 200, description = "Cached or freshly generated description.", body = DescriptionDto),
        (status = 400, description = "Malformed place id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown place.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Generation or configuration failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Descriptions"
)]
pub async fn get_description(
    Extension(state): Extension<HttpState>,
    Path(place_id): Path<String>,
) -> HttpResult<Json<DescriptionDto>> {
    state
        .services
        .description_commands
        .get_description(GetDescriptionCommand {
            place_id,
            force_refresh: false,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/places/{place_id}/description/regenerate",
    params(("place_id" = String, Path, description = "Provider place identifier")),
    responses(
        (status = 200, description = "Newly generated description.", body = DescriptionDto),
        (status = 401, description = "Missing or wrong admin key.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Generation or configuration failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminKey" = [])),
    tag = "Descriptions"
)]
pub async fn regenerate_description(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Path(place_id): Path<String>,
) -> HttpResult<Json<DescriptionDto>> {
    state
        .services
        .description_commands
        .get_description(GetDescriptionCommand {
            place_id,
            force_refresh: true,
        })
        .await
        .into_http()
        .map(Json)
}
