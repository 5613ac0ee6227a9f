// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, descriptions, places, regions, slugs},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use super::extractors::ADMIN_KEY_HEADER;

/// Router without rate limiting, as used by tests and tools.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, false)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let origins = AppConfig::allowed_origins_from_env();
    build_router_with_options(state, &origins, rate_limited)
}

pub fn build_router_with_options(
    state: HttpState,
    allowed_origins: &[String],
    rate_limited: bool,
) -> Router {
    let api = api_routes();
    let api = if rate_limited {
        api.layer(rate_limit_layer())
    } else {
        api
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/v1/places/search", get(places::search_places))
        .route("/api/v1/places/photo", get(places::get_photo))
        .route("/api/v1/places/{place_id}", get(places::get_place))
        .route(
            "/api/v1/places/{place_id}/description",
            get(descriptions::get_description),
        )
        .route(
            "/api/v1/places/{place_id}/description/regenerate",
            post(descriptions::regenerate_description),
        )
        .route("/api/v1/slugs", post(slugs::register_slug))
        .route("/api/v1/slugs/resolve", get(slugs::resolve_slug))
        .route(
            "/api/v1/slugs/by-prefix/{prefix}",
            get(slugs::get_place_by_prefix),
        )
        .route("/api/v1/slugs/{slug}", get(slugs::get_place_by_slug))
        .route("/api/v1/prefectures", get(regions::list_prefectures))
        .route(
            "/api/v1/prefectures/{code}/areas",
            get(regions::list_prefecture_areas),
        )
        .route("/api/v1/areas/{slug}", get(regions::get_area))
        .route(
            "/api/v1/areas/{slug}/funeral-homes",
            get(regions::search_area),
        )
        .route("/api/v1/admin/cache/clear", post(admin::clear_cache))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(ADMIN_KEY_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
