// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::ADMIN_KEY_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::places::search_places,
        crate::presentation::http::controllers::places::get_photo,
        crate::presentation::http::controllers::places::get_place,
        crate::presentation::http::controllers::descriptions::get_description,
        crate::presentation::http::controllers::descriptions::regenerate_description,
        crate::presentation::http::controllers::slugs::register_slug,
        crate::presentation::http::controllers::slugs::resolve_slug,
        crate::presentation::http::controllers::slugs::get_place_by_prefix,
        crate::presentation::http::controllers::slugs::get_place_by_slug,
        crate::presentation::http::controllers::regions::list_prefectures,
        crate::presentation::http::controllers::regions::list_prefecture_areas,
        crate::presentation::http::controllers::regions::get_area,
        crate::presentation::http::controllers::regions::search_area,
        crate::presentation::http::controllers::admin::clear_cache,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::slugs::RegisterSlugRequest,
            crate::presentation::http::controllers::admin::ClearCacheRequest,
            crate::application::dto::SearchResultDto,
            crate::application::dto::PlaceSummaryDto,
            crate::application::dto::PlaceDetailDto,
            crate::application::dto::GeoPointDto,
            crate::application::dto::PhotoDto,
            crate::application::dto::ReviewDto,
            crate::application::dto::DescriptionDto,
            crate::application::dto::FacilityProfileDto,
            crate::application::dto::QaPairDto,
            crate::application::dto::SlugMappingDto,
            crate::application::dto::SlugPreviewDto,
            crate::application::dto::PlaceIdDto,
            crate::application::dto::PrefectureDto,
            crate::application::dto::AreaDto,
            crate::application::dto::PrefectureAreasDto,
            crate::application::dto::AreaSearchDto,
            crate::application::dto::ClearCacheReportDto,
            crate::application::dto::FailedKeyDto
        )
    ),
    tags(
        (name = "Places", description = "Funeral home search, details and photos"),
        (name = "Descriptions", description = "AI-generated facility descriptions"),
        (name = "Slugs", description = "Romaji slugs and place id mappings"),
        (name = "Regions", description = "Prefectures, areas and area search"),
        (name = "Admin", description = "Maintenance endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Sougi API",
        description = "Funeral home search backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "adminKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
