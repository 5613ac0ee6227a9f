// src/presentation/http/controllers/admin.rs
use crate::application::{commands::cache::ClearNamespaceCommand, dto::ClearCacheReportDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAccess;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClearCacheRequest {
    /// One of `description`, `place`, `search`, `slug`, `prefix`.
    pub namespace: String,
    /// Glob applied after `{namespace}:`; defaults to `*`.
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/cache/clear",
    request_body = ClearCacheRequest,
    responses(
        (status = 200, description = "Clear report.", body = ClearCacheReportDto),
        (status = 400, description = "Unknown namespace.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or wrong admin key.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Admin key not configured or store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("adminKey" = [])),
    tag = "Admin"
)]
pub async fn clear_cache(
    Extension(state): Extension<HttpState>,
    _admin: AdminAccess,
    Json(payload): Json<ClearCacheRequest>,
) -> HttpResult<Json<ClearCacheReportDto>> {
    let report = state
        .services
        .cache_commands
        .clear_namespace(ClearNamespaceCommand {
            namespace: payload.namespace,
            suffix: payload.pattern,
            dry_run: payload.dry_run,
        })
        .await
        .into_http()?;

    tracing::info!(
        pattern = %report.pattern,
        deleted = report.deleted,
        failed = report.failed.len(),
        "admin cache clear"
    );
    Ok(Json(report))
}
