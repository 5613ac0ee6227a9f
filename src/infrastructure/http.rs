// src/infrastructure/http.rs
//! Shared plumbing for outbound HTTP adapters.

use std::time::Duration;

use crate::application::error::ApplicationError;
use reqwest::{Client, Response};

const USER_AGENT: &str = concat!("sougi-core/", env!("CARGO_PKG_VERSION"));
/// Upstream error bodies are echoed in logs and errors up to this length.
const MAX_ERROR_BODY: usize = 300;

pub fn build_client(timeout: Duration) -> Result<Client, ApplicationError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))
}

pub fn transport_error(service: &str, err: &reqwest::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("{service} request failed: {err}"))
}

/// Pass successful responses through; turn anything else into an
/// `Upstream` error carrying the status and a prefix of the body.
pub async fn ensure_success(service: &str, response: Response) -> Result<Response, ApplicationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(MAX_ERROR_BODY).collect();
    tracing::warn!(service, status = status.as_u16(), body = %snippet, "upstream call failed");
    Err(ApplicationError::upstream(
        status.as_u16(),
        format!("{service}: {snippet}"),
    ))
}
