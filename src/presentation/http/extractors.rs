// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::state::{HttpState, digest},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Proof that the request carried the admin key, either as `x-admin-key`
/// or as a bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure("application state missing"))
            })?;

        let expected = app_state.admin_key_digest().ok_or_else(|| {
            HttpError::from_error(ApplicationError::configuration("ADMIN_API_KEY is not set"))
        })?;

        let presented = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| {
                parts
                    .headers
                    .typed_get::<Authorization<Bearer>>()
                    .map(|header| header.token().to_string())
            })
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("missing admin key"))
            })?;

        // Digests, not raw keys.
        if digest(presented.trim()) == *expected {
            Ok(Self)
        } else {
            Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin key",
            )))
        }
    }
}
