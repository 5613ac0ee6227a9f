// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use sha2::{Digest, Sha256};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// SHA-256 of the configured admin key; `None` disables admin routes.
    admin_key_digest: Option<[u8; 32]>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, admin_api_key: Option<&str>) -> Self {
        Self {
            services,
            admin_key_digest: admin_api_key.map(digest),
        }
    }

    pub fn admin_key_digest(&self) -> Option<&[u8; 32]> {
        self.admin_key_digest.as_ref()
    }
}

pub(crate) fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
