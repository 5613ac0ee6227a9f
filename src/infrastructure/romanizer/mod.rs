// src/infrastructure/romanizer/mod.rs
use std::time::Duration;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::romanizer::Romanizer,
};
use crate::infrastructure::http::{build_client, ensure_success, transport_error};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SERVICE: &str = "romanizer";

/// Client for the morphological-analysis service: `POST {url}` with
/// `{"text": ..}` answering `{"romaji": ..}`.
pub struct HttpRomanizer {
    client: Client,
    url: String,
}

impl HttpRomanizer {
    pub fn new(url: impl Into<String>) -> ApplicationResult<Self> {
        Ok(Self {
            // The slug chain falls through on failure, so keep this short.
            client: build_client(Duration::from_secs(3))?,
            url: url.into(),
        })
    }
}

#[derive(Serialize)]
struct RomanizeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct RomanizeResponse {
    romaji: String,
}

#[async_trait]
impl Romanizer for HttpRomanizer {
    async fn romanize(&self, text: &str) -> ApplicationResult<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&RomanizeRequest { text })
            .send()
            .await
            .map_err(|err| transport_error(SERVICE, &err))?;
        let response = ensure_success(SERVICE, response).await?;

        let parsed: RomanizeResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("romanizer decode: {err}")))?;
        Ok(parsed.romaji)
    }
}
