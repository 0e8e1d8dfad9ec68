//! Nominatim（OpenStreetMap地名検索）クライアント

use super::types::Place;
use super::PlaceSearch;
use crate::config::Config;
use crate::error::{MullaiError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| MullaiError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.geocoder_url,
            &config.user_agent,
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

#[async_trait]
impl PlaceSearch for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<Place>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%url, query, "place search request");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MullaiError::Resolver(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        let places: Vec<Place> = serde_json::from_str(&body)
            .map_err(|e| MullaiError::Resolver(format!("response parse failed: {}", e)))?;

        tracing::debug!(results = places.len(), "place search response");
        Ok(places)
    }
}
