//! PokeAPI HTTP client
//!
//! Thin reqwest wrapper: builds resource URLs, enforces a request timeout and
//! turns non-success statuses into `Fetch` errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::PageEnvelope;
use crate::pager::PageSource;

/// HTTP client for the PokeAPI (or anything serving the same shapes)
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex_cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First page of the location area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// GETs `url` and decodes the JSON body into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Fetch(format!("{url} returned {status}")));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PageSource for PokeApiClient {
    async fn fetch_page(&self, url: &str) -> Result<PageEnvelope> {
        self.fetch_json(url).await
    }
}
