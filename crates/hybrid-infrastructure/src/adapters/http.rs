//! HTTP client adapter

use crate::constants::HTTP_REQUEST_TIMEOUT_SECS;
use crate::error_ext::ErrorContext;
use async_trait::async_trait;
use hybrid_domain::error::Result;
use hybrid_domain::ports::HttpClient;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// `reqwest` client bound to a base address
///
/// The address is parsed but otherwise taken as given.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestHttpClient {
    /// Create a client for `base_address`
    pub fn new(base_address: &str) -> Result<Self> {
        let base = Url::parse(base_address)
            .config_context(format!("Invalid base address '{base_address}'"))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()
            .http_context("Failed to build HTTP client")?;
        Ok(Self { client, base })
    }

    /// Absolute URL for `relative`
    pub fn url_for(&self, relative: &str) -> Result<Url> {
        self.base
            .join(relative)
            .http_context(format!("Invalid request path '{relative}'"))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    fn base_address(&self) -> &str {
        self.base.as_str()
    }

    async fn get_json(&self, relative: &str) -> Result<Value> {
        let url = self.url_for(relative)?;
        debug!(%url, "HTTP GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .http_context(format!("GET {url}"))?
            .error_for_status()
            .http_context(format!("GET {url}"))?;

        response
            .json::<Value>()
            .await
            .http_context(format!("Decoding response from {url}"))
    }
}
