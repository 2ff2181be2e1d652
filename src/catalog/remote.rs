use crate::catalog::traits::CatalogSource;
use crate::models::Listing;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listing source backed by a JSON feed
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    /// Create a catalog client for the given feed URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("assetplane-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse a feed body into listings
///
/// Accepts either a bare array or an object with a `properties` array.
pub fn parse_feed(body: &str) -> Result<Vec<Listing>> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("Feed is not valid JSON")?;

    let array = match value {
        serde_json::Value::Object(mut map) => map
            .remove("properties")
            .context("Feed object has no `properties` field")?,
        other => other,
    };

    serde_json::from_value(array).context("Failed to decode listings from feed")
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("Fetching catalog feed");
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch catalog feed")?;

        if !response.status().is_success() {
            warn!("Catalog feed returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog feed: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        debug!("Downloaded {} bytes of catalog JSON", body.len());

        let listings = parse_feed(&body)?;
        info!("✅ Loaded {} listings from feed", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "HTTP feed"
    }
}
