//! Catalog loading from the remote document or a local file.

use crate::{catalog::Catalog, error::Result};
use namesweep_core::AppConfig;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where the catalog document comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// HTTP GET of a remote JSON document
    Remote(String),
    /// Local JSON file on disk
    File(PathBuf),
}

/// Loader for the platform catalog.
///
/// The loader owns an HTTP client configured from [`AppConfig`] and fetches
/// the catalog once per scan session; the result is not cached across
/// sessions.
pub struct CatalogLoader {
    client: reqwest::Client,
    source: CatalogSource,
}

impl CatalogLoader {
    /// Create a loader for the configured remote catalog URL.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_source(config, CatalogSource::Remote(config.catalog.url.clone()))
    }

    /// Create a loader for an explicit source.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_source(config: &AppConfig, source: CatalogSource) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scanning.probe_timeout_secs))
            .user_agent(config.scanning.user_agent.clone())
            .build()?;

        Ok(Self { client, source })
    }

    /// Fetch and filter the catalog.
    ///
    /// # Errors
    /// Returns error on network failure, I/O failure, or if the document is
    /// not a top-level JSON object.
    pub async fn fetch(&self) -> Result<Catalog> {
        let document = match &self.source {
            CatalogSource::Remote(url) => {
                debug!(url = %url, "fetching remote catalog");
                self.client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Map<String, Value>>()
                    .await?
            }
            CatalogSource::File(path) => {
                debug!(path = %path.display(), "reading local catalog");
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str::<Map<String, Value>>(&contents)?
            }
        };

        let catalog = Catalog::from_document(&document);

        info!(
            usable = catalog.len(),
            total = document.len(),
            "loaded platform catalog"
        );

        Ok(catalog)
    }

    /// Fetch the catalog, substituting an empty catalog on any failure.
    ///
    /// Callers treat an empty catalog as "zero platforms to scan", so a
    /// failed load produces a scan that completes immediately with no
    /// results rather than an error.
    pub async fn fetch_or_empty(&self) -> Catalog {
        match self.fetch().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "catalog load failed, continuing with empty catalog");
                Catalog::new()
            }
        }
    }
}
