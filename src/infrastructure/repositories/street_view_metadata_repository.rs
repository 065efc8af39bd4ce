use super::metadata_repository::{MetadataRepository, MetadataResponse};
use crate::domain::imagery::UpstreamError;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_METADATA_URL: &str = "https://maps.googleapis.com/maps/api/streetview/metadata";

/// Upper bound for a single metadata lookup
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Street View metadata API implementation of the metadata repository
pub struct StreetViewMetadataRepository {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl StreetViewMetadataRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            timeout: UPSTREAM_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl MetadataRepository for StreetViewMetadataRepository {
    async fn fetch(
        &self,
        api_key: &str,
        location: &str,
    ) -> Result<MetadataResponse, UpstreamError> {
        tracing::debug!(location = location, "Requesting Street View metadata");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("key", api_key), ("location", location)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(UpstreamError::BadStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<MetadataResponse>(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
