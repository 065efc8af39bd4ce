use crate::domain::imagery::UpstreamError;
use async_trait::async_trait;
use serde::Deserialize;

/// Body returned by the Street View metadata endpoint.
///
/// Only the fields needed to date the imagery are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataResponse {
    #[serde(alias = "Status")]
    pub status: String,
    #[serde(default, alias = "Date")]
    pub date: String,
}

/// Source of imagery metadata for a location.
///
/// Implementations perform exactly one lookup per call and never retry.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Fetch the raw metadata for `location`, authenticating with `api_key`
    ///
    /// # Errors
    /// Returns [`UpstreamError`] on timeout, transport failure, a non-200
    /// response or an undecodable body
    async fn fetch(&self, api_key: &str, location: &str)
        -> Result<MetadataResponse, UpstreamError>;
}
