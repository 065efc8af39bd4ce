use super::error::UpstreamError;
use super::model::{CheckResult, ImageryDate};
use crate::infrastructure::repositories::MetadataRepository;
use std::sync::Arc;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Interprets metadata responses for a single location.
pub struct MetadataChecker {
    metadata_repo: Arc<dyn MetadataRepository>,
    api_key: String,
}

impl MetadataChecker {
    pub fn new(metadata_repo: Arc<dyn MetadataRepository>, api_key: String) -> Self {
        Self {
            metadata_repo,
            api_key,
        }
    }

    /// Ask the metadata service when imagery for `location` was last captured.
    ///
    /// `ZERO_RESULTS` is not an error, it maps to [`CheckResult::NoData`].
    pub async fn check(&self, location: &str) -> Result<CheckResult, UpstreamError> {
        let metadata = self.metadata_repo.fetch(&self.api_key, location).await?;

        match metadata.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(CheckResult::NoData),
            other => return Err(UpstreamError::BadUpstreamStatus(other.to_string())),
        }

        ImageryDate::parse(&metadata.date)
            .map(CheckResult::UpdatedOn)
            .ok_or(UpstreamError::BadDateFormat(metadata.date))
    }
}
