use crate::domain::imagery::UpstreamError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("no locations given")]
    MissingLocations,
    #[error("checking {location}: {source}")]
    Upstream {
        location: String,
        #[source]
        source: UpstreamError,
    },
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<FeedServiceError> for AppError {
    fn from(err: FeedServiceError) -> Self {
        match err {
            FeedServiceError::MissingLocations => AppError::BadRequest(err.to_string()),
            FeedServiceError::Upstream { .. } => AppError::ExternalService(err.to_string()),
            FeedServiceError::Serialization(msg) => AppError::Internal(msg),
        }
    }
}
