/// Failure while asking the metadata service about a location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("bad HTTP status {0}")]
    BadStatus(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("bad body status {0}")]
    BadUpstreamStatus(String),
    #[error("bad body date {0}")]
    BadDateFormat(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}
