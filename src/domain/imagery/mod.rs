pub mod error;
pub mod model;
pub mod service;

pub use error::UpstreamError;
pub use model::{CheckResult, ImageryDate};
pub use service::MetadataChecker;
