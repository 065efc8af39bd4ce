pub mod error;
pub mod identifiers;
pub mod model;
pub mod service;

pub use error::FeedServiceError;
pub use model::{FeedDocument, FeedEntry, ATOM_CONTENT_TYPE};
pub use service::{FeedService, FeedServiceApi};
