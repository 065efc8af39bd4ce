pub mod metadata_repository;
pub mod street_view_metadata_repository;

pub use metadata_repository::{MetadataRepository, MetadataResponse};
pub use street_view_metadata_repository::{
    StreetViewMetadataRepository, DEFAULT_METADATA_URL, UPSTREAM_TIMEOUT,
};
