use super::error::FeedServiceError;
use super::model::{FeedDocument, FeedEntry};
use crate::domain::imagery::MetadataChecker;
use async_trait::async_trait;
use std::sync::Arc;

pub struct FeedService {
    checker: Arc<MetadataChecker>,
}

impl FeedService {
    pub fn new(checker: Arc<MetadataChecker>) -> Self {
        Self { checker }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// Build the update feed for a set of locations.
    ///
    /// Locations are sorted before anything else happens, duplicates are
    /// kept. The first failing check aborts the whole feed.
    async fn build_feed(&self, locations: Vec<String>) -> Result<FeedDocument, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn build_feed(
        &self,
        mut locations: Vec<String>,
    ) -> Result<FeedDocument, FeedServiceError> {
        if locations.is_empty() {
            return Err(FeedServiceError::MissingLocations);
        }
        locations.sort();

        let mut feed = FeedDocument::new(&locations);

        for location in &locations {
            let result = self.checker.check(location).await.map_err(|source| {
                tracing::error!(location = %location, error = %source, "Metadata check failed");
                FeedServiceError::Upstream {
                    location: location.clone(),
                    source,
                }
            })?;

            if let Some(updated) = result.updated_on() {
                feed.entries.push(FeedEntry::new(location, updated));
            }
        }

        tracing::debug!(
            locations = locations.len(),
            entries = feed.entries.len(),
            "Built street view feed"
        );

        Ok(feed)
    }
}
