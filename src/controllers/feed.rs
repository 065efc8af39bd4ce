use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    domain::feed::{FeedService, FeedServiceApi, ATOM_CONTENT_TYPE},
    error::AppResult,
};

const LOCATION_PARAM: &str = "l";

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /atom.xml?l=...&l=... - Street view update feed
    pub async fn atom(
        State(controller): State<Arc<FeedController>>,
        Query(params): Query<Vec<(String, String)>>,
    ) -> AppResult<Response> {
        let locations = location_values(params);
        tracing::info!(locations = locations.len(), "Building feed");

        let feed = controller.feed_service.build_feed(locations).await?;
        let xml = feed.to_xml()?;

        Ok(([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], xml).into_response())
    }
}

/// Every `l` value, in request order
fn location_values(params: Vec<(String, String)>) -> Vec<String> {
    params
        .into_iter()
        .filter(|(key, _)| key == LOCATION_PARAM)
        .map(|(_, value)| value)
        .collect()
}
