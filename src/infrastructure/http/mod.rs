use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

use crate::controllers::{feed::FeedController, health, index};
use crate::infrastructure::config::Config;

/// Build the application router
pub fn build_router(feed_controller: Arc<FeedController>) -> Router {
    let feed_routes = Router::new()
        .route("/atom.xml", get(FeedController::atom))
        .with_state(feed_controller);

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
        .merge(feed_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    feed_controller: Arc<FeedController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(feed_controller);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
