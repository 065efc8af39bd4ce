use std::sync::Arc;
use street_view_updates::controllers::feed::FeedController;
use street_view_updates::domain::feed::FeedService;
use street_view_updates::domain::imagery::MetadataChecker;
use street_view_updates::infrastructure::config::{Config, LogFormat};
use street_view_updates::infrastructure::http::start_http_server;
use street_view_updates::infrastructure::repositories::StreetViewMetadataRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting street view updates on {}", config.addr);

    if config.google_maps_api_key.is_empty() {
        tracing::warn!("GOOGLE_MAPS_API_KEY is not set, metadata lookups will be rejected upstream");
    }

    let config = Arc::new(config);

    let metadata_repo = Arc::new(StreetViewMetadataRepository::new(config.metadata_url.clone()));
    let checker = Arc::new(MetadataChecker::new(
        metadata_repo,
        config.google_maps_api_key.clone(),
    ));
    let feed_service = Arc::new(FeedService::new(checker));
    let feed_controller = Arc::new(FeedController::new(feed_service));

    start_http_server(config, feed_controller)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "street_view_updates=debug,tower_http=debug"
    } else {
        "street_view_updates=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
