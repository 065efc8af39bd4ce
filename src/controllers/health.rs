use axum::{http::StatusCode, response::IntoResponse};

/// Liveness only, never touches the metadata service
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
