// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

/// Maps layer errors to status codes; the response wrapper adds the JSON envelope
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    map_layer_error(&*err)
}

pub fn map_layer_error(err: &(dyn Error + 'static)) -> StatusCode {
    // 408 if the request took too long
    if err.is::<Elapsed>() {
        warn!("Request exceeded the configured timeout");
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    warn!("Unhandled layer error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}
