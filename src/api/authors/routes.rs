// Author route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the author endpoints
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(handler::list_authors_handler))
}
