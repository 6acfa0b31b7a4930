// Author listing handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument};

use crate::config::state::AppState;
use crate::models::{Author, AuthorField, SortDirective, SortOrder};
use crate::utils::response_handler::HandlerResponse;

/// Body returned instead of an empty list
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Order requested from the author store for the listing
pub fn listing_sort() -> SortDirective {
    SortDirective::by(AuthorField::FamilyName, SortOrder::Ascending)
}

/// Lists every author as "<name> : <lifespan>", in the order the store returns
#[instrument(name = "list_authors", skip(state))]
pub async fn list_authors_handler(State(state): State<AppState>) -> Response {
    let sort: SortDirective = listing_sort();

    match state.authors.get_all_authors(Some(&sort)).await {
        Ok(authors) if authors.is_empty() => {
            info!("No authors in the catalog");
            (StatusCode::OK, NO_AUTHORS_FOUND).into_response()
        }
        Ok(authors) => {
            info!("Listing {} authors", authors.len());
            let summaries: Vec<String> = authors.iter().map(Author::summary).collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => {
            error!("Failed to retrieve authors: {}", e);
            HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
                .message("Failed to retrieve authors")
                .into_response()
        }
    }
}
