// Author repository seam: every author store implements this trait

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Author, SortDirective};

/// Data-access failure raised by an author store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("author store unavailable: {0}")]
    Unavailable(String),

    #[error("author query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[async_trait]
pub trait AuthorRepository: Send + Sync + Debug {
    /// Returns every author, ordered by `sort` when given.
    /// Without a directive the order is whatever the store yields.
    async fn get_all_authors(
        &self,
        sort: Option<&SortDirective>,
    ) -> Result<Vec<Author>, RepositoryError>;
}
