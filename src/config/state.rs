// Application state shared with every handler

use std::sync::Arc;
use anyhow::Result;

use crate::config::environment::{AuthorStore, EnvironmentVariables};
use crate::database::{AuthorRepository, DatabaseService, InMemoryAuthorRepository, PgAuthorRepository};

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub authors: Arc<dyn AuthorRepository>,
}

impl AppState {
    /// Builds state around any author store (real or fake)
    pub fn new(environment: Arc<EnvironmentVariables>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { environment, authors }
    }

    /// Builds state from configuration, connecting to PostgreSQL when it is the selected store.
    /// Returns the database service as well so the caller can close it on shutdown.
    pub async fn from_environment(
        environment: EnvironmentVariables,
    ) -> Result<(Self, Option<DatabaseService>)> {
        let environment: Arc<EnvironmentVariables> = Arc::new(environment);

        match environment.author_store {
            AuthorStore::Postgres => {
                let database: DatabaseService = DatabaseService::new(environment.clone());
                database.initialize().await?;

                let authors: Arc<dyn AuthorRepository> =
                    Arc::new(PgAuthorRepository::new(database.clone()));
                tracing::info!("Author store: PostgreSQL");

                Ok((Self::new(environment, authors), Some(database)))
            }
            AuthorStore::Memory => {
                let store: InMemoryAuthorRepository = match &environment.author_seed_path {
                    Some(path) => InMemoryAuthorRepository::from_seed_file(path)?,
                    None => InMemoryAuthorRepository::new(),
                };
                let authors: Arc<dyn AuthorRepository> = Arc::new(store);
                tracing::warn!("Author store: in-memory (data is not persisted)");

                Ok((Self::new(environment, authors), None))
            }
        }
    }
}
