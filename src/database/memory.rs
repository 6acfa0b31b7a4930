// In-memory author store for development and tests

use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::database::author_repository::{AuthorRepository, RepositoryError};
use crate::models::{Author, AuthorRecord, SortDirective};

/// One author entry in a JSON seed file
#[derive(Debug, Deserialize)]
struct AuthorSeed {
    #[serde(default)]
    first_name: String,
    family_name: String,
    date_of_birth: NaiveDate,
    #[serde(default)]
    date_of_death: Option<NaiveDate>,
}

impl AuthorSeed {
    // Same rules the `authors` table enforces
    fn into_record(self, index: usize) -> Result<AuthorRecord> {
        if self.family_name.trim().is_empty() {
            bail!("Seed entry {index}: family_name cannot be blank");
        }
        if matches!(self.date_of_death, Some(died) if died < self.date_of_birth) {
            bail!("Seed entry {index}: date_of_death precedes date_of_birth");
        }

        Ok(AuthorRecord::new(
            self.first_name,
            self.family_name,
            self.date_of_birth,
            self.date_of_death,
        ))
    }
}

/// Keeps records in insertion order; sorting is stable, so ties keep that order
#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    records: RwLock<Vec<AuthorRecord>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = AuthorRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Parses a JSON array of authors, e.g.
    /// `[{"first_name": "Kim", "family_name": "Woon", "date_of_birth": "1958-10-10"}]`
    pub fn from_seed_json(json: &str) -> Result<Self> {
        let seeds: Vec<AuthorSeed> = serde_json::from_str(json).context("Invalid author seed JSON")?;

        let records: Vec<AuthorRecord> = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| seed.into_record(index))
            .collect::<Result<_>>()?;

        Ok(Self::with_records(records))
    }

    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let json: String = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read author seed file {}", path.display()))?;

        let repository: Self = Self::from_seed_json(&json)
            .with_context(|| format!("Failed to load author seed file {}", path.display()))?;

        info!("Seeded in-memory author store from {}", path.display());
        Ok(repository)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_all_authors(
        &self,
        sort: Option<&SortDirective>,
    ) -> Result<Vec<Author>, RepositoryError> {
        let mut records: Vec<AuthorRecord> = self.records.read().await.clone();

        if let Some(directive) = sort {
            directive.sort(&mut records);
        }

        debug!("In-memory store returning {} authors", records.len());
        Ok(records.into_iter().map(Author::from).collect())
    }
}
