// PostgreSQL-backed author store

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::database::author_repository::{AuthorRepository, RepositoryError};
use crate::database::postgres_service::DatabaseService;
use crate::models::{Author, AuthorRecord, SortDirective};

const SELECT_AUTHORS_SQL: &str = r#"
    SELECT id, first_name, family_name, date_of_birth, date_of_death
    FROM authors
"#;

#[derive(Debug, Clone)]
pub struct PgAuthorRepository {
    database: DatabaseService,
}

impl PgAuthorRepository {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }
}

/// Builds the ORDER BY clause. Expressions come from `AuthorField` only;
/// `seq` keeps ties in insertion order.
pub fn order_by_clause(sort: Option<&SortDirective>) -> String {
    let keys: Vec<String> = sort
        .map(|directive| {
            directive
                .keys()
                .iter()
                .map(|(field, order)| format!("{} {}", field.sort_expression(), order.sql_keyword()))
                .collect()
        })
        .unwrap_or_default();

    if keys.is_empty() {
        String::new()
    } else {
        format!("ORDER BY {}, seq ASC", keys.join(", "))
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    #[instrument(name = "pg_get_all_authors", skip(self))]
    async fn get_all_authors(
        &self,
        sort: Option<&SortDirective>,
    ) -> Result<Vec<Author>, RepositoryError> {
        let pool = self
            .database
            .get_pool()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        let sql: String = format!("{} {}", SELECT_AUTHORS_SQL, order_by_clause(sort));

        let records: Vec<AuthorRecord> = sqlx::query_as::<_, AuthorRecord>(&sql)
            .fetch_all(pool)
            .await?;

        debug!("Fetched {} authors from PostgreSQL", records.len());
        Ok(records.into_iter().map(Author::from).collect())
    }
}
