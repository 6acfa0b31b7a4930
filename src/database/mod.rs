pub mod author_repository;
pub mod memory;
pub mod postgres_authors;
pub mod postgres_service;

pub use author_repository::{AuthorRepository, RepositoryError};
pub use memory::InMemoryAuthorRepository;
pub use postgres_authors::PgAuthorRepository;
pub use postgres_service::DatabaseService;
