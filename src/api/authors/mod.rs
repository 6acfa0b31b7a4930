pub mod handler;
pub mod routes;

pub use routes::author_routes;
