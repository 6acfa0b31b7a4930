// Start of file: /src/models/mod.rs

/*
    * Domain data models: authors and the sort directives used to list them.
*/

pub mod author;
pub mod sort;

pub use author::{Author, AuthorRecord};
pub use sort::{AuthorField, SortDirective, SortOrder};

// End of file: /src/models/mod.rs
