// Start of file: /src/api/mod.rs

/*
    * HTTP endpoints grouped by resource. Each sub-module exposes its router.
*/

pub mod authors;
pub mod status;

// End of file: /src/api/mod.rs
