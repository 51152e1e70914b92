//! # Catalog Crate
//!
//! This crate owns the movie records served by the API.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Movie, NewMovie, MoviePatch)
//! - **parser**: Parse the JSON dataset into Rust structs
//! - **store**: The ordered in-memory `MovieCatalog`
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MovieCatalog;
//! use std::path::Path;
//!
//! let mut catalog = MovieCatalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! let dramas = catalog.by_genre("drama")?;
//! let created = catalog.insert(new_movie)?;
//! catalog.remove(created.id)?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use store::MovieCatalog;
pub use types::{Movie, MovieId, MoviePatch, NewMovie};
