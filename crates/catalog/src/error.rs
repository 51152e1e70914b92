//! Error types for the catalog crate.
//!
//! Loading errors (missing file, bad JSON, duplicate ids) and the lookup
//! failures the HTTP layer turns into 404s share one enum so callers can
//! propagate everything with `?`.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset content is not a valid JSON array of movies
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Two records in the dataset share an id
    #[error("Duplicate movie id {id} in dataset")]
    DuplicateId { id: MovieId },

    /// No record has the requested id
    #[error("Movie not found: {id}")]
    MovieNotFound { id: MovieId },

    /// Every id above the current maximum is out of range
    #[error("No movie id left above {max}")]
    IdSpaceExhausted { max: MovieId },

    /// A genre filter matched nothing
    #[error("No movies found for genre: {genre}")]
    NoMoviesForGenre { genre: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
