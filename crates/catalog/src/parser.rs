//! Parser for the static movie dataset.
//!
//! The dataset is a single JSON array of movie records:
//!
//! ```json
//! [
//!   { "id": 1, "title": "...", "year": 1994, "director": "...",
//!     "duration": 142, "poster": "https://...", "genre": ["Drama"], "rate": 9.3 }
//! ]
//! ```
//!
//! It is read once at startup; nothing is ever written back.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::types::Movie;

/// Read and parse the dataset file at `path`
pub fn parse_movies_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    parse_movies(&content, &path.display().to_string())
}

/// Parse dataset content. `file` is only used in error messages.
pub fn parse_movies(content: &str, file: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_str(content).map_err(|err| CatalogError::ParseError {
            file: file.to_string(),
            reason: err.to_string(),
        })?;

    check_unique_ids(&movies)?;
    Ok(movies)
}

/// Reject datasets where two records share an id
fn check_unique_ids(movies: &[Movie]) -> Result<()> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !seen.insert(movie.id) {
            return Err(CatalogError::DuplicateId { id: movie.id });
        }
    }
    Ok(())
}
