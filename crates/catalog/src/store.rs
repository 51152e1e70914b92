//! The in-memory movie collection.
//!
//! `MovieCatalog` owns an ordered `Vec<Movie>`. Order is insertion order and
//! is what `GET /movies` returns. Lookups are linear scans; the collection is
//! small and is never persisted.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Movie, MovieId, MoviePatch, NewMovie};

/// Ordered, in-memory movie collection
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Build a catalog from already parsed records, keeping their order
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Self::new();
        for movie in movies {
            if catalog.get(movie.id).is_some() {
                return Err(CatalogError::DuplicateId { id: movie.id });
            }
            catalog.movies.push(movie);
        }
        Ok(catalog)
    }

    /// Load the static dataset from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);
        let movies = parser::parse_movies_file(path)?;
        info!("Loaded {} movies", movies.len());
        Self::from_movies(movies)
    }

    // Queries

    /// All movies in insertion order
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies carrying `genre`, compared case-insensitively.
    ///
    /// An empty result is an error: "no such genre" is reported
    /// differently from "empty catalog".
    pub fn by_genre(&self, genre: &str) -> Result<Vec<&Movie>> {
        let matches: Vec<&Movie> = self.movies.iter().filter(|m| m.has_genre(genre)).collect();
        debug!("Genre filter {:?} matched {} movies", genre, matches.len());

        if matches.is_empty() {
            return Err(CatalogError::NoMoviesForGenre {
                genre: genre.to_string(),
            });
        }
        Ok(matches)
    }

    /// Get a movie by id
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The id the next inserted movie will receive.
    ///
    /// This is the id of the *last* record plus one, not the maximum id.
    /// If that value is already taken (possible when the dataset is not
    /// sorted by id) it falls back to the maximum plus one so ids stay unique.
    /// Fails once no id above the maximum fits in a `MovieId`.
    pub fn next_id(&self) -> Result<MovieId> {
        let Some(last) = self.movies.last() else {
            return Ok(1);
        };

        let candidate = last.id.checked_add(1);
        if let Some(id) = candidate.filter(|id| self.get(*id).is_none()) {
            return Ok(id);
        }

        let max = self.movies.iter().map(|m| m.id).max().unwrap_or(last.id);
        let fallback = max
            .checked_add(1)
            .ok_or(CatalogError::IdSpaceExhausted { max })?;
        warn!(
            "Id following the last movie ({}) is unavailable, assigning {} instead",
            last.id, fallback
        );
        Ok(fallback)
    }

    // Mutators

    /// Append a new movie and return the stored record
    pub fn insert(&mut self, new: NewMovie) -> Result<Movie> {
        let movie = Movie::from_new(self.next_id()?, new);
        info!("Created movie {} ({})", movie.id, movie.title);
        self.movies.push(movie.clone());
        Ok(movie)
    }

    /// Merge `patch` into the movie with `id` and return the updated record
    pub fn update(&mut self, id: MovieId, patch: MoviePatch) -> Result<Movie> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CatalogError::MovieNotFound { id })?;

        if patch.is_empty() {
            debug!("Empty patch for movie {}, nothing to change", id);
        }
        movie.apply(patch);
        info!("Updated movie {}", id);
        Ok(movie.clone())
    }

    /// Remove the movie with `id`, shifting later records down one slot
    pub fn remove(&mut self, id: MovieId) -> Result<Movie> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(CatalogError::MovieNotFound { id })?;

        let removed = self.movies.remove(index);
        info!("Deleted movie {} ({})", removed.id, removed.title);
        Ok(removed)
    }
}
