//! Shared state handed to every handler.

use std::sync::Arc;

use catalog::MovieCatalog;
use schema::MovieSchema;
use tokio::sync::RwLock;

/// Cheap to clone; all clones point at the same catalog.
///
/// Every mutation holds the write lock for the whole read-modify-write, so
/// concurrent requests never lose an update.
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<RwLock<MovieCatalog>>,
    pub(crate) schema: Arc<MovieSchema>,
}

impl AppState {
    pub fn new(catalog: MovieCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            schema: Arc::new(MovieSchema::new()),
        }
    }

    /// Number of movies currently held
    pub async fn movie_count(&self) -> usize {
        self.catalog.read().await.len()
    }
}
