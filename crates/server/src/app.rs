//! # Movie API Application
//!
//! Wires the pieces into one axum `Router`:
//! 1. Origin allow-list middleware runs first, on every request
//! 2. API routes under `/` and `/movies`
//! 3. Anything else falls through to the static asset directory

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::middleware;
use axum::routing::get;
use catalog::MovieCatalog;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::ServerConfig;
use crate::cors::{self, MOVIES_PATH};
use crate::handlers;
use crate::state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let policy = Arc::new(config.origin_policy());

    Router::new()
        .route("/", get(handlers::welcome))
        .route(
            MOVIES_PATH,
            get(handlers::list_movies)
                .post(handlers::create_movie)
                .options(cors::preflight),
        )
        .route(
            "/movies/:id",
            get(handlers::get_movie)
                .patch(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn_with_state(policy, cors::enforce_origin))
        .with_state(state)
}

/// Load the dataset and serve the API until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let catalog = MovieCatalog::load_from_file(&config.data_file)
        .with_context(|| format!("Failed to load movies from {}", config.data_file.display()))?;
    let state = AppState::new(catalog);
    info!("Catalog ready with {} movies", state.movie_count().await);

    let app = router(state, &config);
    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;

    let port = listener.local_addr()?.port();
    info!("Server running at http://localhost:{}", port);
    info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
