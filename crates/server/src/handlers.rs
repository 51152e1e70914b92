//! Route handlers for the movie API.
//!
//! Handlers only translate between HTTP and the catalog: parse the path,
//! validate the body, take the lock, call one `MovieCatalog` method.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use catalog::{Movie, MovieId};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

pub const WELCOME: &str =
    "Welcome to the Movies API. Use /movies to get the list of movies.";

/// Query string of `GET /movies`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
}

/// Reads the leading run of digits, so `12abc` and `1.5` name records 12
/// and 1. Segments with no leading digits (or too many) match nothing.
fn parse_id(raw: &str) -> Option<MovieId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

/// `GET /`
pub async fn welcome() -> &'static str {
    WELCOME
}

/// `GET /movies[?genre=...]`
pub async fn list_movies(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params?;
    let catalog = state.catalog.read().await;

    match params.genre.as_deref().filter(|genre| !genre.is_empty()) {
        Some(genre) => {
            let movies = catalog.by_genre(genre)?;
            Ok(Json(movies.into_iter().cloned().collect()))
        }
        None => Ok(Json(catalog.all().to_vec())),
    }
}

/// `GET /movies/:id`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    debug!("Fetching movie {:?}", id);
    let catalog = state.catalog.read().await;

    parse_id(&id)
        .and_then(|id| catalog.get(id).cloned())
        .map(Json)
        .ok_or(ApiError::MovieNotFound)
}

/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(body) = body?;
    let new_movie = state.schema.validate_new(&body)?;

    let movie = state.catalog.write().await.insert(new_movie)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `PATCH /movies/:id`
///
/// The body is validated before the id is looked up, so an invalid body
/// on an unknown id is a 400, not a 404.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Json(body) = body?;
    let patch = state.schema.validate_patch(&body)?;

    let id = parse_id(&id).ok_or(ApiError::MovieNotFound)?;
    let movie = state.catalog.write().await.update(id, patch)?;
    Ok(Json(movie))
}

/// `DELETE /movies/:id`
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::MovieNotFound)?;
    state.catalog.write().await.remove(id)?;

    Ok(Json(json!({ "message": "Movie deleted" })))
}
