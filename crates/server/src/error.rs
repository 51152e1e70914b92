//! HTTP-facing errors.
//!
//! Each variant maps to one status code; the body is always JSON with an
//! `error` key.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use schema::ValidationErrors;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Movie not found")]
    MovieNotFound,

    #[error("No movies found for that genre")]
    GenreNotFound,

    /// Body failed the movie schema; the issues are sent back as-is
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Body was not JSON at all, or the query string did not deserialize
    #[error("{0}")]
    MalformedBody(String),

    #[error("Origin not allowed by CORS policy")]
    OriginRejected,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MovieNotFound | ApiError::GenreNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::OriginRejected => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound { .. } => ApiError::MovieNotFound,
            CatalogError::NoMoviesForGenre { .. } => ApiError::GenreNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({ "error": errors.issues() }),
            ApiError::Internal(message) => {
                error!("Request failed: {}", message);
                json!({ "error": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
