//! Cross-origin access control.
//!
//! Two independent paths:
//! - `enforce_origin` middleware checks every request against the allow-list
//!   before routing
//! - `preflight` answers `OPTIONS /movies` for any origin, without consulting
//!   the allow-list

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Origins accepted when no allow-list is configured
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://movies.com",
    "https://midu.dev",
];

/// Path whose preflight bypasses the allow-list
pub const MOVIES_PATH: &str = "/movies";

const MOVIES_PREFLIGHT_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
const DEFAULT_PREFLIGHT_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Outcome of an origin check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    Allow,
    Reject,
}

/// Fixed set of origins allowed to call the API cross-origin
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: HashSet<String>,
}

impl OriginPolicy {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: origins.into_iter().map(|o| o.as_ref().to_string()).collect(),
        }
    }

    /// Requests without an origin (same-origin, curl, ...) are always allowed.
    pub fn check(&self, origin: Option<&str>) -> OriginDecision {
        match origin {
            None => OriginDecision::Allow,
            Some(origin) if self.allowed.contains(origin) => OriginDecision::Allow,
            Some(_) => OriginDecision::Reject,
        }
    }
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

/// Middleware applying the allow-list to every request except the
/// `OPTIONS /movies` preflight.
pub async fn enforce_origin(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS && request.uri().path() == MOVIES_PATH {
        return next.run(request).await;
    }

    // An origin header that is not valid text can never be on the list
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|value| value.to_str().unwrap_or_default().to_string());

    if policy.check(origin.as_deref()) == OriginDecision::Reject {
        warn!(
            "Rejected {} {} from origin {:?}",
            request.method(),
            request.uri().path(),
            origin
        );
        return ApiError::OriginRejected.into_response();
    }

    if request.method() == Method::OPTIONS {
        debug!("Answering preflight for {}", request.uri().path());
        return default_preflight(origin.as_deref(), request.headers());
    }

    let mut response = next.run(request).await;
    if let Some(value) = origin.and_then(|o| HeaderValue::from_str(&o).ok()) {
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }
    response
}

/// `OPTIONS /movies`: grants the requesting origin every method we serve.
pub async fn preflight(headers: HeaderMap) -> Response {
    let mut response = (StatusCode::OK, "OK").into_response();
    let response_headers = response.headers_mut();

    if let Some(origin) = headers.get(header::ORIGIN) {
        response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    }
    response_headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(MOVIES_PREFLIGHT_METHODS),
    );
    response
}

/// Preflight for every other path, only reached once the origin passed.
fn default_preflight(origin: Option<&str>, request_headers: &HeaderMap) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();

    if let Some(value) = origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(DEFAULT_PREFLIGHT_METHODS),
    );
    if let Some(requested) = request_headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        headers.append(
            header::VARY,
            HeaderValue::from_static("Access-Control-Request-Headers"),
        );
    }
    response
}
