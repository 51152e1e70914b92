//! Core trait for field validation.
//!
//! A `Schema` is a list of named fields, each checked by one `FieldRule`.

use serde_json::Value;

use crate::issue::{Issue, PathSegment};

/// Checks a single JSON value.
///
/// On success the rule returns the value to keep, which lets numeric rules
/// normalize `1e3` to `1000`. On failure it returns every issue it found
/// rather than stopping at the first one.
pub trait FieldRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Check `value`, which lives at `path` inside the request body
    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>>;
}
