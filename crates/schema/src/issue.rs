//! Structured validation issues.
//!
//! Every failed check produces one `Issue`. The HTTP layer serializes the
//! whole list as the body of a 400 response:
//!
//! ```json
//! { "error": [ { "code": "too_small", "path": ["year"],
//!                "message": "Number must be greater than or equal to 1888" } ] }
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// What kind of check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Missing value, or a value of the wrong JSON type
    InvalidType,
    /// Below a minimum (number, string length, array length)
    TooSmall,
    /// Above a maximum
    TooBig,
    /// A string that does not have the required format
    InvalidString,
}

/// One step of the path from the request body to the offending value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A single failed check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, path: &[PathSegment], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// `Expected <expected>, received <actual>`
    pub fn invalid_type(path: &[PathSegment], expected: &str, received: &Value) -> Self {
        Self::new(
            IssueCode::InvalidType,
            path,
            format!("Expected {}, received {}", expected, json_type_name(received)),
        )
    }

    /// The top-level field this issue belongs to, if any
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key.as_str()),
            _ => None,
        }
    }
}

/// Name of a JSON value's type as it appears in issue messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// All issues found while validating one payload
#[derive(Error, Debug, Clone, PartialEq)]
#[error("validation failed with {} issue(s)", .issues.len())]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn single(issue: Issue) -> Self {
        Self { issues: vec![issue] }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

}
