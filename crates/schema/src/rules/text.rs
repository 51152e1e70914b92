//! Rule for free-text fields such as title and director.

use serde_json::Value;

use crate::issue::{Issue, IssueCode, PathSegment};
use crate::traits::FieldRule;

/// Accepts strings of at least `min_len` characters.
pub struct TextRule {
    min_len: usize,
    message: Option<String>,
}

impl TextRule {
    pub fn new() -> Self {
        Self {
            min_len: 0,
            message: None,
        }
    }

    /// Require at least `min_len` characters, reporting `message` when short
    pub fn min_len(mut self, min_len: usize, message: impl Into<String>) -> Self {
        self.min_len = min_len;
        self.message = Some(message.into());
        self
    }

    /// Shorthand for `min_len(1, message)`
    pub fn non_empty(message: impl Into<String>) -> Self {
        Self::new().min_len(1, message)
    }
}

impl Default for TextRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for TextRule {
    fn name(&self) -> &str {
        "TextRule"
    }

    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>> {
        let Some(text) = value.as_str() else {
            return Err(vec![Issue::invalid_type(path, "string", value)]);
        };

        if text.chars().count() < self.min_len {
            let message = self.message.clone().unwrap_or_else(|| {
                format!("String must contain at least {} character(s)", self.min_len)
            });
            return Err(vec![Issue::new(IssueCode::TooSmall, path, message)]);
        }

        Ok(value.clone())
    }
}
