//! Rule for URL fields such as the poster.

use serde_json::Value;
use url::Url;

use crate::issue::{Issue, IssueCode, PathSegment};
use crate::traits::FieldRule;

/// Accepts strings that parse as an absolute URL.
pub struct UrlRule {
    message: String,
}

impl UrlRule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FieldRule for UrlRule {
    fn name(&self) -> &str {
        "UrlRule"
    }

    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>> {
        let Some(text) = value.as_str() else {
            return Err(vec![Issue::invalid_type(path, "string", value)]);
        };

        match Url::parse(text) {
            Ok(_) => Ok(value.clone()),
            Err(err) => {
                tracing::debug!("Rejected URL {:?}: {}", text, err);
                Err(vec![Issue::new(IssueCode::InvalidString, path, self.message.clone())])
            }
        }
    }
}
