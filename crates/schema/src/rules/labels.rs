//! Rule for label lists such as genres.

use serde_json::Value;

use crate::issue::{Issue, IssueCode, PathSegment};
use crate::traits::FieldRule;

/// Accepts arrays of strings with at least `min_items` entries.
///
/// Each element that is not a string is reported with its index in the path.
pub struct LabelsRule {
    min_items: usize,
    message: String,
}

impl LabelsRule {
    pub fn new(min_items: usize, message: impl Into<String>) -> Self {
        Self {
            min_items,
            message: message.into(),
        }
    }
}

impl FieldRule for LabelsRule {
    fn name(&self) -> &str {
        "LabelsRule"
    }

    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>> {
        let Some(items) = value.as_array() else {
            return Err(vec![Issue::invalid_type(path, "array", value)]);
        };

        let mut issues: Vec<Issue> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_string())
            .map(|(index, item)| {
                let mut item_path = path.to_vec();
                item_path.push(PathSegment::Index(index));
                Issue::invalid_type(&item_path, "string", item)
            })
            .collect();

        if items.len() < self.min_items {
            issues.push(Issue::new(IssueCode::TooSmall, path, self.message.clone()));
        }

        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(value.clone())
    }
}
