//! A `Schema` chains field rules over a JSON object.
//!
//! The same field list is checked in two modes:
//! - `Mode::Full`: every field without a default must be present
//! - `Mode::Partial`: every field is optional and defaults are not applied
//!
//! Keys not declared in the schema are dropped from the output.

use serde_json::{Map, Value};
use tracing::debug;

use crate::issue::{Issue, IssueCode, PathSegment, ValidationErrors};
use crate::traits::FieldRule;

/// How missing fields are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Full,
    Partial,
}

struct Field {
    name: &'static str,
    rule: Box<dyn FieldRule>,
    default: Option<Value>,
}

/// Ordered set of named fields, each checked by one rule.
///
/// ## Usage
/// ```ignore
/// let schema = Schema::new()
///     .field("title", TextRule::non_empty("Title is required"))
///     .field_with_default("rate", NumberRule::new().min(0.0).max(10.0), json!(0));
///
/// let output = schema.check(&body, Mode::Full)?;
/// ```
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create a new empty Schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a required field (builder pattern).
    pub fn field(mut self, name: &'static str, rule: impl FieldRule + 'static) -> Self {
        self.fields.push(Field {
            name,
            rule: Box::new(rule),
            default: None,
        });
        self
    }

    /// Add a field that takes `default` when missing in full mode.
    pub fn field_with_default(
        mut self,
        name: &'static str,
        rule: impl FieldRule + 'static,
        default: Value,
    ) -> Self {
        self.fields.push(Field {
            name,
            rule: Box::new(rule),
            default: Some(default),
        });
        self
    }

    /// Declared field names, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Check `input` and return the accepted fields.
    ///
    /// All fields are checked before returning, so the error lists every
    /// failing field rather than only the first.
    pub fn check(&self, input: &Value, mode: Mode) -> Result<Map<String, Value>, ValidationErrors> {
        let Some(object) = input.as_object() else {
            return Err(ValidationErrors::single(Issue::invalid_type(&[], "object", input)));
        };

        let mut output = Map::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            let path = [PathSegment::from(field.name)];
            match (object.get(field.name), mode) {
                (Some(value), _) => {
                    debug!("Checking {} with {}", field.name, field.rule.name());
                    match field.rule.check(value, &path) {
                        Ok(accepted) => {
                            output.insert(field.name.to_string(), accepted);
                        }
                        Err(found) => issues.extend(found),
                    }
                }
                (None, Mode::Partial) => {}
                (None, Mode::Full) => match &field.default {
                    Some(default) => {
                        output.insert(field.name.to_string(), default.clone());
                    }
                    None => issues.push(Issue::new(IssueCode::InvalidType, &path, "Required")),
                },
            }
        }

        if !issues.is_empty() {
            debug!("Schema check ({:?}) failed with {} issues", mode, issues.len());
            return Err(ValidationErrors::new(issues));
        }
        Ok(output)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
