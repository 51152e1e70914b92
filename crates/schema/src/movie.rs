//! The fixed schema for movie payloads.

use catalog::{MoviePatch, NewMovie};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::issue::{Issue, IssueCode, ValidationErrors};
use crate::rules::{IntegerRule, LabelsRule, NumberRule, TextRule, UrlRule};
use crate::schema::{Mode, Schema};

/// Validates movie bodies for create (full) and update (partial).
pub struct MovieSchema {
    schema: Schema,
}

impl MovieSchema {
    pub fn new() -> Self {
        let schema = Schema::new()
            .field("title", TextRule::non_empty("Title is required"))
            .field("year", IntegerRule::new().min(1888).max_current_year())
            .field("director", TextRule::non_empty("Director is required"))
            .field(
                "duration",
                IntegerRule::new()
                    .max(i64::from(u32::MAX))
                    .positive("Duration must be positive"),
            )
            .field("poster", UrlRule::new("Poster must be a valid URL"))
            .field("genre", LabelsRule::new(1, "At least one genre is required"))
            .field_with_default("rate", NumberRule::new().min(0.0).max(10.0), json!(0));

        Self { schema }
    }

    /// Check a creation body. Every field except `rate` is required.
    pub fn validate_new(&self, input: &Value) -> Result<NewMovie, ValidationErrors> {
        let fields = self.schema.check(input, Mode::Full)?;
        into_typed(fields)
    }

    /// Check an update body. Only the supplied fields are checked.
    pub fn validate_patch(&self, input: &Value) -> Result<MoviePatch, ValidationErrors> {
        let fields = self.schema.check(input, Mode::Partial)?;
        into_typed(fields)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for MovieSchema {
    fn default() -> Self {
        Self::new()
    }
}

fn into_typed<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, ValidationErrors> {
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        ValidationErrors::single(Issue::new(IssueCode::InvalidType, &[], err.to_string()))
    })
}
