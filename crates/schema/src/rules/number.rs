//! Rules for numeric fields.
//!
//! `IntegerRule` covers year and duration, `NumberRule` covers the rate.
//! Both report every failed bound instead of stopping at the first.

use chrono::Datelike;
use serde_json::Value;

use crate::issue::{Issue, IssueCode, PathSegment};
use crate::traits::FieldRule;

/// Upper limit of an `IntegerRule`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Fixed(i64),
    /// The calendar year at the moment the value is checked
    CurrentYear,
}

impl UpperBound {
    fn resolve(self) -> i64 {
        match self {
            UpperBound::Fixed(max) => max,
            UpperBound::CurrentYear => i64::from(chrono::Local::now().year()),
        }
    }
}

/// Accepts whole numbers within optional bounds.
///
/// `1e3` is accepted and normalized to `1000`; `12.5` is rejected.
#[derive(Debug, Clone, Default)]
pub struct IntegerRule {
    min: Option<i64>,
    max: Option<UpperBound>,
    positive: Option<String>,
}

impl IntegerRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(UpperBound::Fixed(max));
        self
    }

    pub fn max_current_year(mut self) -> Self {
        self.max = Some(UpperBound::CurrentYear);
        self
    }

    /// Require a value greater than zero, reporting `message` otherwise
    pub fn positive(mut self, message: impl Into<String>) -> Self {
        self.positive = Some(message.into());
        self
    }
}

impl FieldRule for IntegerRule {
    fn name(&self) -> &str {
        "IntegerRule"
    }

    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>> {
        let Some(number) = value.as_f64() else {
            return Err(vec![Issue::invalid_type(path, "number", value)]);
        };

        let mut issues = Vec::new();
        if number.fract() != 0.0 {
            issues.push(Issue::new(
                IssueCode::InvalidType,
                path,
                "Expected integer, received float",
            ));
        }
        issues.extend(bound_issues(
            number,
            self.min.map(|min| min as f64),
            self.max.map(|max| max.resolve() as f64),
            path,
        ));
        if let Some(message) = &self.positive {
            if number <= 0.0 {
                issues.push(Issue::new(IssueCode::TooSmall, path, message.clone()));
            }
        }

        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(Value::from(value.as_i64().unwrap_or(number as i64)))
    }
}

/// Accepts any JSON number within optional inclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct NumberRule {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl FieldRule for NumberRule {
    fn name(&self) -> &str {
        "NumberRule"
    }

    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<Value, Vec<Issue>> {
        let Some(number) = value.as_f64() else {
            return Err(vec![Issue::invalid_type(path, "number", value)]);
        };

        let issues = bound_issues(number, self.min, self.max, path);
        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(value.clone())
    }
}

fn bound_issues(
    number: f64,
    min: Option<f64>,
    max: Option<f64>,
    path: &[PathSegment],
) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Some(min) = min {
        if number < min {
            issues.push(Issue::new(
                IssueCode::TooSmall,
                path,
                format!("Number must be greater than or equal to {min}"),
            ));
        }
    }
    if let Some(max) = max {
        if number > max {
            issues.push(Issue::new(
                IssueCode::TooBig,
                path,
                format!("Number must be less than or equal to {max}"),
            ));
        }
    }
    issues
}
