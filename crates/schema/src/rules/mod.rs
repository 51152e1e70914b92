//! Rule implementations for schema fields.
//!
//! This module contains the concrete rules that can be composed into a
//! `Schema`.

pub mod labels;
pub mod number;
pub mod text;
pub mod url;

// Re-export for convenience
pub use labels::LabelsRule;
pub use number::{IntegerRule, NumberRule, UpperBound};
pub use text::TextRule;
pub use self::url::UrlRule;
