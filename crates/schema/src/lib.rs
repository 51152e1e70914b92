//! Declarative validation for movie payloads.
//!
//! This crate provides:
//! - FieldRule trait and implementations for single values
//! - Schema for composing rules over a JSON object, in full or partial mode
//! - MovieSchema, the fixed rule set for movie bodies
//! - Issue / ValidationErrors, the structured error returned to clients
//!
//! ## Architecture
//! A request body goes through three steps:
//! 1. The Schema picks each declared field out of the body
//! 2. The field's rule checks (and possibly normalizes) the value
//! 3. Accepted fields are converted into `NewMovie` or `MoviePatch`
//!
//! ## Example Usage
//! ```ignore
//! use schema::MovieSchema;
//!
//! let schema = MovieSchema::new();
//! let new_movie = schema.validate_new(&body)?;
//! let patch = schema.validate_patch(&other_body)?;
//! ```

pub mod issue;
pub mod movie;
pub mod rules;
pub mod schema;
pub mod traits;

// Re-export main types
pub use issue::{Issue, IssueCode, PathSegment, ValidationErrors};
pub use movie::MovieSchema;
pub use schema::{Mode, Schema};
pub use traits::FieldRule;
