//! Validation and filtering of submitted forms
//!
//! Raw form input is filtered (trimmed, normalised), checked against
//! declarative per-field rules, then against the catalog. Failures are
//! collected per field so the form can be re-rendered with messages.

pub mod filters;
pub mod forms;

pub use forms::{OrderInput, ReviewInput, validate_order, validate_review};

use indexmap::IndexMap;

/// Field name → messages, in the order the fields appear on the form
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Append a message for `field`
pub fn add_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}
