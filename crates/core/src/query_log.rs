//! Query submission constants and validation.
//!
//! Defines the length bounds for submitted text, the listing pagination
//! limits, and the validation helpers used by the API layer.

use serde_json::Value;

use crate::error::CoreError;
use crate::validation::FieldViolation;

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Minimum length for the submitted text field (characters).
pub const TEXT_MIN_LENGTH: usize = 1;

/// Maximum length for the submitted text field (characters).
pub const TEXT_MAX_LENGTH: usize = 2000;

// ---------------------------------------------------------------------------
// Listing limits
// ---------------------------------------------------------------------------

/// Default number of entries returned by the listing endpoint.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Maximum number of entries returned by the listing endpoint.
pub const MAX_LIST_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Submission parsing
// ---------------------------------------------------------------------------

/// A validated query submission.
#[derive(Debug, Clone)]
pub struct QuerySubmission {
    pub text: String,
    /// Free-form metadata object, stored verbatim. `None` means the field
    /// was omitted; the store substitutes an empty object.
    pub meta: Option<Value>,
}

/// Parse and validate a raw JSON request body into a [`QuerySubmission`].
///
/// Checks:
/// - `text` is present, a string, and 1-2000 characters long
///   (character count, not bytes).
/// - `meta`, if present, is a JSON object. Values inside it are not
///   inspected.
///
/// All violations are collected so the caller can report every failing
/// field at once.
pub fn parse_submission(body: &Value) -> Result<QuerySubmission, CoreError> {
    let mut violations = Vec::new();

    let text = match body.get("text") {
        Some(Value::String(s)) => {
            let chars = s.chars().count();
            if chars < TEXT_MIN_LENGTH || chars > TEXT_MAX_LENGTH {
                violations.push(FieldViolation::new(
                    "text",
                    "length",
                    format!(
                        "text must be between {TEXT_MIN_LENGTH} and {TEXT_MAX_LENGTH} characters (got {chars})"
                    ),
                ));
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            violations.push(FieldViolation::new(
                "text",
                "type",
                "text must be a string",
            ));
            None
        }
        None => {
            violations.push(FieldViolation::new(
                "text",
                "required",
                "text is required",
            ));
            None
        }
    };

    let meta = match body.get("meta") {
        Some(value @ Value::Object(_)) => Some(value.clone()),
        Some(_) => {
            violations.push(FieldViolation::new(
                "meta",
                "type",
                "meta must be an object",
            ));
            None
        }
        None => None,
    };

    if !violations.is_empty() {
        return Err(CoreError::Validation(violations));
    }

    Ok(QuerySubmission {
        // Every None path above pushed a violation, so text is Some here.
        text: text.unwrap_or_default(),
        meta,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
