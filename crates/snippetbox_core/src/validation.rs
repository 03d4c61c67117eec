//! Field validation rules for submitted snippets.
//!
//! Every rule runs on every call, so one submission can report several
//! fields at once. A field reports at most one message.

use crate::constants::{ALLOWED_EXPIRES_DAYS, MAX_TITLE_CHARS};
use std::collections::BTreeMap;

/// Form field carrying the snippet title.
pub const TITLE_FIELD: &str = "title";
/// Form field carrying the snippet body.
pub const CONTENT_FIELD: &str = "content";
/// Form field carrying the expiry in days.
pub const EXPIRES_FIELD: &str = "expires";

/// Message for fields that are empty after trimming.
pub const BLANK_MESSAGE: &str = "This field cannot be blank";
/// Message for titles over [`MAX_TITLE_CHARS`] code points.
pub const TITLE_TOO_LONG_MESSAGE: &str = "This field cannot be more than 100 characters long";
/// Message for expiry values outside [`ALLOWED_EXPIRES_DAYS`].
pub const EXPIRES_INVALID_MESSAGE: &str = "This field must equal 1, 7 or 365";

/// Per-field diagnostics keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Check a title: blank first, then length in code points.
pub fn check_title(title: &str) -> Option<&'static str> {
    if is_blank(title) {
        Some(BLANK_MESSAGE)
    } else if title.chars().count() > MAX_TITLE_CHARS {
        Some(TITLE_TOO_LONG_MESSAGE)
    } else {
        None
    }
}

/// Check content: only blankness is rejected.
pub fn check_content(content: &str) -> Option<&'static str> {
    is_blank(content).then_some(BLANK_MESSAGE)
}

/// Check the expiry offset against the permitted values.
pub fn check_expires(expires: i64) -> Option<&'static str> {
    (!ALLOWED_EXPIRES_DAYS.contains(&expires)).then_some(EXPIRES_INVALID_MESSAGE)
}

/// Validate a snippet submission.
///
/// # Arguments
/// - `title`: Raw title as submitted.
/// - `content`: Raw content as submitted.
/// - `expires`: Expiry in days, already parsed as an integer.
///
/// # Returns
/// Messages for the fields that failed; empty when the submission is valid.
pub fn validate(title: &str, content: &str, expires: i64) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let checks = [
        (TITLE_FIELD, check_title(title)),
        (CONTENT_FIELD, check_content(content)),
        (EXPIRES_FIELD, check_expires(expires)),
    ];
    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }
    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
