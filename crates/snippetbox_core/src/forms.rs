//! Snippet creation form state.

use crate::constants::DEFAULT_EXPIRES_DAYS;
use crate::validation::{self, FieldErrors, CONTENT_FIELD, EXPIRES_FIELD, TITLE_FIELD};

/// Raw urlencoded body of a create submission.
///
/// Missing fields decode as empty strings; integer parsing of `expires` is
/// left to the caller so a malformed value can be rejected before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawSnippetForm {
    pub title: String,
    pub content: String,
    pub expires: String,
}

impl RawSnippetForm {
    /// Collect the known fields from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut title = None;
        let mut content = None;
        let mut expires = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                TITLE_FIELD => &mut title,
                CONTENT_FIELD => &mut content,
                EXPIRES_FIELD => &mut expires,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            expires: expires.unwrap_or_default(),
        }
    }

    /// Parse the submitted expiry as a signed decimal integer.
    ///
    /// # Returns
    /// `None` when the value is missing, empty, or not an integer.
    pub fn parse_expires(&self) -> Option<i64> {
        self.expires.parse().ok()
    }
}

/// Request-scoped state of the create form, redisplayed on validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: i64,
    pub field_errors: FieldErrors,
}

impl Default for SnippetCreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            expires: DEFAULT_EXPIRES_DAYS,
            field_errors: FieldErrors::new(),
        }
    }
}

impl SnippetCreateForm {
    /// Build a form from submitted values with no errors recorded yet.
    pub fn new(title: String, content: String, expires: i64) -> Self {
        Self {
            title,
            content,
            expires,
            field_errors: FieldErrors::new(),
        }
    }

    /// Run the snippet rules and replace `field_errors` with the outcome.
    pub fn validate(&mut self) {
        self.field_errors = validation::validate(&self.title, &self.content, self.expires);
    }

    /// Whether the form may be persisted.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Error message recorded for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.field_errors.get(field).copied()
    }
}
