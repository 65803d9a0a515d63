//! Email lookup key for the index.

use contacts::is_blank;

use crate::config::EmailComparison;

/// An email address in its index-key form.
///
/// Construction applies the configured comparison fold exactly once, so two
/// keys are equal iff the index should treat their emails as the same
/// identity. Blank emails produce no key at all: a record without a usable
/// email can neither be found nor shadow anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailKey {
    key: String,
}

impl EmailKey {
    /// Builds a key from a raw email value, or `None` when the value is blank
    /// (empty or whitespace-only).
    pub fn from_raw(email: &str, comparison: EmailComparison) -> Option<Self> {
        if is_blank(email) {
            return None;
        }

        let key = match comparison {
            EmailComparison::Exact => email.to_string(),
            EmailComparison::CaseInsensitive => email.to_lowercase(),
        };

        Some(Self { key })
    }

    /// The folded key value.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}
