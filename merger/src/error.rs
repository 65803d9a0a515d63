//! Error types for the merger crate.

use contacts::SourceOrg;
use thiserror::Error;

/// Errors that can occur during merge operations.
///
/// The default merge policy is total and never produces these; only the
/// opt-in strict input validation (see
/// [`MergeConfig::with_require_email_field`](crate::MergeConfig::with_require_email_field))
/// can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An input record has no email field at all (as opposed to a blank one).
    #[error("contact at position {position} from org {org} has no email field")]
    MissingEmailField {
        /// Org the offending record was retrieved from.
        org: SourceOrg,
        /// Zero-based position of the record within its org's input.
        position: usize,
    },
}

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
