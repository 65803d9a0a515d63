//! Configuration for the merge operation.

/// How emails are compared when resolving cross-org identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailComparison {
    /// Exact string equality. This matches the upstream CRM behavior, where
    /// `Bob@x.com` and `bob@x.com` are distinct identities.
    #[default]
    Exact,

    /// Case-insensitive comparison: emails are lowercased before they enter
    /// the index. A deliberate divergence from the upstream behavior for
    /// deployments where both orgs store mixed-case emails.
    CaseInsensitive,
}

/// Configuration for the merge operation.
#[derive(Debug, Clone, Default)]
pub struct MergeConfig {
    /// Email comparison mode used for identity resolution.
    pub email_comparison: EmailComparison,

    /// When true, every input record must carry an email field (a blank value
    /// is fine, the field itself must exist). Records failing this check abort
    /// the merge before any output is produced. Off by default: the lenient
    /// path treats a missing field like a blank one.
    pub require_email_field: bool,
}

impl MergeConfig {
    /// Creates the default configuration (exact comparison, lenient shapes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the email comparison mode.
    pub fn with_email_comparison(mut self, comparison: EmailComparison) -> Self {
        self.email_comparison = comparison;
        self
    }

    /// Enables or disables strict input-shape validation.
    pub fn with_require_email_field(mut self, require: bool) -> Self {
        self.require_email_field = require;
        self
    }
}
