//! Core merge of the two org contact sets.

use contacts::{EMAIL_FIELD, MergedContact, SourceContact, SourceOrg};
use tracing::debug;

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::index::EmailIndex;

/// Counters describing a completed merge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    /// Records read from org A. Each one seeds exactly one merged record.
    pub contacts_from_a: usize,
    /// Records read from org B.
    pub contacts_from_b: usize,
    /// Org-B records that matched an existing merged record by email.
    pub matched_across_orgs: usize,
    /// Org-B records that matched nothing and were appended.
    pub appended_from_b: usize,
}

/// Result of a merge: the unified record set plus its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// The unified record set. All org-A-derived records come first, in org-A
    /// input order, followed by org-B-only records in org-B input order.
    pub contacts: Vec<MergedContact>,
    /// Counters for the completed merge.
    pub stats: MergeStats,
}

/// Merges the contact sets of two orgs into one record set keyed by email.
///
/// The merge runs in two phases. The seed phase appends every org-A record
/// as-is. The reconcile phase walks org B and either fills the org-B side of
/// an already-merged record (when an email matches) or appends a new record.
/// Lookups go through an [`EmailIndex`] so reconciliation stays O(1) per
/// record regardless of how large the merged set grows.
///
/// The operation is pure: it holds no state across calls and equal inputs
/// produce equal outputs.
#[derive(Debug, Default)]
pub struct ContactMerger {
    config: MergeConfig,
}

impl ContactMerger {
    /// Creates a merger with the given configuration.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Merges the two org contact sets.
    ///
    /// Inputs are slices, so the "null collection" case cannot arise; an
    /// empty slice simply contributes nothing. The only possible error is
    /// [`MergeError::MissingEmailField`], and only when the configuration
    /// enables strict input validation. Validation runs up front, so a
    /// failing merge produces no partial output.
    pub fn merge(
        &self,
        contacts_from_a: &[SourceContact],
        contacts_from_b: &[SourceContact],
    ) -> MergeResult<MergeReport> {
        if self.config.require_email_field {
            ensure_email_field(SourceOrg::A, contacts_from_a)?;
            ensure_email_field(SourceOrg::B, contacts_from_b)?;
        }

        Ok(self.merge_records(contacts_from_a, contacts_from_b))
    }

    /// The infallible merge core, run after any validation has passed.
    fn merge_records(
        &self,
        contacts_from_a: &[SourceContact],
        contacts_from_b: &[SourceContact],
    ) -> MergeReport {
        let mut merged: Vec<MergedContact> =
            Vec::with_capacity(contacts_from_a.len() + contacts_from_b.len());
        let mut index = EmailIndex::with_capacity(
            self.config.email_comparison,
            contacts_from_a.len() + contacts_from_b.len(),
        );

        // Seed phase: every org-A record is appended unconditionally, so
        // duplicate emails within A survive as separate records. Only the
        // first occurrence lands in the index.
        for contact in contacts_from_a {
            let position = merged.len();
            index.register(contact.email(), position);
            merged.push(MergedContact::from_org_a(contact));
        }

        debug!(
            contacts = contacts_from_a.len(),
            indexed = index.len(),
            "seeded merged set from org A"
        );

        let mut matched = 0;
        let mut appended = 0;

        // Reconcile phase: org-B records either land on an existing record or
        // append a new one. Appended records are indexed too, so later org-B
        // duplicates resolve to them instead of appending again.
        for contact in contacts_from_b {
            match index.lookup(contact.email()) {
                Some(position) => {
                    merged[position].merge_org_b(contact);
                    matched += 1;
                }
                None => {
                    let position = merged.len();
                    index.register(contact.email(), position);
                    merged.push(MergedContact::from_org_b(contact));
                    appended += 1;
                }
            }
        }

        debug!(
            contacts = contacts_from_b.len(),
            matched,
            appended,
            total = merged.len(),
            "reconciled org B into merged set"
        );

        MergeReport {
            contacts: merged,
            stats: MergeStats {
                contacts_from_a: contacts_from_a.len(),
                contacts_from_b: contacts_from_b.len(),
                matched_across_orgs: matched,
                appended_from_b: appended,
            },
        }
    }
}

/// Merges two org contact sets with the default policy.
///
/// Convenience wrapper over [`ContactMerger`] with the lenient defaults:
/// exact email comparison, no shape validation, never fails.
pub fn merge(
    contacts_from_a: &[SourceContact],
    contacts_from_b: &[SourceContact],
) -> Vec<MergedContact> {
    ContactMerger::default()
        .merge_records(contacts_from_a, contacts_from_b)
        .contacts
}

/// Rejects any record that lacks an email field entirely.
fn ensure_email_field(org: SourceOrg, contacts: &[SourceContact]) -> MergeResult<()> {
    for (position, contact) in contacts.iter().enumerate() {
        if !contact.has_field(EMAIL_FIELD) {
            return Err(MergeError::MissingEmailField { org, position });
        }
    }
    Ok(())
}
