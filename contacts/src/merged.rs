//! Unified contact records produced by the merge.

use serde::{Deserialize, Serialize};

use crate::record::{SourceContact, is_blank};

/// A contact in the unified record set, annotated with the org-local
/// identifiers that contributed to it.
///
/// Field names on the wire keep the shape downstream reconciliation steps
/// already consume: `Name`, `Email`, `IDInA`, `IDInB`, plus the per-org name
/// snapshots `ContactNameInA` / `ContactNameInB`.
///
/// `name` and `email` are taken from whichever org the identity was first
/// observed in (org A seeds before org B reconciles). A later match from the
/// other org only fills in that org's id and name snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedContact {
    /// Canonical display name, from the first org that contributed the record.
    #[serde(rename = "Name", default)]
    pub name: String,

    /// The identity field. Blank emails never participate in matching, so a
    /// blank value here means the record is org-local noise carried through.
    #[serde(rename = "Email", default)]
    pub email: String,

    /// Org-A identifier, blank when no org-A record contributed.
    #[serde(rename = "IDInA", default)]
    pub id_in_a: String,

    /// Org-B identifier, blank when no org-B record contributed.
    #[serde(rename = "IDInB", default)]
    pub id_in_b: String,

    /// Org A's name snapshot, present when an org-A record contributed.
    #[serde(rename = "ContactNameInA", default, skip_serializing_if = "Option::is_none")]
    pub name_in_a: Option<String>,

    /// Org B's name snapshot, present when an org-B record contributed.
    /// Recorded without altering the canonical `name`.
    #[serde(rename = "ContactNameInB", default, skip_serializing_if = "Option::is_none")]
    pub name_in_b: Option<String>,
}

impl MergedContact {
    /// Builds a merged record seeded from an org-A contact.
    pub fn from_org_a(contact: &SourceContact) -> Self {
        Self {
            name: contact.name().to_string(),
            email: contact.email().to_string(),
            id_in_a: contact.id().to_string(),
            id_in_b: String::new(),
            name_in_a: Some(contact.name().to_string()),
            name_in_b: None,
        }
    }

    /// Builds a merged record from an org-B contact that matched nothing in A.
    pub fn from_org_b(contact: &SourceContact) -> Self {
        Self {
            name: contact.name().to_string(),
            email: contact.email().to_string(),
            id_in_a: String::new(),
            id_in_b: contact.id().to_string(),
            name_in_a: None,
            name_in_b: Some(contact.name().to_string()),
        }
    }

    /// Records an org-B contact onto an existing merged record.
    ///
    /// Overwrites `id_in_b` and the org-B name snapshot; the canonical `name`
    /// and `email` are left untouched. With several org-B records carrying the
    /// same email, the last one in input order wins here.
    pub fn merge_org_b(&mut self, contact: &SourceContact) {
        self.id_in_b = contact.id().to_string();
        self.name_in_b = Some(contact.name().to_string());
    }

    /// Returns true when an org-A record contributed a non-blank id.
    pub fn has_id_in_a(&self) -> bool {
        !is_blank(&self.id_in_a)
    }

    /// Returns true when an org-B record contributed a non-blank id.
    pub fn has_id_in_b(&self) -> bool {
        !is_blank(&self.id_in_b)
    }

    /// Returns true when the same email was observed in both orgs.
    pub fn matched_in_both(&self) -> bool {
        self.has_id_in_a() && self.has_id_in_b()
    }
}
