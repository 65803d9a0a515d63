//! Contact record contract shared between the two org-facing retrieval steps,
//! the merger, and downstream consumers.
//!
//! Re-exports the input record shape ([`SourceContact`]), the unified output
//! shape ([`MergedContact`]) and the org provenance tag ([`SourceOrg`]).

mod merged;
mod record;

pub use merged::MergedContact;
pub use record::{EMAIL_FIELD, ID_FIELD, NAME_FIELD, SourceContact, SourceOrg, is_blank};
