//! Contact merger - unifies the contact sets of two orgs into one record set
//! keyed by email.
//!
//! Upstream retrieval steps query each org for its contacts; this crate takes
//! those two already-materialized collections and produces a single set in
//! which each email appears once, annotated with the org-local identifier(s)
//! that contributed to it. It performs no I/O of its own.
//!
//! # Architecture
//!
//! The merge runs in two phases over an in-memory email index. The seed phase
//! appends every org-A record; the reconcile phase walks org B, filling the
//! org-B side of matched records and appending the rest. The index maps
//! emails to positions in the growing result, which keeps reconciliation O(1)
//! per record while preserving the semantics of a first-match scan.
//!
//! # Usage
//!
//! ```
//! use contacts::SourceContact;
//! use merger::merge;
//!
//! let org_a = vec![
//!     SourceContact::new()
//!         .with_field("Id", "0031r00001aBcDeAAF")
//!         .with_field("Name", "Alice Doe")
//!         .with_field("Email", "alice@example.com"),
//! ];
//! let org_b = vec![
//!     SourceContact::new()
//!         .with_field("Id", "0032x00004fGhIjBBC")
//!         .with_field("Name", "Alice Doe")
//!         .with_field("Email", "alice@example.com"),
//! ];
//!
//! let merged = merge(&org_a, &org_b);
//!
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].id_in_a, "0031r00001aBcDeAAF");
//! assert_eq!(merged[0].id_in_b, "0032x00004fGhIjBBC");
//! ```

mod config;
mod error;
pub mod index;
mod merger;

pub use config::{EmailComparison, MergeConfig};
pub use error::{MergeError, MergeResult};
pub use index::{EmailIndex, EmailKey, IndexStats};
pub use merger::{ContactMerger, MergeReport, MergeStats, merge};
