//! In-memory email index for identity resolution.
//!
//! Maps emails to positions in the growing merged record set, so the
//! reconcile phase is a lookup instead of a scan over everything merged so
//! far.

mod contact_index;
mod email_key;

pub use contact_index::{EmailIndex, IndexStats};
pub use email_key::EmailKey;
