//! In-memory email index implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::EmailKey;
use crate::config::EmailComparison;

/// Statistics about index operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of emails registered.
    pub register_count: u64,
    /// Number of registrations skipped because the email was blank.
    pub skipped_blank_count: u64,
    /// Number of registrations ignored because the email was already indexed.
    pub duplicate_count: u64,
    /// Number of lookup operations.
    pub lookup_count: u64,
    /// Number of failed lookups (email not found, or blank).
    pub lookup_miss_count: u64,
}

/// In-memory index mapping emails to positions in the merged record set.
///
/// The index makes the reconcile phase an O(1) lookup per record instead of a
/// scan over everything merged so far. Two invariants carry the observable
/// semantics of the scan it replaces:
/// - blank emails are never indexed, so they can never be found;
/// - the first registration of an email wins, so a lookup resolves to the
///   earliest merged record with that email.
#[derive(Debug)]
pub struct EmailIndex {
    positions: HashMap<EmailKey, usize>,
    comparison: EmailComparison,
    stats: IndexStats,
}

impl EmailIndex {
    /// Creates a new empty index using the given comparison mode.
    pub fn new(comparison: EmailComparison) -> Self {
        Self {
            positions: HashMap::new(),
            comparison,
            stats: IndexStats::default(),
        }
    }

    /// Creates an index with pre-allocated capacity.
    pub fn with_capacity(comparison: EmailComparison, capacity: usize) -> Self {
        Self {
            positions: HashMap::with_capacity(capacity),
            comparison,
            stats: IndexStats::default(),
        }
    }

    /// Registers `position` as the home of `email`.
    ///
    /// Returns true when the entry was added. Blank emails and emails that are
    /// already indexed are left untouched (first occurrence wins).
    pub fn register(&mut self, email: &str, position: usize) -> bool {
        let Some(key) = EmailKey::from_raw(email, self.comparison) else {
            self.stats.skipped_blank_count += 1;
            return false;
        };

        match self.positions.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(position);
                self.stats.register_count += 1;
                true
            }
            Entry::Occupied(_) => {
                self.stats.duplicate_count += 1;
                false
            }
        }
    }

    /// Looks up the position registered for `email`.
    ///
    /// Blank emails always miss.
    pub fn lookup(&mut self, email: &str) -> Option<usize> {
        self.stats.lookup_count += 1;

        let position = EmailKey::from_raw(email, self.comparison)
            .and_then(|key| self.positions.get(&key).copied());

        if position.is_none() {
            self.stats.lookup_miss_count += 1;
        }
        position
    }

    /// Returns the number of indexed emails.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns index statistics.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
