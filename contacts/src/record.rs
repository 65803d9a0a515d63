//! Input contact records as retrieved from either org.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field holding the org-local record identifier.
pub const ID_FIELD: &str = "Id";
/// Field holding the contact's display name.
pub const NAME_FIELD: &str = "Name";
/// Field holding the contact's email address, the identity field of the merge.
pub const EMAIL_FIELD: &str = "Email";

/// Returns true when a field value is blank (empty or whitespace-only).
///
/// Blank values are treated the same as absent fields everywhere in the
/// contract: a blank email can never match another record.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Identifies which org a record was retrieved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceOrg {
    /// The first org, whose records seed the merged set.
    A,
    /// The second org, whose records are reconciled against the seeded set.
    B,
}

impl fmt::Display for SourceOrg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrg::A => f.write_str("A"),
            SourceOrg::B => f.write_str("B"),
        }
    }
}

/// A contact record as produced by an upstream org query.
///
/// [`SourceContact`] wraps the raw field map of the retrieved record. The
/// merge contract only reads [`ID_FIELD`], [`NAME_FIELD`] and [`EMAIL_FIELD`],
/// but records keep whatever extra fields the upstream query selected.
///
/// Accessors never fail: an absent field reads as an empty string, so a
/// malformed record degrades instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceContact {
    fields: BTreeMap<String, String>,
}

impl SourceContact {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Sets a field in place.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns a field value, or `None` when the field is absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns a field value, or `""` when the field is absent.
    pub fn field_or_blank(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }

    /// Returns true when the field is present, even with a blank value.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The org-local identifier, or `""` when absent.
    pub fn id(&self) -> &str {
        self.field_or_blank(ID_FIELD)
    }

    /// The contact's display name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.field_or_blank(NAME_FIELD)
    }

    /// The contact's email address, or `""` when absent.
    pub fn email(&self) -> &str {
        self.field_or_blank(EMAIL_FIELD)
    }

    /// Number of fields on the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the record's fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for SourceContact {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
