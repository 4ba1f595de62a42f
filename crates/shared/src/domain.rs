use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote record store. Never minted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestId(pub String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One hotel guest as held by the remote store.
///
/// `first_name`, `last_name` and `email` are never persisted empty or
/// whitespace-only; `email` is unique across the collection (both enforced
/// remotely). `phone` and `address` may be empty strings. An absent
/// `date_of_birth` is omitted on the wire, never sent as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl GuestRecord {
    /// `"first_name last_name"`, the string the list view searches and sorts on.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw form values for a guest being created or edited. All fields are the
/// strings the form holds, including `date_of_birth` (`""` meaning absent).
/// [`GuestDraft::normalize`] turns a draft into validated wire fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
}

impl GuestDraft {
    /// Pre-fill a draft from an existing record, for the edit form.
    pub fn from_record(record: &GuestRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            date_of_birth: record
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Local-only ordering of the list view. Never transmitted to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Email,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            other => Err(format!("unknown sort key '{other}' (expected 'name' or 'email')")),
        }
    }
}
