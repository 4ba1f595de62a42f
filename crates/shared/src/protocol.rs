use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{GuestDraft, GuestRecord},
    error::SyncError,
};

/// The mutable field set sent on create and update. Update transmits the
/// whole set keyed by id: a full replacement, never a sparse patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl GuestFields {
    /// Validate and normalize a form draft into transmittable fields.
    ///
    /// Every field is trimmed. `first_name`, `last_name` and `email` must be
    /// non-empty after trimming. An empty `date_of_birth` becomes `None`; a
    /// non-empty one must parse as an ISO calendar date. Violations surface
    /// as [`SyncError::Validation`] before any network call is made.
    pub fn from_draft(draft: &GuestDraft) -> Result<Self, SyncError> {
        let first_name = required(&draft.first_name, "first_name")?;
        let last_name = required(&draft.last_name, "last_name")?;
        let email = required(&draft.email, "email")?;

        let date_of_birth = match draft.date_of_birth.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| SyncError::Validation {
                        field: "date_of_birth",
                    })?,
            ),
        };

        Ok(Self {
            first_name,
            last_name,
            email,
            phone: draft.phone.trim().to_string(),
            address: draft.address.trim().to_string(),
            date_of_birth,
        })
    }

    /// The record the store is expected to hold after applying these fields.
    pub fn applied_to(&self, record: &GuestRecord) -> GuestRecord {
        GuestRecord {
            id: record.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth,
        }
    }
}

impl GuestDraft {
    /// Shorthand for [`GuestFields::from_draft`].
    pub fn normalize(&self) -> Result<GuestFields, SyncError> {
        GuestFields::from_draft(self)
    }
}

fn required(raw: &str, field: &'static str) -> Result<String, SyncError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SyncError::Validation { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GuestId;

    fn full_draft() -> GuestDraft {
        GuestDraft {
            first_name: "  Jane ".into(),
            last_name: "Doe".into(),
            email: " jane@x.com ".into(),
            phone: " 555-0100 ".into(),
            address: "".into(),
            date_of_birth: "1990-04-02".into(),
        }
    }

    #[test]
    fn normalize_trims_every_field() {
        let fields = full_draft().normalize().expect("valid draft");
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.email, "jane@x.com");
        assert_eq!(fields.phone, "555-0100");
        assert_eq!(fields.address, "");
        assert_eq!(
            fields.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 2)
        );
    }

    #[test]
    fn normalize_rejects_whitespace_only_required_field() {
        let mut draft = full_draft();
        draft.first_name = "   ".into();
        assert_eq!(
            draft.normalize(),
            Err(SyncError::Validation {
                field: "first_name"
            })
        );
    }

    #[test]
    fn normalize_rejects_missing_email() {
        let mut draft = full_draft();
        draft.email = String::new();
        assert_eq!(
            draft.normalize(),
            Err(SyncError::Validation { field: "email" })
        );
    }

    #[test]
    fn empty_birth_date_becomes_absent_not_empty_string() {
        let mut draft = full_draft();
        draft.date_of_birth = "  ".into();
        let fields = draft.normalize().expect("valid draft");
        assert_eq!(fields.date_of_birth, None);

        let body = serde_json::to_value(&fields).expect("serialize");
        assert!(body.get("date_of_birth").is_none());
    }

    #[test]
    fn malformed_birth_date_is_a_validation_failure() {
        let mut draft = full_draft();
        draft.date_of_birth = "02/04/1990".into();
        assert_eq!(
            draft.normalize(),
            Err(SyncError::Validation {
                field: "date_of_birth"
            })
        );
    }

    #[test]
    fn applied_to_replaces_all_mutable_fields_and_keeps_id() {
        let fields = full_draft().normalize().expect("valid draft");
        let before = GuestRecord {
            id: GuestId::new("g-7"),
            first_name: "Old".into(),
            last_name: "Name".into(),
            email: "old@x.com".into(),
            phone: "1".into(),
            address: "somewhere".into(),
            date_of_birth: None,
        };
        let after = fields.applied_to(&before);
        assert_eq!(after.id, GuestId::new("g-7"));
        assert_eq!(after.full_name(), "Jane Doe");
        assert_eq!(after.address, "");
    }
}
