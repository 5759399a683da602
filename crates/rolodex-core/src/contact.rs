//! Contact record shapes mirrored from the live OS contacts store.
//!
//! No record here is created or destroyed by rolodex's own logic — every
//! value is fetched per call and discarded after the response. The backend
//! owns all identity; `id` is an opaque backend-assigned string and the only
//! durable handle across calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `{label, value}` pair, used for social profiles and instant-message
/// addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
  pub label: String,
  pub value: String,
}

// ─── Basic projection ────────────────────────────────────────────────────────

/// The basic projection of a contact record.
///
/// `id` is non-empty for every backend-returned record; the name fields may
/// independently be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:               String,
  pub first_name:       String,
  pub last_name:        String,
  pub nickname:         String,
  /// ISO `YYYY-MM-DD`, or empty when unset.
  pub birthday:         String,
  pub phone_numbers:    Vec<String>,
  pub email_addresses:  Vec<String>,
  pub postal_addresses: Vec<String>,
}

impl Contact {
  /// `first last`, trimmed. Empty exactly when both components are empty.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
      .trim()
      .to_string()
  }
}

// ─── Extended projection ─────────────────────────────────────────────────────

/// The extended projection — a superset of [`Contact`] for the same `id`.
/// The backend only populates the extra fields when this projection is
/// explicitly requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
  pub id:               String,
  pub first_name:       String,
  pub last_name:        String,
  pub nickname:         String,
  pub birthday:         String,
  pub phone_numbers:    Vec<String>,
  pub email_addresses:  Vec<String>,
  pub postal_addresses: Vec<String>,

  pub middle_name:       String,
  pub job_title:         String,
  pub department_name:   String,
  pub organization_name: String,
  pub note:              String,
  pub url_addresses:     Vec<String>,
  pub social_profiles:   Vec<LabeledValue>,
  pub instant_message_addresses: Vec<LabeledValue>,
}

impl ContactDetails {
  /// `first last`, trimmed. Empty exactly when both components are empty.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
      .trim()
      .to_string()
  }

  /// The fully-populated input used as the merge base for partial updates.
  /// Every scalar and sequence carries the currently stored value.
  pub fn to_input(&self) -> ContactInput {
    ContactInput {
      first_name:        self.first_name.clone(),
      last_name:         Some(self.last_name.clone()),
      nickname:          Some(self.nickname.clone()),
      middle_name:       Some(self.middle_name.clone()),
      job_title:         Some(self.job_title.clone()),
      department_name:   Some(self.department_name.clone()),
      organization_name: Some(self.organization_name.clone()),
      birthday:          Some(self.birthday.clone()),
      phone_numbers:     Some(self.phone_numbers.clone()),
      email_addresses:   Some(self.email_addresses.clone()),
      url_addresses:     Some(self.url_addresses.clone()),
    }
  }
}

// ─── Write inputs ────────────────────────────────────────────────────────────

/// The assembled record handed to the backend's add/update operations.
///
/// `first_name` is the only mandatory field for creation. A `None` scalar is
/// passed through to the backend unchanged; the sequence fields, when
/// present, replace the stored sequence wholesale — there is no
/// element-level merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
  pub first_name:        String,
  pub last_name:         Option<String>,
  pub nickname:          Option<String>,
  pub middle_name:       Option<String>,
  pub job_title:         Option<String>,
  pub department_name:   Option<String>,
  pub organization_name: Option<String>,
  /// ISO `YYYY-MM-DD`.
  pub birthday:          Option<String>,
  pub phone_numbers:     Option<Vec<String>>,
  pub email_addresses:   Option<Vec<String>>,
  pub url_addresses:     Option<Vec<String>>,
}

/// Caller-supplied partial fields for an update. Fields left `None` retain
/// their stored value; the merge is the write mediator's responsibility, not
/// the backend's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
  pub first_name:        Option<String>,
  pub last_name:         Option<String>,
  pub nickname:          Option<String>,
  pub middle_name:       Option<String>,
  pub job_title:         Option<String>,
  pub department_name:   Option<String>,
  pub organization_name: Option<String>,
  pub birthday:          Option<String>,
  pub phone_numbers:     Option<Vec<String>>,
  pub email_addresses:   Option<Vec<String>>,
  pub url_addresses:     Option<Vec<String>>,
}

/// Whether `s` is a well-formed ISO `YYYY-MM-DD` date.
pub fn is_iso_date(s: &str) -> bool {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
