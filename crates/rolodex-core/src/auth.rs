//! Authorization status for the OS contacts store.
//!
//! This is process/OS-scoped state owned by the platform. Rolodex reads it,
//! and in exactly one case advances it (`not-determined` → prompt), but
//! never sets it to any terminal value itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed authorization enumeration reported by the structured backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
  /// The user has not yet been asked; a prompt may be triggered.
  NotDetermined,
  Authorized,
  Denied,
  /// Access is blocked by system policy (parental controls, MDM profile)
  /// and cannot be granted from this process.
  Restricted,
  /// Partial access to a user-chosen subset of contacts (macOS 14+).
  Limited,
  /// Any status string this client does not recognise. Treated like a
  /// terminal refusal: never prompted past, never granted.
  #[serde(other)]
  Unknown,
}

impl AuthorizationStatus {
  /// Whether structured-backend operations may proceed under this status.
  pub fn grants_access(self) -> bool {
    matches!(self, Self::Authorized | Self::Limited)
  }
}

impl fmt::Display for AuthorizationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::NotDetermined => "not-determined",
      Self::Authorized    => "authorized",
      Self::Denied        => "denied",
      Self::Restricted    => "restricted",
      Self::Limited       => "limited",
      Self::Unknown       => "unknown",
    };
    f.write_str(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wire_strings_are_kebab_case() {
    let s: AuthorizationStatus = serde_json::from_str("\"not-determined\"").unwrap();
    assert_eq!(s, AuthorizationStatus::NotDetermined);
    let s: AuthorizationStatus = serde_json::from_str("\"limited\"").unwrap();
    assert_eq!(s, AuthorizationStatus::Limited);
    assert_eq!(
      serde_json::to_string(&AuthorizationStatus::Denied).unwrap(),
      "\"denied\""
    );
  }

  #[test]
  fn unrecognised_status_decodes_to_unknown() {
    let s: AuthorizationStatus = serde_json::from_str("\"write-only\"").unwrap();
    assert_eq!(s, AuthorizationStatus::Unknown);
    assert!(!s.grants_access());
  }

  #[test]
  fn only_authorized_and_limited_grant_access() {
    assert!(AuthorizationStatus::Authorized.grants_access());
    assert!(AuthorizationStatus::Limited.grants_access());
    assert!(!AuthorizationStatus::NotDetermined.grants_access());
    assert!(!AuthorizationStatus::Denied.grants_access());
    assert!(!AuthorizationStatus::Restricted.grants_access());
  }
}
