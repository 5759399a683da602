//! The authorization gate run before every structured-backend operation.
//!
//! Scripted operations bypass this gate: the OS applies a separate
//! automation-permission prompt on their first use.

use rolodex_core::{Error, Result, auth::AuthorizationStatus, store::ContactStore};

const DENIED_HINT: &str = "Grant access in System Settings → Privacy & Security \
  → Contacts, or clear the recorded decision with `tccutil reset AddressBook` \
  and try again.";
const RESTRICTED_HINT: &str = "Contacts access is blocked by system policy \
  (parental controls or a configuration profile) and cannot be granted from \
  this process.";
const PROMPT_HINT: &str = "Grant access in System Settings → Privacy & \
  Security → Contacts and retry.";

/// Fail with [`Error::AccessDenied`] unless the current status permits
/// contact access.
///
/// `not-determined` triggers the OS permission prompt exactly once and
/// re-checks the returned status; every other non-granting status (including
/// any unrecognised one) fails immediately without prompting.
pub async fn ensure_access<S: ContactStore>(store: &S) -> Result<()> {
  let status = store.authorization_status().await.map_err(Error::store)?;
  if status.grants_access() {
    return Ok(());
  }

  match status {
    AuthorizationStatus::NotDetermined => {
      tracing::info!("contacts authorization not determined, requesting access");
      let after = store.request_access().await.map_err(Error::store)?;
      if after.grants_access() {
        Ok(())
      } else {
        Err(Error::AccessDenied(format!(
          "Contacts access was not granted (status after prompt: {after}). {PROMPT_HINT}"
        )))
      }
    }
    AuthorizationStatus::Denied => Err(Error::AccessDenied(format!(
      "Contacts access is denied. {DENIED_HINT}"
    ))),
    AuthorizationStatus::Restricted => Err(Error::AccessDenied(format!(
      "Contacts access is restricted. {RESTRICTED_HINT}"
    ))),
    other => Err(Error::AccessDenied(format!(
      "Contacts access is unavailable (status: {other}). {PROMPT_HINT}"
    ))),
  }
}

/// The remediation hint shown for a non-granting `status`, if any.
pub fn remediation_hint(status: AuthorizationStatus) -> Option<&'static str> {
  match status {
    AuthorizationStatus::Authorized | AuthorizationStatus::Limited => None,
    AuthorizationStatus::Denied => Some(DENIED_HINT),
    AuthorizationStatus::Restricted => Some(RESTRICTED_HINT),
    _ => Some(PROMPT_HINT),
  }
}
