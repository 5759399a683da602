//! The shared error taxonomy for rolodex operations.
//!
//! Every public operation converts these into a structured failure payload
//! at its boundary; no failure escapes to the host process as a protocol
//! fault.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Contacts authorization is not (or could not be) granted. The message
  /// names the current status and how to remediate it.
  #[error("{0}")]
  AccessDenied(String),

  /// The structured backend failed to load. Carries a remediation hint; a
  /// later call retries the load.
  #[error("contacts backend unavailable: {0}")]
  BackendUnavailable(String),

  /// A contact or group is absent where the backend distinguishes this case
  /// explicitly. Detail-by-identifier lookups do *not* use this — a missing
  /// identifier there is a normal `None` result.
  #[error("not found: {0}")]
  NotFound(String),

  /// A scripted automation command failed or threw. The `AppleScript error:`
  /// prefix is part of the contract — callers pattern-match on it.
  #[error("AppleScript error: {0}")]
  Automation(String),

  /// The backend reported boolean failure with no further detail.
  #[error("{0}")]
  OperationFailed(String),

  /// The structured backend threw while servicing a call.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error into the generic [`Error::Store`] variant.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
