//! The `ScriptRunner` trait — the scripted UI-automation backend port.

use std::future::Future;

use crate::error::Result;

/// Executes a textual script against the contacts application.
///
/// Success is the command's output with surrounding whitespace trimmed;
/// every failure (non-zero exit, timeout, spawn failure) is normalised into
/// [`Error::Automation`](crate::Error::Automation).
///
/// Operations on this port are not gated by the contacts authorization
/// check — the OS applies its own automation-permission prompt on first use.
pub trait ScriptRunner: Send + Sync {
  fn run<'a>(
    &'a self,
    script: &'a str,
  ) -> impl Future<Output = Result<String>> + Send + 'a;
}
