//! Script execution through the out-of-process `osascript` interpreter.

use std::{process::Stdio, time::Duration};

use rolodex_core::{Error, Result, script::ScriptRunner};
use tokio::process::Command;

/// Upper bound on one script execution. Fixed, not caller-configurable.
pub const SCRIPT_TIMEOUT: Duration = Duration::from_secs(15);

/// Runs scripts through `osascript`.
///
/// The script is passed as a discrete argument to `-e` — never concatenated
/// into a shell command line — so no shell quoting layer exists to escape
/// for beyond the AppleScript literal escaping done at build time.
#[derive(Debug, Clone)]
pub struct OsaRunner {
  osascript: String,
}

impl OsaRunner {
  pub fn new(osascript_path: impl Into<String>) -> Self {
    Self { osascript: osascript_path.into() }
  }
}

impl Default for OsaRunner {
  fn default() -> Self {
    Self::new("osascript")
  }
}

impl ScriptRunner for OsaRunner {
  async fn run(&self, script: &str) -> Result<String> {
    tracing::debug!(bytes = script.len(), "running osascript");

    let child = Command::new(&self.osascript)
      .arg("-e")
      .arg(script)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      // Dropping the wait future on timeout must also reap the process.
      .kill_on_drop(true)
      .spawn()
      .map_err(|e| {
        Error::Automation(format!("failed to start {}: {e}", self.osascript))
      })?;

    let output =
      match tokio::time::timeout(SCRIPT_TIMEOUT, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(Error::Automation(e.to_string())),
        Err(_) => {
          return Err(Error::Automation(format!(
            "script timed out after {} seconds",
            SCRIPT_TIMEOUT.as_secs()
          )));
        }
      };

    if output.status.success() {
      Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      let message = if stderr.is_empty() {
        format!("script exited with {}", output.status)
      } else {
        stderr
      };
      Err(Error::Automation(message))
    }
  }
}
