//! Group and export operations, implemented purely over the script runner.
//!
//! Each operation builds one script, executes it, and parses a small fixed
//! vocabulary of return values. Contact references on this surface are
//! exact-name matches; a genuinely missing contact or group in the add and
//! remove operations surfaces as the underlying automation failure, not as
//! a structured not-found.

use rolodex_core::{Error, Result, script::ScriptRunner};
use serde::Serialize;

use crate::script;

/// Sentinel a member-listing script returns when the group does not exist,
/// to keep that case distinct from a group with no members.
const GROUP_NOT_FOUND: &str = "GROUP_NOT_FOUND";

/// Outcome of a group mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupChange {
  pub success: bool,
  pub message: String,
}

pub struct GroupDirectory<R: ScriptRunner> {
  runner: R,
}

impl<R: ScriptRunner> GroupDirectory<R> {
  pub fn new(runner: R) -> Self {
    Self { runner }
  }

  /// Names of every group. Empty output means no groups.
  pub async fn list_groups(&self) -> Result<Vec<String>> {
    let out = self.runner.run(&script::list_groups()).await?;
    Ok(split_names(&out))
  }

  /// Create a group if absent. Idempotent: an existing group is reported as
  /// success with a different message.
  pub async fn create_group(&self, name: &str) -> Result<GroupChange> {
    let out = self.runner.run(&script::create_group(name)).await?;
    match out.as_str() {
      "created" => Ok(GroupChange {
        success: true,
        message: format!("Group \"{name}\" created"),
      }),
      "exists" => Ok(GroupChange {
        success: true,
        message: format!("Group \"{name}\" already exists"),
      }),
      other => Err(Error::Automation(format!(
        "unexpected script output: {other}"
      ))),
    }
  }

  /// Delete a group. Member contacts are never deleted — membership is a
  /// set relation, not ownership.
  pub async fn delete_group(&self, name: &str) -> Result<GroupChange> {
    let out = self.runner.run(&script::delete_group(name)).await?;
    match out.as_str() {
      "deleted" => Ok(GroupChange {
        success: true,
        message: format!("Group \"{name}\" deleted"),
      }),
      "not_found" => Ok(GroupChange {
        success: false,
        message: format!("Group \"{name}\" does not exist"),
      }),
      other => Err(Error::Automation(format!(
        "unexpected script output: {other}"
      ))),
    }
  }

  /// Full names of a group's members. [`Error::NotFound`] when the group
  /// itself is absent; an existing group with no members is an empty list.
  pub async fn group_members(&self, name: &str) -> Result<Vec<String>> {
    let out = self.runner.run(&script::group_members(name)).await?;
    if out == GROUP_NOT_FOUND {
      return Err(Error::NotFound(format!("group \"{name}\"")));
    }
    Ok(split_names(&out))
  }

  /// Add the first person matching `contact_name` exactly to the group.
  pub async fn add_contact_to_group(
    &self,
    contact_name: &str,
    group_name: &str,
  ) -> Result<()> {
    self
      .runner
      .run(&script::add_to_group(contact_name, group_name))
      .await?;
    Ok(())
  }

  /// Remove the first person matching `contact_name` exactly from the group.
  pub async fn remove_contact_from_group(
    &self,
    contact_name: &str,
    group_name: &str,
  ) -> Result<()> {
    self
      .runner
      .run(&script::remove_from_group(contact_name, group_name))
      .await?;
    Ok(())
  }

  /// The vCard text of the first person matching `contact_name` exactly,
  /// trimmed.
  pub async fn export_vcard(&self, contact_name: &str) -> Result<String> {
    self.runner.run(&script::export_vcard(contact_name)).await
  }
}

fn split_names(output: &str) -> Vec<String> {
  if output.is_empty() {
    return Vec::new();
  }
  output.split(", ").map(str::to_string).collect()
}
