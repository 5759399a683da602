//! Tool registry: names, input schemas, validation, and dispatch.

use rolodex_access::ContactsService;
use rolodex_applescript::GroupDirectory;
use rolodex_core::{
  Error,
  contact::{ContactInput, ContactPatch, is_iso_date},
  script::ScriptRunner,
  store::ContactStore,
};
use serde::Serialize;
use serde_json::{Value, json};

// ─── Call results ────────────────────────────────────────────────────────────

/// The outcome of one tool call: a text payload plus the out-of-band error
/// flag. Failures are data, never protocol faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
  pub text:     String,
  pub is_error: bool,
}

impl CallResult {
  fn success<T: Serialize>(payload: &T) -> Self {
    match serde_json::to_string_pretty(payload) {
      Ok(text) => Self { text, is_error: false },
      Err(e) => Self::message(format!("failed to serialise payload: {e}")),
    }
  }

  fn failure(err: &Error) -> Self {
    Self::message(err.to_string())
  }

  fn message(message: impl Into<String>) -> Self {
    let body = json!({ "error": message.into() });
    Self {
      text:     serde_json::to_string_pretty(&body)
        .unwrap_or_else(|_| body.to_string()),
      is_error: true,
    }
  }
}

fn outcome<T: Serialize>(result: Result<T, Error>) -> CallResult {
  match result {
    Ok(payload) => CallResult::success(&payload),
    Err(e) => CallResult::failure(&e),
  }
}

// ─── Input validation ────────────────────────────────────────────────────────

fn require_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
  match args.get(key).and_then(Value::as_str) {
    Some(s) if !s.trim().is_empty() => Ok(s),
    Some(_) => Err(format!("argument \"{key}\" must not be empty")),
    None => Err(format!("missing required argument \"{key}\"")),
  }
}

fn check_birthday(birthday: Option<&str>) -> Result<(), String> {
  match birthday {
    Some(b) if !is_iso_date(b) => {
      Err(format!("birthday \"{b}\" is not an ISO YYYY-MM-DD date"))
    }
    _ => Ok(()),
  }
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Run the named tool against the two backends.
pub async fn call<S, R>(
  service: &ContactsService<S>,
  groups: &GroupDirectory<R>,
  name: &str,
  args: &Value,
) -> CallResult
where
  S: ContactStore,
  R: ScriptRunner,
{
  macro_rules! require {
    ($key:literal) => {
      match require_str(args, $key) {
        Ok(v) => v,
        Err(e) => return CallResult::message(e),
      }
    };
  }

  match name {
    // ── Structured backend ────────────────────────────────────────────
    "check_contacts_access" => outcome(service.check_access().await),

    "search_contacts" => {
      let query = require!("query");
      outcome(service.search_contacts(query).await)
    }

    "get_all_contacts" => outcome(service.all_contacts().await),

    "get_contact_details" => {
      let id = require!("id");
      match service.contact_details(id).await {
        Ok(Some(details)) => CallResult::success(&details),
        Ok(None) => CallResult::success(&json!({
          "found": false,
          "message": format!("no contact with identifier \"{id}\""),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    "create_contact" => {
      require!("firstName");
      let input: ContactInput = match serde_json::from_value(args.clone()) {
        Ok(input) => input,
        Err(e) => return CallResult::message(format!("invalid contact input: {e}")),
      };
      if let Err(e) = check_birthday(input.birthday.as_deref()) {
        return CallResult::message(e);
      }
      match service.create_contact(&input).await {
        Ok(()) => CallResult::success(&json!({
          "success": true,
          // The backend does not report the new identifier; callers
          // re-resolve by name, first match wins.
          "message": format!(
            "Contact \"{}\" created; use search_contacts to obtain its identifier",
            input.first_name
          ),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    "update_contact" => {
      let id = require!("id");
      let patch: ContactPatch = match serde_json::from_value(args.clone()) {
        Ok(patch) => patch,
        Err(e) => return CallResult::message(format!("invalid contact input: {e}")),
      };
      if let Err(e) = check_birthday(patch.birthday.as_deref()) {
        return CallResult::message(e);
      }
      match service.update_contact(id, &patch).await {
        Ok(()) => CallResult::success(&json!({
          "success": true,
          "message": format!("Contact \"{id}\" updated"),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    "delete_contact" => {
      let id = require!("id");
      match service.delete_contact(id).await {
        Ok(()) => CallResult::success(&json!({
          "success": true,
          "message": format!("Contact \"{id}\" deleted"),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    // ── Scripted backend ──────────────────────────────────────────────
    "list_groups" => outcome(groups.list_groups().await),

    "create_group" => {
      let name = require!("name");
      outcome(groups.create_group(name).await)
    }

    "delete_group" => {
      let name = require!("name");
      outcome(groups.delete_group(name).await)
    }

    "get_group_members" => {
      let name = require!("groupName");
      outcome(groups.group_members(name).await)
    }

    "add_contact_to_group" => {
      let contact = require!("contactName");
      let group = require!("groupName");
      match groups.add_contact_to_group(contact, group).await {
        Ok(()) => CallResult::success(&json!({
          "success": true,
          "message": format!("Added \"{contact}\" to group \"{group}\""),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    "remove_contact_from_group" => {
      let contact = require!("contactName");
      let group = require!("groupName");
      match groups.remove_contact_from_group(contact, group).await {
        Ok(()) => CallResult::success(&json!({
          "success": true,
          "message": format!("Removed \"{contact}\" from group \"{group}\""),
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    "export_contact_vcard" => {
      let contact = require!("contactName");
      match groups.export_vcard(contact).await {
        Ok(vcard) => CallResult::success(&json!({
          "name":  contact,
          "vcard": vcard,
        })),
        Err(e) => CallResult::failure(&e),
      }
    }

    other => CallResult::message(format!("unknown tool: {other}")),
  }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// The `tools/list` payload.
pub fn definitions() -> Value {
  let string = |description: &str| json!({ "type": "string", "description": description });
  let string_list =
    |description: &str| json!({ "type": "array", "items": { "type": "string" }, "description": description });

  let contact_fields = json!({
    "firstName":        string("First name"),
    "lastName":         string("Last name"),
    "nickname":         string("Nickname"),
    "middleName":       string("Middle name"),
    "jobTitle":         string("Job title"),
    "departmentName":   string("Department"),
    "organizationName": string("Organization"),
    "birthday":         string("Birthday as YYYY-MM-DD"),
    "phoneNumbers":     string_list("Phone numbers (replaces the stored list)"),
    "emailAddresses":   string_list("Email addresses (replaces the stored list)"),
    "urlAddresses":     string_list("URLs (replaces the stored list)"),
  });

  let mut update_fields = contact_fields.clone();
  update_fields["id"] = string("Contact identifier from search_contacts or get_all_contacts");

  json!([
    tool(
      "check_contacts_access",
      "Check (and, if never asked, request) authorization to the macOS contacts store",
      schema(json!({}), &[]),
    ),
    tool(
      "search_contacts",
      "Search contacts by name, nickname, email, or phone number",
      schema(json!({ "query": string("Search text") }), &["query"]),
    ),
    tool(
      "get_all_contacts",
      "List every contact (basic fields)",
      schema(json!({}), &[]),
    ),
    tool(
      "get_contact_details",
      "Fetch the full record for one contact by identifier",
      schema(json!({ "id": string("Contact identifier") }), &["id"]),
    ),
    tool(
      "create_contact",
      "Create a contact; firstName is the only required field",
      schema(contact_fields, &["firstName"]),
    ),
    tool(
      "update_contact",
      "Update a contact; omitted fields keep their current values",
      schema(update_fields, &["id"]),
    ),
    tool(
      "delete_contact",
      "Delete a contact by identifier (irreversible)",
      schema(json!({ "id": string("Contact identifier") }), &["id"]),
    ),
    tool(
      "list_groups",
      "List every contact group",
      schema(json!({}), &[]),
    ),
    tool(
      "create_group",
      "Create a contact group (succeeds if it already exists)",
      schema(json!({ "name": string("Group name") }), &["name"]),
    ),
    tool(
      "delete_group",
      "Delete a contact group; member contacts are not deleted",
      schema(json!({ "name": string("Group name") }), &["name"]),
    ),
    tool(
      "get_group_members",
      "List the full names of a group's members",
      schema(json!({ "groupName": string("Group name") }), &["groupName"]),
    ),
    tool(
      "add_contact_to_group",
      "Add a contact to a group by exact full name",
      schema(
        json!({
          "contactName": string("Contact full name (exact match)"),
          "groupName":   string("Group name"),
        }),
        &["contactName", "groupName"],
      ),
    ),
    tool(
      "remove_contact_from_group",
      "Remove a contact from a group by exact full name",
      schema(
        json!({
          "contactName": string("Contact full name (exact match)"),
          "groupName":   string("Group name"),
        }),
        &["contactName", "groupName"],
      ),
    ),
    tool(
      "export_contact_vcard",
      "Export one contact as vCard text, by exact full name",
      schema(
        json!({ "contactName": string("Contact full name (exact match)") }),
        &["contactName"],
      ),
    ),
  ])
}

fn tool(name: &str, description: &str, input_schema: Value) -> Value {
  json!({
    "name":        name,
    "description": description,
    "inputSchema": input_schema,
  })
}

fn schema(properties: Value, required: &[&str]) -> Value {
  json!({
    "type":       "object",
    "properties": properties,
    "required":   required,
  })
}
