//! Wire shapes for the line-delimited JSON protocol spoken with the bridge
//! helper. One request line, one response line, in order.

use rolodex_core::contact::ContactInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub(crate) enum Request<'a> {
  Hello,
  Status,
  RequestAccess,
  List { full: bool },
  Search { name: &'a str, full: bool },
  Add { contact: &'a ContactInput },
  Update { id: &'a str, contact: &'a ContactInput },
  Delete { id: &'a str },
}

#[derive(Debug, Deserialize)]
pub(crate) struct Response {
  pub ok:    bool,
  #[serde(default)]
  pub data:  serde_json::Value,
  #[serde(default)]
  pub error: Option<String>,
}

/// Payload of the `hello` handshake response.
#[derive(Debug, Deserialize)]
pub(crate) struct Hello {
  pub version: u32,
}
