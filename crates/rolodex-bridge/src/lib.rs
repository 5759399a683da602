//! Client for the native contacts bridge helper.
//!
//! The structured backend is a separately-compiled helper executable (built
//! against the platform Contacts framework) that speaks line-delimited JSON
//! over stdio. This crate owns spawning it, the version handshake, and the
//! request/response framing; the helper's internals are out of scope.
//!
//! A spawn failure, handshake failure, or version mismatch is a *load*
//! failure — the loader reports it as `BackendUnavailable` and a later call
//! may retry after the helper is rebuilt out of band.

pub mod error;
mod wire;

pub use error::{Error, Result};

use std::{process::Stdio, time::Duration};

use rolodex_core::{
  auth::AuthorizationStatus,
  contact::{Contact, ContactDetails, ContactInput},
  store::ContactStore,
};
use serde::de::DeserializeOwned;
use tokio::{
  io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
  process::{Child, ChildStdin, ChildStdout, Command},
  sync::Mutex,
};

use wire::{Hello, Request, Response};

/// Protocol version this client speaks; the helper must match exactly.
pub const PROTOCOL_VERSION: u32 = 1;

/// Bound on the `hello` handshake, so a wedged helper cannot stall the
/// first operation forever. Data calls are unbounded — the OS permission
/// prompt legitimately blocks `request_access` until the user answers.
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
struct BridgeIo {
  // Held so the helper lives exactly as long as this handle.
  _child: Child,
  stdin:  ChildStdin,
  stdout: BufReader<ChildStdout>,
}

impl BridgeIo {
  async fn round_trip(&mut self, request: &Request<'_>) -> Result<Response> {
    let mut line = serde_json::to_string(request)?;
    line.push('\n');
    self.stdin.write_all(line.as_bytes()).await?;
    self.stdin.flush().await?;

    let mut reply = String::new();
    if self.stdout.read_line(&mut reply).await? == 0 {
      return Err(Error::Closed);
    }
    Ok(serde_json::from_str(reply.trim())?)
  }
}

/// A loaded handle to the structured contacts backend.
///
/// Calls are serialised: each one is a mutex-held request/response pair on
/// the helper's stdio, matching the strictly in-order wire protocol.
#[derive(Debug)]
pub struct BridgeStore {
  io: Mutex<BridgeIo>,
}

impl BridgeStore {
  /// Spawn the helper at `path` and perform the version handshake.
  pub async fn connect(path: &str) -> Result<Self> {
    tracing::debug!(%path, "spawning contacts bridge helper");
    let mut child = Command::new(path)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .kill_on_drop(true)
      .spawn()
      .map_err(|source| Error::Spawn { path: path.to_string(), source })?;

    let stdin = child
      .stdin
      .take()
      .ok_or_else(|| Error::Handshake("helper stdin pipe missing".into()))?;
    let stdout = child
      .stdout
      .take()
      .ok_or_else(|| Error::Handshake("helper stdout pipe missing".into()))?;

    let mut io = BridgeIo {
      _child: child,
      stdin,
      stdout: BufReader::new(stdout),
    };

    let response =
      match tokio::time::timeout(HANDSHAKE_TIMEOUT, io.round_trip(&Request::Hello))
        .await
      {
        Ok(result) => result
          .map_err(|e| Error::Handshake(e.to_string()))?,
        Err(_) => {
          return Err(Error::Handshake(format!(
            "no hello reply within {} seconds",
            HANDSHAKE_TIMEOUT.as_secs()
          )));
        }
      };

    if !response.ok {
      return Err(Error::Handshake(
        response.error.unwrap_or_else(|| "helper rejected hello".into()),
      ));
    }
    let hello: Hello = serde_json::from_value(response.data)
      .map_err(|e| Error::Handshake(format!("malformed hello payload: {e}")))?;
    if hello.version != PROTOCOL_VERSION {
      return Err(Error::VersionMismatch {
        got:  hello.version,
        want: PROTOCOL_VERSION,
      });
    }

    tracing::info!(version = hello.version, "contacts bridge helper connected");
    Ok(Self { io: Mutex::new(io) })
  }

  async fn call<T: DeserializeOwned>(&self, request: Request<'_>) -> Result<T> {
    let mut io = self.io.lock().await;
    let response = io.round_trip(&request).await?;
    drop(io);

    if !response.ok {
      return Err(Error::Backend(
        response.error.unwrap_or_else(|| "helper reported failure".into()),
      ));
    }
    Ok(serde_json::from_value(response.data)?)
  }
}

impl ContactStore for BridgeStore {
  type Error = Error;

  async fn authorization_status(&self) -> Result<AuthorizationStatus> {
    self.call(Request::Status).await
  }

  async fn request_access(&self) -> Result<AuthorizationStatus> {
    self.call(Request::RequestAccess).await
  }

  async fn all_contacts(&self) -> Result<Vec<Contact>> {
    self.call(Request::List { full: false }).await
  }

  async fn all_contacts_full(&self) -> Result<Vec<ContactDetails>> {
    self.call(Request::List { full: true }).await
  }

  async fn search_by_name(&self, name: &str) -> Result<Vec<Contact>> {
    self.call(Request::Search { name, full: false }).await
  }

  async fn search_by_name_full(&self, name: &str) -> Result<Vec<ContactDetails>> {
    self.call(Request::Search { name, full: true }).await
  }

  async fn add_contact(&self, input: &ContactInput) -> Result<bool> {
    self.call(Request::Add { contact: input }).await
  }

  async fn update_contact(&self, id: &str, record: &ContactInput) -> Result<bool> {
    self.call(Request::Update { id, contact: record }).await
  }

  async fn delete_contact(&self, id: &str) -> Result<bool> {
    self.call(Request::Delete { id }).await
  }
}
