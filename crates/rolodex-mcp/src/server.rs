//! The stdio JSON-RPC loop.
//!
//! Stdout carries protocol frames only; all diagnostics go to stderr via
//! `tracing`. Requests are handled sequentially — one asynchronous unit of
//! work per frame, interleaved only at the await points of the backends.

use rolodex_access::ContactsService;
use rolodex_applescript::GroupDirectory;
use rolodex_core::{script::ScriptRunner, store::ContactStore};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const SERVER_NAME: &str = "rolodex";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;

#[derive(Debug, Deserialize)]
struct Request {
  #[serde(default)]
  id:     Option<Value>,
  method: String,
  #[serde(default)]
  params: Value,
}

/// The tool server: both backend ports behind the JSON-RPC dispatch.
pub struct Server<S: ContactStore, R: ScriptRunner> {
  service: ContactsService<S>,
  groups:  GroupDirectory<R>,
}

impl<S: ContactStore, R: ScriptRunner> Server<S, R> {
  pub fn new(service: ContactsService<S>, groups: GroupDirectory<R>) -> Self {
    Self { service, groups }
  }

  /// Serve frames from `input` until it closes. Transport errors are the
  /// only failures that escape; everything else is answered in-band.
  pub async fn run<I, O>(&self, input: I, mut output: O) -> std::io::Result<()>
  where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
  {
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      if let Some(frame) = self.handle_line(line).await {
        let mut text = frame.to_string();
        text.push('\n');
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
      }
    }
    tracing::info!("stdin closed, shutting down");
    Ok(())
  }

  /// Handle one frame. `None` for notifications (no reply owed).
  pub async fn handle_line(&self, line: &str) -> Option<Value> {
    let request: Request = match serde_json::from_str(line) {
      Ok(request) => request,
      Err(e) => {
        tracing::warn!("unparseable frame: {e}");
        // Salvage an id if the line is valid JSON with one, so the reply
        // can be correlated.
        let id = serde_json::from_str::<Value>(line)
          .ok()
          .and_then(|v| v.get("id").cloned());
        return Some(error_frame(id, PARSE_ERROR, "parse error"));
      }
    };
    self.handle_request(request).await
  }

  async fn handle_request(&self, request: Request) -> Option<Value> {
    if request.method.starts_with("notifications/") {
      return None;
    }
    let id = request.id.clone();
    tracing::debug!(method = %request.method, "handling request");

    let frame = match request.method.as_str() {
      "initialize" => result_frame(
        id,
        json!({
          "protocolVersion": PROTOCOL_VERSION,
          "capabilities": { "tools": {} },
          "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
        }),
      ),
      "ping" => result_frame(id, json!({})),
      "tools/list" => result_frame(id, json!({ "tools": crate::tools::definitions() })),
      "tools/call" => {
        let name = request.params["name"].as_str().unwrap_or_default().to_string();
        let args = request.params.get("arguments").cloned().unwrap_or(json!({}));
        let outcome =
          crate::tools::call(&self.service, &self.groups, &name, &args).await;
        if outcome.is_error {
          tracing::debug!(tool = %name, "tool call failed: {}", outcome.text);
        }
        result_frame(
          id,
          json!({
            "content": [{ "type": "text", "text": outcome.text }],
            "isError": outcome.is_error,
          }),
        )
      }
      other => error_frame(id, METHOD_NOT_FOUND, &format!("method not found: {other}")),
    };
    Some(frame)
  }
}

fn result_frame(id: Option<Value>, result: Value) -> Value {
  json!({
    "jsonrpc": "2.0",
    "id":      id.unwrap_or(Value::Null),
    "result":  result,
  })
}

fn error_frame(id: Option<Value>, code: i64, message: &str) -> Value {
  json!({
    "jsonrpc": "2.0",
    "id":      id.unwrap_or(Value::Null),
    "error":   { "code": code, "message": message },
  })
}
