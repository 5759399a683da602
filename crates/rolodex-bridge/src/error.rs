//! Error types for the bridge client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to start bridge helper {path}: {source}")]
  Spawn {
    path:   String,
    #[source]
    source: std::io::Error,
  },

  #[error("bridge helper speaks protocol version {got}, this client speaks {want}")]
  VersionMismatch { got: u32, want: u32 },

  #[error("bridge handshake failed: {0}")]
  Handshake(String),

  #[error("bridge helper closed the connection")]
  Closed,

  #[error("bridge i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("bridge wire error: {0}")]
  Wire(#[from] serde_json::Error),

  /// The helper serviced the call but reported a failure of its own.
  #[error("{0}")]
  Backend(String),
}

impl Error {
  /// Whether this error means the helper never became usable — the cases
  /// the loader reports as `BackendUnavailable`.
  pub fn is_load_failure(&self) -> bool {
    matches!(
      self,
      Self::Spawn { .. } | Self::VersionMismatch { .. } | Self::Handshake(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
