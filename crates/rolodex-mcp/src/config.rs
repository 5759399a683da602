//! Server configuration, layered from an optional TOML file and
//! `ROLODEX_`-prefixed environment variables.

use std::path::Path;

use serde::Deserialize;

/// Runtime configuration. Every field has a working default; the config
/// file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  /// Path to the native contacts bridge helper executable.
  pub bridge_path:    String,
  /// Path to the AppleScript interpreter.
  pub osascript_path: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bridge_path:    "rolodex-bridge-helper".to_string(),
      osascript_path: "osascript".to_string(),
    }
  }
}

/// Load configuration from `path` (if it exists) and the environment.
pub fn load(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("ROLODEX"))
    .build()?;
  settings.try_deserialize()
}
