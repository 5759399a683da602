//! Wiring of the native bridge into the backend loader.

use rolodex_access::BackendLoader;
use rolodex_bridge::BridgeStore;
use rolodex_core::Error;

use crate::config::ServerConfig;

/// Build the lazy loader for the bridge-backed structured store.
///
/// Nothing is spawned here; the helper starts on first use so that a broken
/// or missing helper surfaces as an operation error, not a startup crash.
pub fn loader(cfg: &ServerConfig) -> BackendLoader<BridgeStore> {
  let path = cfg.bridge_path.clone();
  BackendLoader::new(move || {
    let path = path.clone();
    async move {
      BridgeStore::connect(&path).await.map_err(|e| {
        Error::BackendUnavailable(format!(
          "{e}. Rebuild or reinstall the rolodex bridge helper \
           (expected at \"{path}\") and try again."
        ))
      })
    }
  })
}
