//! Lazy, single-flight acquisition of the structured backend handle.
//!
//! The backend is a separately-built native capability that can fail to
//! load (version/ABI mismatch) independently of this process. Loading is
//! deferred to first use so that a failure surfaces as an operation error
//! after the transport is up, never as a startup crash.

use std::{future::Future, pin::Pin, sync::Arc};

use rolodex_core::{Result, store::ContactStore};
use tokio::sync::Mutex;

type LoadFuture<S> = Pin<Box<dyn Future<Output = Result<S>> + Send>>;
type Factory<S> = Box<dyn Fn() -> LoadFuture<S> + Send + Sync>;

/// A two-state cache (unloaded / loaded handle) over an async fallible
/// factory. Loads at most once on success; a failed load leaves the cache
/// empty so a later call retries (for example after the backend is rebuilt
/// out of band).
pub struct BackendLoader<S> {
  cache:   Mutex<Option<Arc<S>>>,
  factory: Factory<S>,
}

impl<S: ContactStore> BackendLoader<S> {
  pub fn new<F, Fut>(factory: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<S>> + Send + 'static,
  {
    Self {
      cache:   Mutex::new(None),
      factory: Box::new(move || -> LoadFuture<S> { Box::pin(factory()) }),
    }
  }

  /// Return the loaded handle, loading on first use.
  ///
  /// The cache lock is held across the load, so concurrent callers observe
  /// the single in-flight attempt rather than triggering duplicate loads.
  pub async fn load(&self) -> Result<Arc<S>> {
    let mut cache = self.cache.lock().await;
    if let Some(handle) = cache.as_ref() {
      return Ok(Arc::clone(handle));
    }

    match (self.factory)().await {
      Ok(store) => {
        let handle = Arc::new(store);
        *cache = Some(Arc::clone(&handle));
        tracing::info!("contacts backend loaded");
        Ok(handle)
      }
      Err(e) => {
        tracing::warn!("contacts backend failed to load: {e}");
        Err(e)
      }
    }
  }
}
