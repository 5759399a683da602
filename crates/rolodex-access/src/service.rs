//! The operation facade the tool shell dispatches into.
//!
//! Holds the backend loader and runs every structured-backend operation
//! behind the access gate. Stateless apart from the loader's cached handle.

use std::sync::Arc;

use rolodex_core::{
  Error, Result,
  auth::AuthorizationStatus,
  contact::{Contact, ContactDetails, ContactInput, ContactPatch},
  store::ContactStore,
};
use serde::Serialize;

use crate::{gate, loader::BackendLoader, mediator, resolver};

/// The payload of the access-check operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReport {
  pub status:  AuthorizationStatus,
  pub granted: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hint:    Option<String>,
}

pub struct ContactsService<S: ContactStore> {
  loader: BackendLoader<S>,
}

impl<S: ContactStore> ContactsService<S> {
  pub fn new(loader: BackendLoader<S>) -> Self {
    Self { loader }
  }

  async fn store(&self) -> Result<Arc<S>> {
    self.loader.load().await
  }

  /// Gate-checked handle; every data operation starts here.
  async fn gated(&self) -> Result<Arc<S>> {
    let store = self.store().await?;
    gate::ensure_access(&*store).await?;
    Ok(store)
  }

  /// Report the authorization status, prompting once if it has never been
  /// determined, with a remediation hint when access is not granted.
  pub async fn check_access(&self) -> Result<AccessReport> {
    let store = self.store().await?;
    let mut status = store.authorization_status().await.map_err(Error::store)?;
    if status == AuthorizationStatus::NotDetermined {
      status = store.request_access().await.map_err(Error::store)?;
    }
    Ok(AccessReport {
      status,
      granted: status.grants_access(),
      hint: gate::remediation_hint(status).map(str::to_string),
    })
  }

  pub async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>> {
    let store = self.gated().await?;
    resolver::search_contacts(&*store, query).await
  }

  pub async fn all_contacts(&self) -> Result<Vec<Contact>> {
    let store = self.gated().await?;
    store.all_contacts().await.map_err(Error::store)
  }

  pub async fn contact_details(&self, id: &str) -> Result<Option<ContactDetails>> {
    let store = self.gated().await?;
    resolver::get_contact_details(&*store, id).await
  }

  pub async fn create_contact(&self, input: &ContactInput) -> Result<()> {
    let store = self.gated().await?;
    mediator::create_contact(&*store, input).await
  }

  pub async fn update_contact(&self, id: &str, patch: &ContactPatch) -> Result<()> {
    let store = self.gated().await?;
    mediator::update_contact(&*store, id, patch).await
  }

  pub async fn delete_contact(&self, id: &str) -> Result<()> {
    let store = self.gated().await?;
    mediator::delete_contact(&*store, id).await
  }
}
