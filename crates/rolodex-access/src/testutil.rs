//! A configurable in-memory `ContactStore` for tests in this crate.

use std::{
  collections::HashMap,
  convert::Infallible,
  sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use rolodex_core::{
  auth::AuthorizationStatus,
  contact::{Contact, ContactDetails, ContactInput},
  store::ContactStore,
};

/// A fake structured backend. The native search only recognises queries
/// listed in `search_index`, mirroring the real backend's habit of missing
/// queries the manual scan would match.
#[derive(Debug)]
pub struct FakeStore {
  pub status:        Mutex<AuthorizationStatus>,
  pub prompt_result: AuthorizationStatus,
  pub prompt_calls:  AtomicUsize,
  pub scan_calls:    AtomicUsize,
  pub scan_full_calls:   AtomicUsize,
  pub search_calls:      AtomicUsize,
  pub search_full_calls: AtomicUsize,

  pub basics: Mutex<Vec<Contact>>,
  pub fulls:  Mutex<Vec<ContactDetails>>,
  /// Query → ids the native search reports for it (both projections).
  pub search_index: Mutex<HashMap<String, Vec<String>>>,

  pub add_result:    bool,
  pub update_result: bool,
  pub delete_result: bool,
  pub last_update:   Mutex<Option<(String, ContactInput)>>,
  pub next_id:       AtomicUsize,
}

impl Default for FakeStore {
  fn default() -> Self {
    Self {
      status:            Mutex::new(AuthorizationStatus::Authorized),
      prompt_result:     AuthorizationStatus::Authorized,
      prompt_calls:      AtomicUsize::new(0),
      scan_calls:        AtomicUsize::new(0),
      scan_full_calls:   AtomicUsize::new(0),
      search_calls:      AtomicUsize::new(0),
      search_full_calls: AtomicUsize::new(0),
      basics:            Mutex::new(Vec::new()),
      fulls:             Mutex::new(Vec::new()),
      search_index:      Mutex::new(HashMap::new()),
      add_result:        true,
      update_result:     true,
      delete_result:     true,
      last_update:       Mutex::new(None),
      next_id:           AtomicUsize::new(1),
    }
  }
}

impl FakeStore {
  pub fn with_status(status: AuthorizationStatus) -> Self {
    let store = Self::default();
    *store.status.lock().unwrap() = status;
    store
  }

  /// Insert a contact into both projections and return its id.
  pub fn seed(&self, details: ContactDetails) -> String {
    let id = details.id.clone();
    self.basics.lock().unwrap().push(Contact {
      id:               details.id.clone(),
      first_name:       details.first_name.clone(),
      last_name:        details.last_name.clone(),
      nickname:         details.nickname.clone(),
      birthday:         details.birthday.clone(),
      phone_numbers:    details.phone_numbers.clone(),
      email_addresses:  details.email_addresses.clone(),
      postal_addresses: details.postal_addresses.clone(),
    });
    self.fulls.lock().unwrap().push(details);
    id
  }

  /// Teach the native search to answer `query` with the given ids.
  pub fn index(&self, query: &str, ids: &[&str]) {
    self
      .search_index
      .lock()
      .unwrap()
      .insert(query.to_string(), ids.iter().map(|s| s.to_string()).collect());
  }

  fn hits(&self, name: &str) -> Vec<String> {
    self
      .search_index
      .lock()
      .unwrap()
      .get(name)
      .cloned()
      .unwrap_or_default()
  }
}

impl ContactStore for FakeStore {
  type Error = Infallible;

  async fn authorization_status(&self) -> Result<AuthorizationStatus, Infallible> {
    Ok(*self.status.lock().unwrap())
  }

  async fn request_access(&self) -> Result<AuthorizationStatus, Infallible> {
    self.prompt_calls.fetch_add(1, Ordering::SeqCst);
    *self.status.lock().unwrap() = self.prompt_result;
    Ok(self.prompt_result)
  }

  async fn all_contacts(&self) -> Result<Vec<Contact>, Infallible> {
    self.scan_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.basics.lock().unwrap().clone())
  }

  async fn all_contacts_full(&self) -> Result<Vec<ContactDetails>, Infallible> {
    self.scan_full_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.fulls.lock().unwrap().clone())
  }

  async fn search_by_name(&self, name: &str) -> Result<Vec<Contact>, Infallible> {
    self.search_calls.fetch_add(1, Ordering::SeqCst);
    let ids = self.hits(name);
    Ok(
      self
        .basics
        .lock()
        .unwrap()
        .iter()
        .filter(|c| ids.contains(&c.id))
        .cloned()
        .collect(),
    )
  }

  async fn search_by_name_full(
    &self,
    name: &str,
  ) -> Result<Vec<ContactDetails>, Infallible> {
    self.search_full_calls.fetch_add(1, Ordering::SeqCst);
    let ids = self.hits(name);
    Ok(
      self
        .fulls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| ids.contains(&c.id))
        .cloned()
        .collect(),
    )
  }

  async fn add_contact(&self, input: &ContactInput) -> Result<bool, Infallible> {
    if !self.add_result {
      return Ok(false);
    }
    let id = format!("fake-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
    self.seed(ContactDetails {
      id,
      first_name:      input.first_name.clone(),
      last_name:       input.last_name.clone().unwrap_or_default(),
      nickname:        input.nickname.clone().unwrap_or_default(),
      birthday:        input.birthday.clone().unwrap_or_default(),
      phone_numbers:   input.phone_numbers.clone().unwrap_or_default(),
      email_addresses: input.email_addresses.clone().unwrap_or_default(),
      middle_name:     input.middle_name.clone().unwrap_or_default(),
      job_title:       input.job_title.clone().unwrap_or_default(),
      department_name: input.department_name.clone().unwrap_or_default(),
      organization_name: input.organization_name.clone().unwrap_or_default(),
      url_addresses:   input.url_addresses.clone().unwrap_or_default(),
      ..Default::default()
    });
    Ok(true)
  }

  async fn update_contact(
    &self,
    id: &str,
    record: &ContactInput,
  ) -> Result<bool, Infallible> {
    *self.last_update.lock().unwrap() = Some((id.to_string(), record.clone()));
    if !self.update_result {
      return Ok(false);
    }
    let mut fulls = self.fulls.lock().unwrap();
    if let Some(details) = fulls.iter_mut().find(|d| d.id == id) {
      details.first_name = record.first_name.clone();
      if let Some(v) = &record.last_name { details.last_name = v.clone(); }
      if let Some(v) = &record.nickname { details.nickname = v.clone(); }
      if let Some(v) = &record.middle_name { details.middle_name = v.clone(); }
      if let Some(v) = &record.job_title { details.job_title = v.clone(); }
      if let Some(v) = &record.department_name { details.department_name = v.clone(); }
      if let Some(v) = &record.organization_name { details.organization_name = v.clone(); }
      if let Some(v) = &record.birthday { details.birthday = v.clone(); }
      if let Some(v) = &record.phone_numbers { details.phone_numbers = v.clone(); }
      if let Some(v) = &record.email_addresses { details.email_addresses = v.clone(); }
      if let Some(v) = &record.url_addresses { details.url_addresses = v.clone(); }
    }
    drop(fulls);
    let fulls = self.fulls.lock().unwrap();
    let mut basics = self.basics.lock().unwrap();
    if let (Some(d), Some(b)) = (
      fulls.iter().find(|d| d.id == id),
      basics.iter_mut().find(|b| b.id == id),
    ) {
      b.first_name = d.first_name.clone();
      b.last_name = d.last_name.clone();
      b.nickname = d.nickname.clone();
      b.birthday = d.birthday.clone();
      b.phone_numbers = d.phone_numbers.clone();
      b.email_addresses = d.email_addresses.clone();
    }
    Ok(true)
  }

  async fn delete_contact(&self, id: &str) -> Result<bool, Infallible> {
    if !self.delete_result {
      return Ok(false);
    }
    self.basics.lock().unwrap().retain(|c| c.id != id);
    self.fulls.lock().unwrap().retain(|c| c.id != id);
    Ok(true)
  }
}

/// A minimal details record with the given id and name.
pub fn person(id: &str, first: &str, last: &str) -> ContactDetails {
  ContactDetails {
    id:         id.to_string(),
    first_name: first.to_string(),
    last_name:  last.to_string(),
    ..Default::default()
  }
}
