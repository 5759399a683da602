//! Write-path mediation: create/delete delegation and the partial-update
//! merge.
//!
//! The backend overwrites whole records, so preserving untouched fields on
//! update is this layer's job: current state is fetched first and only the
//! caller-supplied fields are overlaid.

use rolodex_core::{
  Error, Result,
  contact::{ContactDetails, ContactInput, ContactPatch},
  store::ContactStore,
};

use crate::resolver;

/// Create a contact. `first_name` is the only mandatory field.
///
/// The backend does not report the new identifier; a caller that needs it
/// must re-resolve by name afterwards (and be prepared for ambiguity when
/// several contacts share the same name — the first name-equality match
/// wins, a known limitation).
pub async fn create_contact<S: ContactStore>(
  store: &S,
  input: &ContactInput,
) -> Result<()> {
  if store.add_contact(input).await.map_err(Error::store)? {
    Ok(())
  } else {
    Err(Error::OperationFailed(format!(
      "failed to create contact \"{}\"",
      input.first_name
    )))
  }
}

/// Overlay `patch` onto the stored record and delegate the assembled result
/// to the backend's update operation.
///
/// Scalars come from the patch when present, else from the stored value.
/// Sequence fields supplied in the patch replace the stored sequence
/// wholesale; left unspecified they are carried over unchanged.
pub async fn update_contact<S: ContactStore>(
  store: &S,
  id: &str,
  patch: &ContactPatch,
) -> Result<()> {
  let current = resolver::get_contact_details(store, id)
    .await?
    .ok_or_else(|| Error::NotFound(format!("contact with identifier \"{id}\"")))?;

  let record = merge(&current, patch);
  if store
    .update_contact(id, &record)
    .await
    .map_err(Error::store)?
  {
    Ok(())
  } else {
    Err(Error::OperationFailed(format!(
      "failed to update contact \"{id}\""
    )))
  }
}

/// Delete by identifier. No existence pre-check — the backend is
/// authoritative on not-found handling for delete.
pub async fn delete_contact<S: ContactStore>(store: &S, id: &str) -> Result<()> {
  if store.delete_contact(id).await.map_err(Error::store)? {
    Ok(())
  } else {
    Err(Error::OperationFailed(format!(
      "failed to delete contact \"{id}\""
    )))
  }
}

fn merge(current: &ContactDetails, patch: &ContactPatch) -> ContactInput {
  let base = current.to_input();
  ContactInput {
    first_name: patch
      .first_name
      .clone()
      .unwrap_or(base.first_name),
    last_name:         patch.last_name.clone().or(base.last_name),
    nickname:          patch.nickname.clone().or(base.nickname),
    middle_name:       patch.middle_name.clone().or(base.middle_name),
    job_title:         patch.job_title.clone().or(base.job_title),
    department_name:   patch.department_name.clone().or(base.department_name),
    organization_name: patch.organization_name.clone().or(base.organization_name),
    birthday:          patch.birthday.clone().or(base.birthday),
    phone_numbers:     patch.phone_numbers.clone().or(base.phone_numbers),
    email_addresses:   patch.email_addresses.clone().or(base.email_addresses),
    url_addresses:     patch.url_addresses.clone().or(base.url_addresses),
  }
}

#[cfg(test)]
mod tests {
  use rolodex_core::contact::ContactDetails;

  use super::*;
  use crate::testutil::FakeStore;

  fn stored_details() -> ContactDetails {
    ContactDetails {
      id:              "c-9".into(),
      first_name:      "Grace".into(),
      last_name:       "Hopper".into(),
      nickname:        "Amazing Grace".into(),
      birthday:        "1906-12-09".into(),
      phone_numbers:   vec!["+1 555 0001".into(), "+1 555 0002".into()],
      email_addresses: vec!["grace@example.mil".into()],
      job_title:       "Rear Admiral".into(),
      organization_name: "US Navy".into(),
      url_addresses:   vec!["https://example.mil/grace".into()],
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn update_of_missing_contact_is_not_found() {
    let store = FakeStore::default();
    let err = update_contact(&store, "ghost", &ContactPatch::default())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(store.last_update.lock().unwrap().is_none());
  }

  #[tokio::test]
  async fn omitted_fields_keep_their_stored_values() {
    let store = FakeStore::default();
    store.seed(stored_details());

    let patch = ContactPatch {
      last_name: Some("Hopper-Murray".into()),
      ..Default::default()
    };
    update_contact(&store, "c-9", &patch).await.unwrap();

    let (id, sent) = store.last_update.lock().unwrap().clone().unwrap();
    assert_eq!(id, "c-9");
    assert_eq!(sent.first_name, "Grace");
    assert_eq!(sent.last_name.as_deref(), Some("Hopper-Murray"));
    assert_eq!(sent.nickname.as_deref(), Some("Amazing Grace"));
    assert_eq!(sent.birthday.as_deref(), Some("1906-12-09"));
    assert_eq!(sent.job_title.as_deref(), Some("Rear Admiral"));
    assert_eq!(sent.organization_name.as_deref(), Some("US Navy"));
    assert_eq!(
      sent.phone_numbers.as_deref(),
      Some(&["+1 555 0001".to_string(), "+1 555 0002".to_string()][..])
    );
  }

  #[tokio::test]
  async fn supplied_sequences_replace_wholesale() {
    let store = FakeStore::default();
    store.seed(stored_details());

    let patch = ContactPatch {
      phone_numbers: Some(vec!["+1 555 9999".into()]),
      ..Default::default()
    };
    update_contact(&store, "c-9", &patch).await.unwrap();

    let (_, sent) = store.last_update.lock().unwrap().clone().unwrap();
    // Replaced, not merged with the two stored numbers.
    assert_eq!(
      sent.phone_numbers.as_deref(),
      Some(&["+1 555 9999".to_string()][..])
    );
    assert_eq!(
      sent.email_addresses.as_deref(),
      Some(&["grace@example.mil".to_string()][..])
    );
    assert_eq!(
      sent.url_addresses.as_deref(),
      Some(&["https://example.mil/grace".to_string()][..])
    );
  }

  #[tokio::test]
  async fn create_failure_is_an_operation_failure() {
    let mut store = FakeStore::default();
    store.add_result = false;
    let input = ContactInput { first_name: "Alice".into(), ..Default::default() };
    let err = create_contact(&store, &input).await.unwrap_err();
    assert!(matches!(err, Error::OperationFailed(_)));
  }

  #[tokio::test]
  async fn delete_delegates_without_existence_check() {
    let store = FakeStore::default();
    store.seed(stored_details());
    delete_contact(&store, "c-9").await.unwrap();
    assert!(store.basics.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn delete_failure_is_an_operation_failure() {
    let mut store = FakeStore::default();
    store.delete_result = false;
    let err = delete_contact(&store, "whatever").await.unwrap_err();
    assert!(matches!(err, Error::OperationFailed(_)));
  }

  // ── End-to-end flows over the fake backend ────────────────────────────

  #[tokio::test]
  async fn create_then_search_finds_the_new_contact() {
    let store = FakeStore::default();
    let input = ContactInput { first_name: "Alice".into(), ..Default::default() };
    create_contact(&store, &input).await.unwrap();

    let hits = resolver::search_contacts(&store, "Alice").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "Alice");
    assert!(!hits[0].id.is_empty());
  }

  #[tokio::test]
  async fn create_then_update_last_name_only() {
    let store = FakeStore::default();
    let input = ContactInput { first_name: "Alice".into(), ..Default::default() };
    create_contact(&store, &input).await.unwrap();
    let id = resolver::search_contacts(&store, "Alice").await.unwrap()[0]
      .id
      .clone();

    let patch = ContactPatch {
      last_name: Some("Liddell".into()),
      ..Default::default()
    };
    update_contact(&store, &id, &patch).await.unwrap();

    let details = resolver::get_contact_details(&store, &id)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(details.first_name, "Alice");
    assert_eq!(details.last_name, "Liddell");
    assert_eq!(details.nickname, "");
  }
}
