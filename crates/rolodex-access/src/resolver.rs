//! Read-path resolution over the structured backend.
//!
//! The backend's native name predicate misses multi-word queries and
//! applies inconsistent text normalisation, and it offers no lookup by
//! identifier at all. Both gaps are compensated here: search falls back to
//! a permissive substring scan, and detail lookup resolves identifiers in
//! two phases.

use rolodex_core::{
  Error, Result,
  contact::{Contact, ContactDetails},
  store::ContactStore,
};

// ─── Search ──────────────────────────────────────────────────────────────────

/// Native name search first; on zero matches, a manual substring scan of
/// every basic record.
///
/// The fallback is deliberately permissive (recall over precision): the
/// case-folded query is matched as a substring of the full name, first
/// name, last name, nickname, and email addresses; phone numbers are
/// matched on the raw query without case folding. An effectively empty
/// query returns the (empty) native result without scanning.
pub async fn search_contacts<S: ContactStore>(
  store: &S,
  query: &str,
) -> Result<Vec<Contact>> {
  let native = store.search_by_name(query).await.map_err(Error::store)?;
  if !native.is_empty() {
    return Ok(native);
  }

  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return Ok(native);
  }

  tracing::debug!(%query, "native search empty, scanning all contacts");
  let all = store.all_contacts().await.map_err(Error::store)?;
  let raw = query.trim();
  Ok(
    all
      .into_iter()
      .filter(|c| matches_query(c, &needle, raw))
      .collect(),
  )
}

fn matches_query(contact: &Contact, needle: &str, raw: &str) -> bool {
  contact.full_name().to_lowercase().contains(needle)
    || contact.first_name.to_lowercase().contains(needle)
    || contact.last_name.to_lowercase().contains(needle)
    || contact.nickname.to_lowercase().contains(needle)
    || contact
      .email_addresses
      .iter()
      .any(|e| e.to_lowercase().contains(needle))
    || contact.phone_numbers.iter().any(|p| p.contains(raw))
}

// ─── Detail resolution ───────────────────────────────────────────────────────

/// Resolve an identifier to its extended record.
///
/// Phase 1 (targeted): find the identifier in the basic list and, when the
/// record has a usable name, re-search by that name with the extended
/// projection — this avoids loading extended properties for the whole
/// address book in the common case. Phase 2 (fallback): fetch the entire
/// set with the extended projection and find by identifier. `Ok(None)` when
/// neither phase locates the identifier; that is a normal not-found
/// outcome, not a fault.
pub async fn get_contact_details<S: ContactStore>(
  store: &S,
  id: &str,
) -> Result<Option<ContactDetails>> {
  let basics = store.all_contacts().await.map_err(Error::store)?;
  if let Some(basic) = basics.iter().find(|c| c.id == id) {
    let name = basic.full_name();
    if !name.is_empty() {
      let hits = store
        .search_by_name_full(&name)
        .await
        .map_err(Error::store)?;
      if let Some(found) = hits.into_iter().find(|d| d.id == id) {
        return Ok(Some(found));
      }
      tracing::debug!(%id, %name, "targeted search missed, falling back to full scan");
    }
  }

  let fulls = store.all_contacts_full().await.map_err(Error::store)?;
  Ok(fulls.into_iter().find(|d| d.id == id))
}
