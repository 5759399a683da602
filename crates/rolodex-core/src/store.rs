//! The `ContactStore` trait — the structured contacts backend port.
//!
//! Implemented by `rolodex-bridge` against the native helper; tests
//! substitute fake stores. Higher layers (`rolodex-access`, `rolodex-mcp`)
//! depend on this abstraction, never on a concrete backend.

use std::future::Future;

use crate::{
  auth::AuthorizationStatus,
  contact::{Contact, ContactDetails, ContactInput},
};

/// Abstraction over the structured contacts backend.
///
/// Identifiers are opaque strings assigned by the backend, stable within a
/// session and never client-generated. The backend offers no direct
/// lookup-by-identifier and its name search is known to miss multi-word and
/// inconsistently-normalised queries; the read resolver in `rolodex-access`
/// compensates for both.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded tokio runtime.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Authorization ─────────────────────────────────────────────────────

  /// Read the current authorization status without side effects.
  fn authorization_status(
    &self,
  ) -> impl Future<Output = Result<AuthorizationStatus, Self::Error>> + Send + '_;

  /// Trigger the OS permission prompt and resolve with the post-prompt
  /// status. Suspends until the user responds or the OS gives up.
  fn request_access(
    &self,
  ) -> impl Future<Output = Result<AuthorizationStatus, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every contact, basic projection.
  fn all_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Every contact with the extended-property projection. Noticeably more
  /// expensive than [`ContactStore::all_contacts`]; used only as a
  /// resolution fallback.
  fn all_contacts_full(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactDetails>, Self::Error>> + Send + '_;

  /// The backend's native name search, basic projection.
  fn search_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// The backend's native name search with the extended projection.
  fn search_by_name_full<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Vec<ContactDetails>, Self::Error>> + Send + 'a;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Add a new contact. Returns the backend's boolean success; the new
  /// identifier is *not* reported back.
  fn add_contact<'a>(
    &'a self,
    input: &'a ContactInput,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Overwrite the record at `id` with the fully-assembled `record`.
  /// The backend performs no merging of its own.
  fn update_contact<'a>(
    &'a self,
    id: &'a str,
    record: &'a ContactInput,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Delete the record at `id`. The backend is authoritative on not-found
  /// handling; no existence pre-check is performed anywhere above it.
  fn delete_contact<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}
