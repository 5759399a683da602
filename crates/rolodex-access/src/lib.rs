//! Access mediation for the structured contacts backend.
//!
//! Four components sit between the tool shell and the backend port:
//!
//! - [`gate`] — the authorization state machine run before every
//!   structured-backend operation;
//! - [`loader`] — lazy, single-flight acquisition of the backend handle, so
//!   a load failure surfaces as an operation error instead of a startup
//!   crash;
//! - [`resolver`] — search-with-fallback and identifier-based detail
//!   resolution, compensating for the backend's matching and lookup gaps;
//! - [`mediator`] — partial-update merge logic and write delegation.
//!
//! [`ContactsService`] assembles them behind the facade the tool shell
//! dispatches into.

pub mod gate;
pub mod loader;
pub mod mediator;
pub mod resolver;
pub mod service;

#[cfg(test)]
pub(crate) mod testutil;

pub use loader::BackendLoader;
pub use service::{AccessReport, ContactsService};
