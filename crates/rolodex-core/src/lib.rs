//! Core types and port definitions for the rolodex contacts server.
//!
//! This crate is deliberately free of process and transport dependencies.
//! It defines the two backend ports — the structured [`ContactStore`] and
//! the scripted [`ScriptRunner`] — which higher layers depend on instead of
//! any concrete backend. The two ports are never unified: their identifier
//! semantics differ (opaque id vs. exact-name match) and so do their error
//! shapes.
//!
//! [`ContactStore`]: store::ContactStore
//! [`ScriptRunner`]: script::ScriptRunner

pub mod auth;
pub mod contact;
pub mod error;
pub mod script;
pub mod store;

pub use error::{Error, Result};
