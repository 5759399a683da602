//! The scripted UI-automation backend: AppleScript construction, execution
//! through `osascript`, and the group/export operations that only exist on
//! this surface.
//!
//! Group identity here is the group *name* — there is no opaque identifier
//! on this port, and contact references are exact-name matches. That is
//! deliberately different from the structured backend and is never papered
//! over.

pub mod groups;
pub mod runner;
pub mod script;

pub use groups::{GroupChange, GroupDirectory};
pub use runner::OsaRunner;
pub use script::escape;
