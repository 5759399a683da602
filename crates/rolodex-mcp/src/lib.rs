//! The rolodex tool server: an MCP-shaped JSON-RPC shell over stdio.
//!
//! This crate is thin plumbing: tool names are mapped to the operations of
//! `rolodex-access` (structured backend) and `rolodex-applescript`
//! (scripted backend), input shapes are validated, and results are
//! serialised. Every operation failure is returned as data with an error
//! flag, never as a protocol fault.

pub mod backend;
pub mod config;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use server::Server;
