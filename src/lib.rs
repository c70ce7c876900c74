//! MCP time server library.
//!
//! The binary in `main.rs` wires the axum transport; everything the
//! protocol needs lives here so the integration tests can drive the
//! dispatcher without a socket.

pub mod handlers;
pub mod rpc;
pub mod time;
pub mod tools;
pub mod types;
