//! Client Module
//!
//! Direct and persistent clients over a pluggable transport.
//!
//! ## Call Path
//! ```text
//!  Commands::read(..) ──▶ Operation ──▶ encode_operation ──▶ payload
//!                                                              │
//!                                   Transport::send(endpoint, op_code, payload, ..)
//!                                                              │
//!                                                              ▼
//!                                                        raw response
//! ```
//!
//! `DirectClient` sends credentials on every call. `PersistentClient` logs
//! in once and presents its session until `logout`.

mod commands;
mod direct;
mod persistent;
mod transport;

pub use commands::Commands;
pub use direct::DirectClient;
pub use persistent::PersistentClient;
pub use transport::{Endpoint, Transport};
