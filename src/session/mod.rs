//! Session Module
//!
//! Credential and connection objects in the FS-delimited form the gateway
//! expects.
//!
//! ## Lifecycle
//! ```text
//!  LoggedOut ──LOGIN (session id in response)──▶ LoggedIn
//!      ▲                                             │
//!      └────────LOGOUT (non-empty response)──────────┘
//! ```
//! A session is only released by an explicit LOGOUT.

mod connection_info;
mod credentials;

pub use connection_info::ConnectionInfo;
pub use credentials::{CredentialOptions, CREDENTIAL_FIELDS};
