//! # Linkar
//!
//! Client SDK for the Linkar multivalue database gateway:
//! - Delimiter grammar and MV string operations (extract, replace, count)
//! - Options objects serialized to fixed-position wire strings
//! - Request payload composer and response parser
//! - Record model with dictionary-name access
//! - Direct and persistent clients over a pluggable transport
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              DirectClient / PersistentClient                 │
//! │                     (Commands trait)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │            Buffer Composer  ◀──  Options Objects             │
//! │          (CUSTOMVARS US OPTIONS US INPUTDATA)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Transport  │          │  Response   │
//!   │   (trait)   │─────────▶│   Parser    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  LkItems /  │
//!                           │  LkItem     │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod mv;
pub mod options;
pub mod item;
pub mod session;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinkarError, Result};
pub use config::Config;
pub use client::{Commands, DirectClient, Endpoint, PersistentClient, Transport};
pub use item::{Dictionaries, LkItem, LkItems};
pub use session::{ConnectionInfo, CredentialOptions};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the Linkar client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
