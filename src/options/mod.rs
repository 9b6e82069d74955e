//! Options Module
//!
//! Typed option objects for each operation. Every type serializes through
//! `Display` into the OPTIONS segment of the request payload.
//!
//! ## Layout Rules
//! - AM separates top-level option slots, VM separates sub-slots
//! - booleans are always "1" / "0"
//! - inactive sub-structures still emit their placeholder marks
//! - slot order is part of the wire contract

mod common;
mod crud;
mod record_id;
mod schema;

pub use common::{CommonOptions, Pagination, ReadAfterCommonOptions};
pub use crud::{DeleteOptions, NewOptions, ReadOptions, SelectOptions, UpdateOptions};
pub use record_id::{RecordIdType, RecoverIdType};
pub use schema::{
    LkPropertiesOptions, LkSchemasOptions, RowHeaders, SchemaMode, SchemaType, TableOptions,
};
