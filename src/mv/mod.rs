//! MvOperations Module
//!
//! Pure string functions over multivalue-encoded records.
//!
//! ## Record Layout
//! ```text
//! field 1          AM field 2                AM field 3
//! v1 SM sv2 VM v2  AM (empty)                AM x
//! ```
//!
//! All functions are stateless and allocation is limited to the result.

mod operations;

pub use operations::{lk_change, lk_count, lk_dcount, lk_extract, lk_extract_by_name, lk_replace};
