//! Shared option blocks
//!
//! `CommonOptions` is embedded (not inherited) by every options object that
//! returns records; `ReadAfterCommonOptions` adds the read-after flag used
//! by write operations.

use std::fmt;

use crate::protocol::marks::{flag, AM, VM};

/// Flags controlling what comes back with each record
///
/// ```text
/// calculated AM (reserved) AM conversion AM formatSpec AM originalRecords
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonOptions {
    pub calculated: bool,
    pub conversion: bool,
    pub format_spec: bool,
    pub original_records: bool,
}

impl CommonOptions {
    /// All flags off, regardless of what was requested
    pub(crate) fn disabled() -> Self {
        Self::default()
    }
}

impl fmt::Display for CommonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The empty slot is the retired dictionaries flag; its position is kept.
        write!(
            f,
            "{}{AM}{AM}{}{AM}{}{AM}{}",
            flag(self.calculated),
            flag(self.conversion),
            flag(self.format_spec),
            flag(self.original_records)
        )
    }
}

/// `readAfter AM CommonOptions`
///
/// When `read_after` is off the server returns no records, so the embedded
/// flags are serialized as off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadAfterCommonOptions {
    pub read_after: bool,
    pub common: CommonOptions,
}

impl fmt::Display for ReadAfterCommonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let common = if self.read_after {
            self.common
        } else {
            CommonOptions::disabled()
        };
        write!(f, "{}{AM}{}", flag(self.read_after), common)
    }
}

/// Page window for paginated results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Registers per page
    pub reg_page: u32,
    /// 1-based page number
    pub num_page: u32,
}

impl Pagination {
    pub fn new(reg_page: u32, num_page: u32) -> Self {
        Self { reg_page, num_page }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            reg_page: 10,
            num_page: 1,
        }
    }
}

/// `flag VM regPage VM numPage`; "0 VM 0 VM 0" when pagination is off
pub(crate) struct PaginationSlot(pub Option<Pagination>);

impl fmt::Display for PaginationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "1{VM}{}{VM}{}", p.reg_page, p.num_page),
            None => write!(f, "0{VM}0{VM}0"),
        }
    }
}
