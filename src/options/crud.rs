//! Options for Read, Update, New, Delete and Select
//!
//! Each type is built with consuming setters and serializes through
//! `Display` into the OPTIONS segment of its operation.

use std::fmt;

use super::common::{CommonOptions, Pagination, PaginationSlot, ReadAfterCommonOptions};
use super::record_id::{RecordIdType, RecoverIdType};
use crate::protocol::marks::{flag, AM};

macro_rules! common_setters {
    ($($path:ident).+) => {
        /// Return calculated dictionaries with each record
        pub fn calculated(mut self, on: bool) -> Self {
            self.$($path).+.calculated = on;
            self
        }

        /// Apply dictionary conversions to returned values
        pub fn conversion(mut self, on: bool) -> Self {
            self.$($path).+.conversion = on;
            self
        }

        /// Apply dictionary format specs to returned values
        pub fn format_spec(mut self, on: bool) -> Self {
            self.$($path).+.format_spec = on;
            self
        }

        /// Return a copy of each record for optimistic locking
        pub fn original_records(mut self, on: bool) -> Self {
            self.$($path).+.original_records = on;
            self
        }
    };
}

// =============================================================================
// Read
// =============================================================================

/// `CommonOptions`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    common: CommonOptions,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    common_setters!(common);
}

impl fmt::Display for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.common, f)
    }
}

// =============================================================================
// Update
// =============================================================================

/// `optimisticLockControl AM ReadAfterCommonOptions`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    optimistic_lock_control: bool,
    read_after: ReadAfterCommonOptions,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the write if the stored record differs from the original sent
    pub fn optimistic_lock_control(mut self, on: bool) -> Self {
        self.optimistic_lock_control = on;
        self
    }

    /// Return the records as stored after the write
    pub fn read_after(mut self, on: bool) -> Self {
        self.read_after.read_after = on;
        self
    }

    common_setters!(read_after.common);
}

impl fmt::Display for UpdateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{AM}{}", flag(self.optimistic_lock_control), self.read_after)
    }
}

// =============================================================================
// New
// =============================================================================

/// `RecordIdType AM ReadAfterCommonOptions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOptions {
    record_id_type: RecordIdType,
    read_after: ReadAfterCommonOptions,
}

impl NewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_id_type(mut self, record_id_type: RecordIdType) -> Self {
        self.record_id_type = record_id_type;
        self
    }

    /// Return the records as stored after the write
    pub fn read_after(mut self, on: bool) -> Self {
        self.read_after.read_after = on;
        self
    }

    common_setters!(read_after.common);
}

impl fmt::Display for NewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{AM}{}", self.record_id_type, self.read_after)
    }
}

// =============================================================================
// Delete
// =============================================================================

/// `optimisticLockControl AM RecoverIdType`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    optimistic_lock_control: bool,
    recover_id_type: RecoverIdType,
}

impl DeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimistic_lock_control(mut self, on: bool) -> Self {
        self.optimistic_lock_control = on;
        self
    }

    pub fn recover_id_type(mut self, recover_id_type: RecoverIdType) -> Self {
        self.recover_id_type = recover_id_type;
        self
    }
}

impl fmt::Display for DeleteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{AM}{}",
            flag(self.optimistic_lock_control),
            self.recover_id_type
        )
    }
}

// =============================================================================
// Select
// =============================================================================

/// `onlyRecordId AM pagination AM CommonOptions`
///
/// With `only_record_id` set no record content is returned, so the common
/// flags serialize as off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    only_record_id: bool,
    pagination: Option<Pagination>,
    common: CommonOptions,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only_record_id(mut self, on: bool) -> Self {
        self.only_record_id = on;
        self
    }

    pub fn pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    common_setters!(common);
}

impl fmt::Display for SelectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let common = if self.only_record_id {
            CommonOptions::disabled()
        } else {
            self.common
        };
        write!(
            f,
            "{}{AM}{}{AM}{}",
            flag(self.only_record_id),
            PaginationSlot(self.pagination),
            common
        )
    }
}
