//! Typed response views
//!
//! Each view parses a raw MV response once and keeps only the blocks that
//! matter for its operation. Every view carries the gateway's error list.

use super::collection::LkItems;
use crate::protocol::LkResponse;

/// Errors only (LOGIN, LOGOUT, RESETCOMMONBLOCKS, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LkData {
    pub errors: Vec<String>,
}

impl LkData {
    pub fn from_response(raw: &str) -> Self {
        Self {
            errors: LkResponse::parse(raw).errors(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Result of READ, UPDATE, NEW, DELETE, SELECT and DICTIONARIES
#[derive(Debug, Clone, Default)]
pub struct LkDataCrud {
    pub errors: Vec<String>,
    pub total_records: usize,
    pub items: LkItems,
}

impl LkDataCrud {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            total_records: response.total_records(),
            items: LkItems::from_response(&response),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LkDataSubroutine {
    pub errors: Vec<String>,
    pub arguments: Vec<String>,
}

impl LkDataSubroutine {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            arguments: response.subroutine_args(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LkDataConversion {
    pub errors: Vec<String>,
    pub conversion: String,
}

impl LkDataConversion {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            conversion: response.conversion(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LkDataFormat {
    pub errors: Vec<String>,
    pub format: String,
}

impl LkDataFormat {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            format: response.format(),
        }
    }
}

/// Result of EXECUTE: captured output and the returned value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LkDataExecute {
    pub errors: Vec<String>,
    pub capturing: String,
    pub returning: String,
}

impl LkDataExecute {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            capturing: response.capturing(),
            returning: response.returning(),
        }
    }
}

/// Result of LKSCHEMAS and LKPROPERTIES
///
/// Each schema or property row is an item; the row header and property
/// lists describe the columns.
#[derive(Debug, Clone, Default)]
pub struct LkDataSchemas {
    pub errors: Vec<String>,
    pub total_records: usize,
    pub row_headers: Vec<String>,
    pub row_properties: Vec<String>,
    pub items: LkItems,
}

impl LkDataSchemas {
    pub fn from_response(raw: &str) -> Self {
        let response = LkResponse::parse(raw);
        Self {
            errors: response.errors(),
            total_records: response.total_records(),
            row_headers: response.row_headers(),
            row_properties: response.row_properties(),
            items: LkItems::from_response(&response),
        }
    }
}
