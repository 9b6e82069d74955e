//! Response Parser
//!
//! Splits the flat string returned by the gateway into tagged blocks.
//!
//! ## Response Format
//! ```text
//! ┌───────────────────────────┬────┬─────────┬────┬─────────┬─────
//! │ tag1 AM tag2 AM ... tagN  │ FS │ block 1 │ FS │ block 2 │ ...
//! └───────────────────────────┴────┴─────────┴────┴─────────┴─────
//! ```
//!
//! Record blocks (`RECORD_ID`, `RECORD`, `ORIGINALRECORD`, `CALCULATED`)
//! hold one entry per record separated by RS and are aligned by index.
//! Name lists and errors are AM-delimited, subroutine arguments are
//! DC4-delimited. Missing tags read as empty.

use super::marks::{AM, DC4, FS, RS};

// =============================================================================
// Tags
// =============================================================================

/// Header names used by the gateway
pub mod tags {
    pub const TOTAL_RECORDS: &str = "TOTAL_RECORDS";
    pub const RECORD_ID_DICTS: &str = "RECORD_ID_DICTS";
    pub const RECORD_DICTS: &str = "RECORD_DICTS";
    pub const CALCULATED_DICTS: &str = "CALCULATED_DICTS";
    pub const RECORD_ID: &str = "RECORD_ID";
    pub const RECORD: &str = "RECORD";
    pub const ORIGINAL_RECORD: &str = "ORIGINALRECORD";
    pub const CALCULATED: &str = "CALCULATED";
    pub const ERRORS: &str = "ERRORS";
    pub const ARGUMENTS: &str = "ARGUMENTS";
    pub const CONVERSION: &str = "CONVERSION";
    pub const FORMAT: &str = "FORMAT";
    pub const CAPTURING: &str = "CAPTURING";
    pub const RETURNING: &str = "RETURNING";
    pub const ROW_HEADERS: &str = "ROWHEADERS";
    pub const ROW_PROPERTIES: &str = "ROWPROPERTIES";
    pub const LK_CONNECTION_ID: &str = "LKCONNECTIONID";
    pub const PUBLIC_KEY: &str = "PUBLICKEY";
}

use tags::*;

/// A response split into its header row and blocks
///
/// Borrows from the raw string; parse once and query many times.
#[derive(Debug, Clone)]
pub struct LkResponse<'a> {
    headers: Vec<&'a str>,
    blocks: Vec<&'a str>,
}

impl<'a> LkResponse<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Self {
                headers: Vec::new(),
                blocks: Vec::new(),
            };
        }
        let mut parts = raw.split(FS);
        let headers = parts.next().unwrap_or_default().split(AM).collect();
        Self {
            headers,
            blocks: parts.collect(),
        }
    }

    /// Header names in order
    pub fn headers(&self) -> &[&'a str] {
        &self.headers
    }

    /// The block under `tag`, if the tag is present
    pub fn block(&self, tag: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|h| *h == tag)?;
        Some(self.blocks.get(index).copied().unwrap_or_default())
    }

    fn list(&self, tag: &str, separator: char) -> Vec<String> {
        match self.block(tag) {
            Some(block) if !block.is_empty() => block.split(separator).map(str::to_owned).collect(),
            _ => Vec::new(),
        }
    }

    fn scalar(&self, tag: &str) -> String {
        self.block(tag).unwrap_or_default().to_owned()
    }

    // -------------------------------------------------------------------------
    // Status
    // -------------------------------------------------------------------------

    pub fn errors(&self) -> Vec<String> {
        self.list(ERRORS, AM)
    }

    pub fn total_records(&self) -> usize {
        self.block(TOTAL_RECORDS)
            .and_then(|block| block.trim().parse().ok())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Dictionaries
    // -------------------------------------------------------------------------

    pub fn record_id_dicts(&self) -> Vec<String> {
        self.list(RECORD_ID_DICTS, AM)
    }

    pub fn record_dicts(&self) -> Vec<String> {
        self.list(RECORD_DICTS, AM)
    }

    pub fn calculated_dicts(&self) -> Vec<String> {
        self.list(CALCULATED_DICTS, AM)
    }

    // -------------------------------------------------------------------------
    // Records (index-aligned)
    // -------------------------------------------------------------------------

    pub fn record_ids(&self) -> Vec<String> {
        self.list(RECORD_ID, RS)
    }

    pub fn records(&self) -> Vec<String> {
        self.list(RECORD, RS)
    }

    pub fn original_records(&self) -> Vec<String> {
        self.list(ORIGINAL_RECORD, RS)
    }

    pub fn records_calculated(&self) -> Vec<String> {
        self.list(CALCULATED, RS)
    }

    // -------------------------------------------------------------------------
    // Operation outputs
    // -------------------------------------------------------------------------

    pub fn subroutine_args(&self) -> Vec<String> {
        self.list(ARGUMENTS, DC4)
    }

    pub fn conversion(&self) -> String {
        self.scalar(CONVERSION)
    }

    pub fn format(&self) -> String {
        self.scalar(FORMAT)
    }

    pub fn capturing(&self) -> String {
        self.scalar(CAPTURING)
    }

    pub fn returning(&self) -> String {
        self.scalar(RETURNING)
    }

    pub fn row_headers(&self) -> Vec<String> {
        self.list(ROW_HEADERS, AM)
    }

    pub fn row_properties(&self) -> Vec<String> {
        self.list(ROW_PROPERTIES, AM)
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Session id issued by LOGIN, carried in the first record id
    pub fn session_id(&self) -> String {
        self.record_ids().into_iter().next().unwrap_or_default()
    }

    pub fn lk_connection_id(&self) -> String {
        self.scalar(LK_CONNECTION_ID)
    }

    pub fn public_key(&self) -> String {
        self.scalar(PUBLIC_KEY)
    }
}

// =============================================================================
// One-shot extraction helpers
// =============================================================================

pub fn extract_errors(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).errors()
}

pub fn extract_total_records(raw: &str) -> usize {
    LkResponse::parse(raw).total_records()
}

pub fn extract_record_id_dicts(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).record_id_dicts()
}

pub fn extract_record_dicts(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).record_dicts()
}

pub fn extract_calculated_dicts(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).calculated_dicts()
}

pub fn extract_record_ids(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).record_ids()
}

pub fn extract_records(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).records()
}

pub fn extract_original_records(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).original_records()
}

pub fn extract_records_calculated(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).records_calculated()
}

pub fn extract_subroutine_args(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).subroutine_args()
}

pub fn extract_conversion(raw: &str) -> String {
    LkResponse::parse(raw).conversion()
}

pub fn extract_format(raw: &str) -> String {
    LkResponse::parse(raw).format()
}

pub fn extract_capturing(raw: &str) -> String {
    LkResponse::parse(raw).capturing()
}

pub fn extract_returning(raw: &str) -> String {
    LkResponse::parse(raw).returning()
}

pub fn extract_row_headers(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).row_headers()
}

pub fn extract_row_properties(raw: &str) -> Vec<String> {
    LkResponse::parse(raw).row_properties()
}
