//! Protocol Module
//!
//! Defines the text protocol spoken with the Linkar gateway.
//!
//! ## Request Format
//! ```text
//! ┌──────────────┬────┬─────────────┬────┬──────────────────────────┐
//! │  CUSTOMVARS  │ US │   OPTIONS   │ US │        INPUTDATA         │
//! └──────────────┴────┴─────────────┴────┴──────────────────────────┘
//! ```
//!
//! ### Operation Codes
//! - 1: LOGIN         - 8: LOGOUT
//! - 2: READ          - 9: VERSION
//! - 3: UPDATE        - 10: SELECT
//! - 4: NEW           - 11: SUBROUTINE
//! - 5: DELETE        - 12: EXECUTE
//! - 6: CONVERSION    - 13: DICTIONARIES
//! - 7: FORMAT        - 14: LKSCHEMAS
//! - 15: LKPROPERTIES - 16: GETTABLE
//! - 17: RESETCOMMONBLOCKS
//! - 150: COMMAND_XML - 151: COMMAND_JSON
//!
//! ## Response Format
//! ```text
//! ┌───────────────────────────┬────┬─────────┬────┬─────────┬─────
//! │ tag1 AM tag2 AM ... tagN  │ FS │ block 1 │ FS │ block 2 │ ...
//! └───────────────────────────┴────┴─────────┴────┴─────────┴─────
//! ```

pub mod marks;
mod op_code;
mod operation;
mod codec;
mod response;

pub use op_code::{DataFormat, DataFormatCru, DataFormatSch, OperationCode};
pub use operation::{ConversionType, Operation};
pub use codec::{
    conversion_args, delete_args, dictionaries_args, encode_operation, execute_args,
    format_spec_args, get_table_args, lk_properties_args, lk_schemas_args, login_args, logout_args,
    new_args, read_args, reset_common_blocks_args, select_args, subroutine_args,
    update_args, update_partial_args, version_args,
};
pub use response::tags;
pub use response::{
    extract_calculated_dicts, extract_capturing, extract_conversion, extract_errors,
    extract_format, extract_original_records, extract_record_dicts, extract_record_id_dicts,
    extract_record_ids, extract_records, extract_records_calculated, extract_returning,
    extract_row_headers, extract_row_properties, extract_subroutine_args, extract_total_records,
    LkResponse,
};
