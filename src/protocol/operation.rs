//! Operation definitions
//!
//! Typed requests understood by the gateway. Each variant carries the
//! operation-specific inputs; CUSTOMVARS and formats travel alongside.

use super::op_code::OperationCode;
use crate::options::{
    DeleteOptions, LkPropertiesOptions, LkSchemasOptions, NewOptions, ReadOptions, SelectOptions,
    TableOptions, UpdateOptions,
};

/// Direction of a dictionary conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionType {
    /// External to internal (ICONV)
    Input,
    /// Internal to external (OCONV)
    Output,
}

impl ConversionType {
    pub fn code(self) -> char {
        match self {
            ConversionType::Input => 'I',
            ConversionType::Output => 'O',
        }
    }
}

/// A request to the gateway
///
/// `records` fields hold RS/FS buffers as produced by
/// [`crate::item::LkItems`]. `None` options fall back to the defaults of
/// the operation.
#[derive(Debug, Clone)]
pub enum Operation {
    Read {
        filename: String,
        records: String,
        dictionaries: String,
        options: Option<ReadOptions>,
    },

    Update {
        filename: String,
        records: String,
        options: Option<UpdateOptions>,
    },

    /// Update only the fields named in `dictionaries`
    UpdatePartial {
        filename: String,
        records: String,
        dictionaries: String,
        options: Option<UpdateOptions>,
    },

    New {
        filename: String,
        records: String,
        options: Option<NewOptions>,
    },

    Delete {
        filename: String,
        records: String,
        options: Option<DeleteOptions>,
    },

    Select {
        filename: String,
        select_clause: String,
        sort_clause: String,
        dict_clause: String,
        pre_select_clause: String,
        options: Option<SelectOptions>,
    },

    Subroutine {
        name: String,
        args_number: usize,
        arguments: Vec<String>,
    },

    Conversion {
        conversion_type: ConversionType,
        expression: String,
        code: String,
    },

    Format { expression: String, format_spec: String },

    Dictionaries { filename: String },

    Execute { statement: String },

    Version,

    LkSchemas { options: Option<LkSchemasOptions> },

    LkProperties {
        filename: String,
        options: Option<LkPropertiesOptions>,
    },

    GetTable {
        filename: String,
        select_clause: String,
        dict_clause: String,
        sort_clause: String,
        options: Option<TableOptions>,
    },

    ResetCommonBlocks,
}

impl Operation {
    /// Get the operation code
    pub fn op_code(&self) -> OperationCode {
        match self {
            Operation::Read { .. } => OperationCode::Read,
            Operation::Update { .. } | Operation::UpdatePartial { .. } => OperationCode::Update,
            Operation::New { .. } => OperationCode::New,
            Operation::Delete { .. } => OperationCode::Delete,
            Operation::Select { .. } => OperationCode::Select,
            Operation::Subroutine { .. } => OperationCode::Subroutine,
            Operation::Conversion { .. } => OperationCode::Conversion,
            Operation::Format { .. } => OperationCode::Format,
            Operation::Dictionaries { .. } => OperationCode::Dictionaries,
            Operation::Execute { .. } => OperationCode::Execute,
            Operation::Version => OperationCode::Version,
            Operation::LkSchemas { .. } => OperationCode::LkSchemas,
            Operation::LkProperties { .. } => OperationCode::LkProperties,
            Operation::GetTable { .. } => OperationCode::GetTable,
            Operation::ResetCommonBlocks => OperationCode::ResetCommonBlocks,
        }
    }

    /// A Select with default clauses and options
    pub fn select(filename: impl Into<String>, select_clause: impl Into<String>) -> Self {
        Operation::Select {
            filename: filename.into(),
            select_clause: select_clause.into(),
            sort_clause: String::new(),
            dict_clause: String::new(),
            pre_select_clause: String::new(),
            options: None,
        }
    }
}
