//! Buffer Composer
//!
//! Builds the request payload for each operation kind.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────────┬────┬─────────────┬────┬──────────────────────────┐
//! │  CUSTOMVARS  │ US │   OPTIONS   │ US │        INPUTDATA         │
//! └──────────────┴────┴─────────────┴────┴──────────────────────────┘
//! ```
//!
//! ### INPUTDATA by Operation
//! - READ:          filename AM records AM dictionaries
//! - UPDATE:        filename AM records
//! - UPDATE (part): filename AM records FS dictionaries
//! - NEW / DELETE:  filename AM records
//! - SELECT:        filename AM select AM sort AM dict AM preselect
//! - SUBROUTINE:    arguments joined by DC4 (name and count go in OPTIONS)
//! - CONVERSION:    code AM expression ('I' / 'O' in OPTIONS)
//! - FORMAT:        formatSpec AM expression
//! - DICTIONARIES:  filename
//! - EXECUTE:       statement
//! - LKPROPERTIES:  filename
//! - GETTABLE:      filename AM select AM dict AM sort
//!
//! Every function is pure: the payload depends only on its arguments.

use super::marks::{AM, DC4, FS, US};
use super::operation::{ConversionType, Operation};
use crate::options::{
    DeleteOptions, LkPropertiesOptions, LkSchemasOptions, NewOptions, ReadOptions, SelectOptions,
    TableOptions, UpdateOptions,
};

/// Join the three payload segments
fn compose(custom_vars: &str, options: &str, input_data: &str) -> String {
    let mut payload =
        String::with_capacity(custom_vars.len() + options.len() + input_data.len() + 2);
    payload.push_str(custom_vars);
    payload.push(US);
    payload.push_str(options);
    payload.push(US);
    payload.push_str(input_data);
    payload
}

/// Join positional INPUTDATA fields with AM
fn fields(parts: &[&str]) -> String {
    parts.join(AM.to_string().as_str())
}

// =============================================================================
// Session
// =============================================================================

pub fn login_args(custom_vars: &str) -> String {
    compose(custom_vars, "", "")
}

pub fn logout_args(custom_vars: &str) -> String {
    compose(custom_vars, "", "")
}

// =============================================================================
// CRUD
// =============================================================================

pub fn read_args(
    filename: &str,
    records: &str,
    dictionaries: &str,
    options: Option<&ReadOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    compose(
        custom_vars,
        &options.to_string(),
        &fields(&[filename, records, dictionaries]),
    )
}

pub fn update_args(
    filename: &str,
    records: &str,
    options: Option<&UpdateOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    compose(custom_vars, &options.to_string(), &fields(&[filename, records]))
}

/// Update restricted to the fields named in `dictionaries`
pub fn update_partial_args(
    filename: &str,
    records: &str,
    dictionaries: &str,
    options: Option<&UpdateOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    let input_data = format!("{}{FS}{dictionaries}", fields(&[filename, records]));
    compose(custom_vars, &options.to_string(), &input_data)
}

pub fn new_args(
    filename: &str,
    records: &str,
    options: Option<&NewOptions>,
    custom_vars: &str,
) -> String {
    let options = options.cloned().unwrap_or_default();
    compose(custom_vars, &options.to_string(), &fields(&[filename, records]))
}

pub fn delete_args(
    filename: &str,
    records: &str,
    options: Option<&DeleteOptions>,
    custom_vars: &str,
) -> String {
    let options = options.cloned().unwrap_or_default();
    compose(custom_vars, &options.to_string(), &fields(&[filename, records]))
}

pub fn select_args(
    filename: &str,
    select_clause: &str,
    sort_clause: &str,
    dict_clause: &str,
    pre_select_clause: &str,
    options: Option<&SelectOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    compose(
        custom_vars,
        &options.to_string(),
        &fields(&[filename, select_clause, sort_clause, dict_clause, pre_select_clause]),
    )
}

// =============================================================================
// Server-side code and conversions
// =============================================================================

pub fn subroutine_args(
    name: &str,
    args_number: usize,
    arguments: &[String],
    custom_vars: &str,
) -> String {
    let options = format!("{name}{AM}{args_number}");
    let input_data = arguments.join(DC4.to_string().as_str());
    compose(custom_vars, &options, &input_data)
}

pub fn conversion_args(
    expression: &str,
    code: &str,
    conversion_type: ConversionType,
    custom_vars: &str,
) -> String {
    let options = conversion_type.code().to_string();
    compose(custom_vars, &options, &fields(&[code, expression]))
}

pub fn format_spec_args(expression: &str, format_spec: &str, custom_vars: &str) -> String {
    compose(custom_vars, "", &fields(&[format_spec, expression]))
}

pub fn dictionaries_args(filename: &str, custom_vars: &str) -> String {
    compose(custom_vars, "", filename)
}

pub fn execute_args(statement: &str, custom_vars: &str) -> String {
    compose(custom_vars, "", statement)
}

pub fn version_args() -> String {
    compose("", "", "")
}

pub fn reset_common_blocks_args() -> String {
    compose("", "", "")
}

// =============================================================================
// Schemas and tables
// =============================================================================

pub fn lk_schemas_args(options: Option<&LkSchemasOptions>, custom_vars: &str) -> String {
    let options = options.copied().unwrap_or_default();
    compose(custom_vars, &options.to_string(), "")
}

pub fn lk_properties_args(
    filename: &str,
    options: Option<&LkPropertiesOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    compose(custom_vars, &options.to_string(), filename)
}

pub fn get_table_args(
    filename: &str,
    select_clause: &str,
    dict_clause: &str,
    sort_clause: &str,
    options: Option<&TableOptions>,
    custom_vars: &str,
) -> String {
    let options = options.copied().unwrap_or_default();
    compose(
        custom_vars,
        &options.to_string(),
        &fields(&[filename, select_clause, dict_clause, sort_clause]),
    )
}

// =============================================================================
// Operation dispatch
// =============================================================================

/// Encode an operation into its request payload
pub fn encode_operation(operation: &Operation, custom_vars: &str) -> String {
    match operation {
        Operation::Read {
            filename,
            records,
            dictionaries,
            options,
        } => read_args(filename, records, dictionaries, options.as_ref(), custom_vars),
        Operation::Update {
            filename,
            records,
            options,
        } => update_args(filename, records, options.as_ref(), custom_vars),
        Operation::UpdatePartial {
            filename,
            records,
            dictionaries,
            options,
        } => update_partial_args(filename, records, dictionaries, options.as_ref(), custom_vars),
        Operation::New {
            filename,
            records,
            options,
        } => new_args(filename, records, options.as_ref(), custom_vars),
        Operation::Delete {
            filename,
            records,
            options,
        } => delete_args(filename, records, options.as_ref(), custom_vars),
        Operation::Select {
            filename,
            select_clause,
            sort_clause,
            dict_clause,
            pre_select_clause,
            options,
        } => select_args(
            filename,
            select_clause,
            sort_clause,
            dict_clause,
            pre_select_clause,
            options.as_ref(),
            custom_vars,
        ),
        Operation::Subroutine {
            name,
            args_number,
            arguments,
        } => subroutine_args(name, *args_number, arguments, custom_vars),
        Operation::Conversion {
            conversion_type,
            expression,
            code,
        } => conversion_args(expression, code, *conversion_type, custom_vars),
        Operation::Format {
            expression,
            format_spec,
        } => format_spec_args(expression, format_spec, custom_vars),
        Operation::Dictionaries { filename } => dictionaries_args(filename, custom_vars),
        Operation::Execute { statement } => execute_args(statement, custom_vars),
        Operation::Version => version_args(),
        Operation::LkSchemas { options } => lk_schemas_args(options.as_ref(), custom_vars),
        Operation::LkProperties { filename, options } => {
            lk_properties_args(filename, options.as_ref(), custom_vars)
        }
        Operation::GetTable {
            filename,
            select_clause,
            dict_clause,
            sort_clause,
            options,
        } => get_table_args(
            filename,
            select_clause,
            dict_clause,
            sort_clause,
            options.as_ref(),
            custom_vars,
        ),
        Operation::ResetCommonBlocks => reset_common_blocks_args(),
    }
}
