//! Tests for options serialization
//!
//! These tests verify:
//! - Fixed slot order of every options type
//! - "1"/"0" flags and placeholder marks for inactive sub-structures
//! - Constants pinned by SQLMODE and DICTIONARIES schema modes
//! - Common flags forced off when no records come back

use linkar::options::{
    DeleteOptions, LkPropertiesOptions, LkSchemasOptions, NewOptions, Pagination, ReadOptions,
    RecordIdType, RecoverIdType, RowHeaders, SchemaType, SelectOptions, TableOptions,
    UpdateOptions,
};
use linkar::protocol::marks::{from_visible, to_visible};

/// Compare in visible notation so failures print readably
fn assert_wire(actual: impl ToString, expected_visible: &str) {
    let actual = actual.to_string();
    assert_eq!(to_visible(&actual), expected_visible);
    assert_eq!(actual, from_visible(expected_visible));
}

// =============================================================================
// Read / Update / New / Delete
// =============================================================================

#[test]
fn test_read_options_default() {
    assert_wire(ReadOptions::new(), "0^^0^0^0");
}

#[test]
fn test_read_options_calculated() {
    assert_wire(ReadOptions::new().calculated(true), "1^^0^0^0");
}

#[test]
fn test_read_options_all_flags() {
    let options = ReadOptions::new()
        .calculated(true)
        .conversion(true)
        .format_spec(true)
        .original_records(true);
    assert_wire(options, "1^^1^1^1");
}

#[test]
fn test_update_options_default() {
    assert_wire(UpdateOptions::new(), "0^0^0^^0^0^0");
}

#[test]
fn test_update_options_read_after() {
    let options = UpdateOptions::new()
        .optimistic_lock_control(true)
        .read_after(true)
        .calculated(true)
        .original_records(true);
    assert_wire(options, "1^1^1^^0^0^1");
}

#[test]
fn test_update_options_common_ignored_without_read_after() {
    let options = UpdateOptions::new().calculated(true).conversion(true);
    assert_wire(options, "0^0^0^^0^0^0");
}

#[test]
fn test_new_options_default_keeps_placeholders() {
    assert_wire(NewOptions::new(), "0]]]^0]]^0^0^0^^0^0^0");
}

#[test]
fn test_new_options_linkar_id() {
    let options = NewOptions::new()
        .record_id_type(RecordIdType::linkar("CU", "-", "R#5"))
        .read_after(true);
    assert_wire(options, "1]CU]-]R#5^0]]^0^1^0^^0^0^0");
}

#[test]
fn test_new_options_random_id() {
    let options = NewOptions::new().record_id_type(RecordIdType::random(true, 8));
    assert_wire(options, "0]]]^1]1]8^0^0^0^^0^0^0");
}

#[test]
fn test_new_options_custom_id() {
    let options = NewOptions::new().record_id_type(RecordIdType::Custom);
    assert_wire(options, "0]]]^0]]^1^0^0^^0^0^0");
}

#[test]
fn test_delete_options() {
    assert_wire(DeleteOptions::new(), "0^0]]^0");
    assert_wire(
        DeleteOptions::new()
            .optimistic_lock_control(true)
            .recover_id_type(RecoverIdType::linkar("CU", "-")),
        "1^1]CU]-^0",
    );
    assert_wire(
        DeleteOptions::new().recover_id_type(RecoverIdType::Custom),
        "0^0]]^1",
    );
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_options_default() {
    assert_wire(SelectOptions::new(), "0^0]0]0^0^^0^0^0");
}

#[test]
fn test_select_options_pagination() {
    let options = SelectOptions::new()
        .pagination(Some(Pagination::new(25, 3)))
        .calculated(true);
    assert_wire(options, "0^1]25]3^1^^0^0^0");
}

#[test]
fn test_select_options_default_pagination_window() {
    let options = SelectOptions::new().pagination(Some(Pagination::default()));
    assert_wire(options, "0^1]10]1^0^^0^0^0");
}

#[test]
fn test_select_only_record_id_disables_common() {
    let options = SelectOptions::new()
        .only_record_id(true)
        .calculated(true)
        .original_records(true);
    assert_wire(options, "1^0]0]0^0^^0^0^0");
}

// =============================================================================
// Schemas, properties and tables
// =============================================================================

#[test]
fn test_lk_schemas_options() {
    assert_wire(LkSchemasOptions::default(), "1^1^0^0^0]0]0");
    assert_wire(
        LkSchemasOptions::lk_schemas(RowHeaders::ShortLabel, true, true),
        "1^2^1^1^0]0]0",
    );
}

#[test]
fn test_lk_schemas_sql_mode_pins_constants() {
    let options = LkSchemasOptions::sql_mode(true).pagination(Some(Pagination::new(5, 2)));
    assert_wire(options, "2^3^1^1^1]5]2");
}

#[test]
fn test_lk_schemas_dictionaries_mode() {
    assert_wire(
        LkSchemasOptions::dictionaries(RowHeaders::MainLabel),
        "3^1^1^0^0]0]0",
    );
}

#[test]
fn test_lk_properties_options() {
    assert_wire(
        LkPropertiesOptions::lk_schemas(RowHeaders::None, true, false, true),
        "1^3^1^0^1^0]0]0",
    );
    assert_wire(LkPropertiesOptions::sql_mode(false), "2^3^1^0^1^0]0]0");
    assert_wire(
        LkPropertiesOptions::dictionaries(RowHeaders::ShortLabel),
        "3^2^1^0^0^0]0]0",
    );
}

#[test]
fn test_table_options_schema_modes() {
    let options = TableOptions::lk_schemas(RowHeaders::MainLabel, false, true, false)
        .repeat_values(true)
        .apply_conversion(true)
        .calculated(true);
    assert_wire(options, "1^1^0^1^0^1^1^0^1^0]0]0");

    let options = TableOptions::sql_mode(false).apply_format(true);
    assert_eq!(options.schema_type(), SchemaType::SqlMode);
    assert_wire(options, "2^3^1^0^1^0^0^1^0^0]0]0");
}

#[test]
fn test_table_options_no_schema() {
    let options = TableOptions::no_schema(RowHeaders::ShortLabel)
        .repeat_values(true)
        .apply_conversion(true)
        .pagination(Some(Pagination::new(100, 1)));
    assert_eq!(options.schema_type(), SchemaType::None);
    assert_wire(options, "4^2^1^1]100]1");
}
