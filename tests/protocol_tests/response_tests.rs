//! Response Parser Tests
//!
//! Tests for splitting gateway responses into tagged blocks.

use linkar::protocol::marks::from_visible;
use linkar::protocol::{
    extract_calculated_dicts, extract_capturing, extract_conversion, extract_errors,
    extract_format, extract_original_records, extract_record_dicts, extract_record_id_dicts,
    extract_record_ids, extract_records, extract_records_calculated, extract_returning,
    extract_row_headers, extract_row_properties, extract_subroutine_args, extract_total_records,
    tags, LkResponse,
};

/// A READ response for two records with dictionaries and originals
fn read_response() -> String {
    from_visible(
        "TOTAL_RECORDS^RECORD_ID_DICTS^RECORD_DICTS^CALCULATED_DICTS^RECORD_ID^RECORD^ORIGINALRECORD^CALCULATED^ERRORS\
         <FS>2\
         <FS>ID\
         <FS>NAME^CITY\
         <FS>LENNAME\
         <FS>1<RS>2\
         <FS>Smith^Madrid<RS>Jones^Paris\
         <FS>Smith^Madrid<RS>Jones^Paris\
         <FS>5<RS>5\
         <FS>",
    )
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_headers() {
    let raw = read_response();
    let response = LkResponse::parse(&raw);
    assert_eq!(response.headers().len(), 9);
    assert_eq!(response.headers()[0], tags::TOTAL_RECORDS);
    assert_eq!(response.block(tags::TOTAL_RECORDS), Some("2"));
    assert_eq!(response.block("MISSING"), None);
}

#[test]
fn test_parse_empty_response() {
    let response = LkResponse::parse("");
    assert!(response.headers().is_empty());
    assert!(response.errors().is_empty());
    assert!(response.record_ids().is_empty());
    assert_eq!(response.total_records(), 0);
    assert_eq!(response.session_id(), "");
}

#[test]
fn test_record_arrays_are_aligned() {
    let raw = read_response();
    assert_eq!(extract_total_records(&raw), 2);
    assert_eq!(extract_record_ids(&raw), vec!["1", "2"]);
    assert_eq!(
        extract_records(&raw),
        vec![from_visible("Smith^Madrid"), from_visible("Jones^Paris")]
    );
    assert_eq!(extract_original_records(&raw).len(), 2);
    assert_eq!(extract_records_calculated(&raw), vec!["5", "5"]);
}

#[test]
fn test_dictionary_lists() {
    let raw = read_response();
    assert_eq!(extract_record_id_dicts(&raw), vec!["ID"]);
    assert_eq!(extract_record_dicts(&raw), vec!["NAME", "CITY"]);
    assert_eq!(extract_calculated_dicts(&raw), vec!["LENNAME"]);
}

#[test]
fn test_empty_errors_block_is_empty_list() {
    assert!(extract_errors(&read_response()).is_empty());
}

#[test]
fn test_errors_are_am_delimited() {
    let raw = from_visible("ERRORS<FS>ERROR 1^ERROR 2");
    assert_eq!(extract_errors(&raw), vec!["ERROR 1", "ERROR 2"]);
}

#[test]
fn test_missing_tags_read_as_empty() {
    let raw = from_visible("ERRORS<FS>");
    assert!(extract_records(&raw).is_empty());
    assert_eq!(extract_conversion(&raw), "");
    assert_eq!(extract_total_records(&raw), 0);
}

#[test]
fn test_header_without_block_reads_as_empty() {
    let raw = from_visible("RECORD_ID^RECORD<FS>1");
    assert_eq!(extract_record_ids(&raw), vec!["1"]);
    assert!(extract_records(&raw).is_empty());
}

#[test]
fn test_invalid_total_records_is_zero() {
    let raw = from_visible("TOTAL_RECORDS<FS>abc");
    assert_eq!(extract_total_records(&raw), 0);
}

// =============================================================================
// Operation Output Tests
// =============================================================================

#[test]
fn test_subroutine_arguments_split_on_dc4() {
    let raw = from_visible("ARGUMENTS^ERRORS<FS>0<DC4>Hello<DC4><FS>");
    assert_eq!(extract_subroutine_args(&raw), vec!["0", "Hello", ""]);
}

#[test]
fn test_conversion_format_execute_outputs() {
    assert_eq!(
        extract_conversion(&from_visible("CONVERSION<FS>31-12-2017")),
        "31-12-2017"
    );
    assert_eq!(
        extract_format(&from_visible("FORMAT<FS>     12345")),
        "     12345"
    );

    let raw = from_visible("CAPTURING^RETURNING^ERRORS<FS>line 1^line 2<FS>0<FS>");
    assert_eq!(extract_capturing(&raw), from_visible("line 1^line 2"));
    assert_eq!(extract_returning(&raw), "0");
}

#[test]
fn test_row_headers_and_properties() {
    let raw = from_visible("ROWHEADERS^ROWPROPERTIES<FS>Name^City<FS>NAME^CITY");
    assert_eq!(extract_row_headers(&raw), vec!["Name", "City"]);
    assert_eq!(extract_row_properties(&raw), vec!["NAME", "CITY"]);
}

#[test]
fn test_login_response_session_fields() {
    let raw = from_visible(
        "RECORD_ID^LKCONNECTIONID^PUBLICKEY^ERRORS<FS>SESSION-42<FS>conn-7<FS>key<FS>",
    );
    let response = LkResponse::parse(&raw);
    assert_eq!(response.session_id(), "SESSION-42");
    assert_eq!(response.lk_connection_id(), "conn-7");
    assert_eq!(response.public_key(), "key");
}
