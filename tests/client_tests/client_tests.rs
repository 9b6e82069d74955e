//! Tests for direct and persistent clients
//!
//! These tests verify:
//! - Operation codes, formats and payloads handed to the transport
//! - Endpoint selection (credentials vs session)
//! - Login/logout state transitions, including silent no-ops
//! - Scoped sessions always log out

use std::cell::RefCell;
use std::collections::VecDeque;

use linkar::options::ReadOptions;
use linkar::protocol::marks::{from_visible, US};
use linkar::protocol::{
    read_args, ConversionType, DataFormat, DataFormatCru, DataFormatSch, OperationCode,
};
use linkar::{
    Commands, Config, CredentialOptions, DirectClient, Endpoint, LinkarError, LkItems,
    PersistentClient, Result, Transport,
};

// =============================================================================
// Mock Transport
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Call {
    session_id: Option<String>,
    op_code: OperationCode,
    payload: String,
    input_format: u8,
    output_format: u8,
    timeout_secs: u32,
}

/// Records every call and replays queued responses ("" when the queue is empty)
#[derive(Default)]
struct MockTransport {
    calls: RefCell<Vec<Call>>,
    responses: RefCell<VecDeque<Result<String>>>,
}

impl MockTransport {
    fn with_responses(responses: Vec<Result<String>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn op_codes(&self) -> Vec<OperationCode> {
        self.calls.borrow().iter().map(|c| c.op_code).collect()
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        endpoint: Endpoint<'_>,
        op_code: OperationCode,
        payload: &str,
        input_format: u8,
        output_format: u8,
        timeout_secs: u32,
    ) -> Result<String> {
        let session_id = match endpoint {
            Endpoint::Credentials(_) => None,
            Endpoint::Session(info) => Some(info.session_id.clone()),
        };
        self.calls.borrow_mut().push(Call {
            session_id,
            op_code,
            payload: payload.to_owned(),
            input_format,
            output_format,
            timeout_secs,
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn credentials() -> CredentialOptions {
    CredentialOptions::new("127.0.0.1", "EP", 11300, "admin", "secret")
}

fn login_ok() -> Result<String> {
    Ok(from_visible("RECORD_ID^ERRORS<FS>S-1<FS>"))
}

fn logout_ok() -> Result<String> {
    Ok(from_visible("ERRORS<FS>"))
}

// =============================================================================
// Direct Client Tests
// =============================================================================

#[test]
fn test_direct_read_sends_credentials_and_payload() {
    let transport = MockTransport::with_responses(vec![Ok("RECORD_ID".into())]);
    let config = Config::builder()
        .receive_timeout_secs(15)
        .custom_vars("CV")
        .build();
    let client = DirectClient::new(&transport, credentials(), config);

    let mut items = LkItems::new();
    items.add_ids(["1", "2"]);
    let options = ReadOptions::new().calculated(true);
    let response = client
        .read(
            "CUST",
            &items.compose_read_buffer(),
            "",
            Some(options),
            DataFormatCru::JsonDict,
        )
        .unwrap();
    assert_eq!(response, "RECORD_ID");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        Call {
            session_id: None,
            op_code: OperationCode::Read,
            payload: read_args("CUST", &items.compose_read_buffer(), "", Some(&options), "CV"),
            input_format: 1,
            output_format: 7,
            timeout_secs: 15,
        }
    );
}

#[test]
fn test_direct_routes_each_operation_code() {
    let transport = MockTransport::default();
    let client = DirectClient::new(&transport, credentials(), Config::default());

    client.update("F", "", None, DataFormatCru::Mv).unwrap();
    client.update_partial("F", "", "NAME", None, DataFormatCru::Mv).unwrap();
    client.new_records("F", "", None, DataFormatCru::Mv).unwrap();
    client.delete("F", "", None, DataFormat::Mv).unwrap();
    client.select("F", "", "", "", "", None, DataFormatCru::Mv).unwrap();
    client.subroutine("SUB", 0, &[], DataFormat::Mv).unwrap();
    client
        .conversion(ConversionType::Output, "1", "D", DataFormat::Mv)
        .unwrap();
    client.format("1", "R#5", DataFormat::Mv).unwrap();
    client.dictionaries("F", DataFormat::Mv).unwrap();
    client.execute("WHO", DataFormat::Mv).unwrap();
    client.version(DataFormat::Mv).unwrap();
    client.lk_schemas(None, DataFormatSch::Mv).unwrap();
    client.lk_properties("F", None, DataFormatSch::Mv).unwrap();
    client.get_table("F", "", "", "", None).unwrap();
    client.reset_common_blocks(DataFormat::Mv).unwrap();

    assert_eq!(
        transport.op_codes(),
        vec![
            OperationCode::Update,
            OperationCode::Update,
            OperationCode::New,
            OperationCode::Delete,
            OperationCode::Select,
            OperationCode::Subroutine,
            OperationCode::Conversion,
            OperationCode::Format,
            OperationCode::Dictionaries,
            OperationCode::Execute,
            OperationCode::Version,
            OperationCode::LkSchemas,
            OperationCode::LkProperties,
            OperationCode::GetTable,
            OperationCode::ResetCommonBlocks,
        ]
    );
    let table_call = &transport.calls()[13];
    assert_eq!(table_call.output_format, 4);
}

#[test]
fn test_config_custom_vars_lead_every_framed_payload() {
    let transport = MockTransport::default();
    let config = Config::builder().custom_vars("CV").build();
    let client = DirectClient::new(&transport, credentials(), config);

    client.read("F", "1", "", None, DataFormatCru::Mv).unwrap();
    client.delete("F", "1", None, DataFormat::Mv).unwrap();
    client.execute("WHO", DataFormat::Mv).unwrap();
    client.lk_schemas(None, DataFormatSch::Mv).unwrap();
    client.version(DataFormat::Mv).unwrap();
    client.reset_common_blocks(DataFormat::Mv).unwrap();

    let calls = transport.calls();
    for call in &calls[..4] {
        assert!(
            call.payload.starts_with(&format!("CV{US}")),
            "{:?} payload lacks CUSTOMVARS",
            call.op_code
        );
    }
    for call in &calls[4..] {
        assert!(call.payload.starts_with(US), "{:?}", call.op_code);
    }
}

#[test]
fn test_raw_commands_use_their_format() {
    let transport = MockTransport::default();
    let client = DirectClient::new(&transport, credentials(), Config::default());

    client.send_json_command(r#"{"OPERATION":"VERSION"}"#).unwrap();
    client.send_xml_command("<COMMAND/>").unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].op_code, OperationCode::CommandJson);
    assert_eq!(calls[0].payload, r#"{"OPERATION":"VERSION"}"#);
    assert_eq!((calls[0].input_format, calls[0].output_format), (3, 3));
    assert_eq!(calls[1].op_code, OperationCode::CommandXml);
    assert_eq!((calls[1].input_format, calls[1].output_format), (2, 2));
}

#[test]
fn test_transport_error_propagates() {
    let transport = MockTransport::with_responses(vec![Err(LinkarError::Transport(
        "connection refused".into(),
    ))]);
    let client = DirectClient::new(&transport, credentials(), Config::default());
    assert!(matches!(
        client.version(DataFormat::Mv),
        Err(LinkarError::Transport(_))
    ));
}

// =============================================================================
// Persistent Client Tests
// =============================================================================

#[test]
fn test_login_opens_session() {
    let transport = MockTransport::with_responses(vec![
        Ok(from_visible(
            "RECORD_ID^LKCONNECTIONID^PUBLICKEY<FS>S-1<FS>C-1<FS>PK",
        )),
        logout_ok(),
    ]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();

    assert!(client.is_logged_in());
    let info = client.connection_info().unwrap();
    assert_eq!(info.session_id, "S-1");
    assert_eq!(info.lk_connection_id, "C-1");
    assert_eq!(info.public_key, "PK");
    assert_eq!(info.credentials, credentials());

    assert_eq!(transport.calls()[0].op_code, OperationCode::Login);
    assert_eq!(transport.calls()[0].session_id, None);
    client.logout().unwrap();
}

#[test]
fn test_login_twice_is_noop() {
    let transport = MockTransport::with_responses(vec![login_ok(), logout_ok()]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();
    assert_eq!(client.login(credentials()).unwrap(), "");
    assert_eq!(transport.calls().len(), 1);
    client.logout().unwrap();
}

#[test]
fn test_empty_login_response_stays_logged_out() {
    let transport = MockTransport::with_responses(vec![Ok(String::new())]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();
    assert!(!client.is_logged_in());
}

#[test]
fn test_login_without_session_id_stays_logged_out() {
    let transport =
        MockTransport::with_responses(vec![Ok(from_visible("ERRORS<FS>Invalid password"))]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();
    assert!(!client.is_logged_in());
}

#[test]
fn test_login_transport_error_leaves_state() {
    let transport =
        MockTransport::with_responses(vec![Err(LinkarError::Transport("timeout".into()))]);
    let mut client = PersistentClient::new(&transport, Config::default());
    assert!(client.login(credentials()).is_err());
    assert!(!client.is_logged_in());
}

#[test]
fn test_operations_use_session() {
    let transport = MockTransport::with_responses(vec![login_ok(), Ok("v".into()), logout_ok()]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();
    assert_eq!(client.version(DataFormat::Mv).unwrap(), "v");
    client.logout().unwrap();

    let calls = transport.calls();
    assert_eq!(calls[1].session_id.as_deref(), Some("S-1"));
    assert_eq!(calls[2].op_code, OperationCode::Logout);
    assert_eq!(calls[2].session_id.as_deref(), Some("S-1"));
    assert!(!client.is_logged_in());
}

#[test]
fn test_operation_without_session_fails() {
    let transport = MockTransport::default();
    let client = PersistentClient::new(&transport, Config::default());
    assert!(matches!(
        client.version(DataFormat::Mv),
        Err(LinkarError::NotLoggedIn)
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_logout_while_logged_out_is_noop() {
    let transport = MockTransport::default();
    let mut client = PersistentClient::new(&transport, Config::default());
    assert_eq!(client.logout().unwrap(), "");
    assert!(transport.calls().is_empty());
}

#[test]
fn test_empty_logout_response_keeps_session() {
    let transport = MockTransport::with_responses(vec![login_ok(), Ok(String::new()), logout_ok()]);
    let mut client = PersistentClient::new(&transport, Config::default());
    client.login(credentials()).unwrap();
    client.logout().unwrap();
    assert!(client.is_logged_in());
    client.logout().unwrap();
    assert!(!client.is_logged_in());
}

#[test]
fn test_with_session_logs_out_after_success() {
    let transport = MockTransport::with_responses(vec![login_ok(), Ok("v".into()), logout_ok()]);
    let version = PersistentClient::with_session(&transport, credentials(), Config::default(), |c| {
        c.version(DataFormat::Mv)
    })
    .unwrap();

    assert_eq!(version, "v");
    assert_eq!(
        transport.op_codes(),
        vec![OperationCode::Login, OperationCode::Version, OperationCode::Logout]
    );
}

#[test]
fn test_with_session_logs_out_after_failure() {
    let transport = MockTransport::with_responses(vec![
        login_ok(),
        Err(LinkarError::Transport("broken".into())),
        logout_ok(),
    ]);
    let result = PersistentClient::with_session(&transport, credentials(), Config::default(), |c| {
        c.execute("WHO", DataFormat::Mv)
    });

    assert!(matches!(result, Err(LinkarError::Transport(_))));
    assert_eq!(
        transport.op_codes().last(),
        Some(&OperationCode::Logout)
    );
}

#[test]
fn test_with_session_failed_login() {
    let transport = MockTransport::with_responses(vec![Ok(String::new())]);
    let result = PersistentClient::with_session(&transport, credentials(), Config::default(), |c| {
        c.version(DataFormat::Mv)
    });
    assert!(matches!(result, Err(LinkarError::NotLoggedIn)));
    assert_eq!(transport.op_codes(), vec![OperationCode::Login]);
}
