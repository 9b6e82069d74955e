//! Transport seam
//!
//! Socket I/O lives outside this crate. A transport receives the composed
//! payload plus routing data and returns the gateway's raw response.

use crate::error::Result;
use crate::protocol::OperationCode;
use crate::session::{ConnectionInfo, CredentialOptions};

/// Who the request is sent as
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// One-shot call carrying full credentials
    Credentials(&'a CredentialOptions),

    /// Call inside an established session
    Session(&'a ConnectionInfo),
}

impl Endpoint<'_> {
    pub fn credentials(&self) -> &CredentialOptions {
        match self {
            Endpoint::Credentials(credentials) => credentials,
            Endpoint::Session(info) => &info.credentials,
        }
    }
}

/// Sends one request and waits for the response
///
/// Implementations report socket failures as
/// [`crate::LinkarError::Transport`] or [`crate::LinkarError::Io`]. A
/// `timeout_secs` of 0 means wait indefinitely.
pub trait Transport {
    fn send(
        &self,
        endpoint: Endpoint<'_>,
        op_code: OperationCode,
        payload: &str,
        input_format: u8,
        output_format: u8,
        timeout_secs: u32,
    ) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(
        &self,
        endpoint: Endpoint<'_>,
        op_code: OperationCode,
        payload: &str,
        input_format: u8,
        output_format: u8,
        timeout_secs: u32,
    ) -> Result<String> {
        (**self).send(
            endpoint,
            op_code,
            payload,
            input_format,
            output_format,
            timeout_secs,
        )
    }
}
