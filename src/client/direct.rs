//! Direct (stateless) client

use super::commands::Commands;
use super::transport::{Endpoint, Transport};
use crate::config::Config;
use crate::error::Result;
use crate::protocol::OperationCode;
use crate::session::CredentialOptions;

/// Sends full credentials with every operation
///
/// Holds no session, so independent calls never interfere.
pub struct DirectClient<T> {
    transport: T,
    credentials: CredentialOptions,
    config: Config,
}

impl<T: Transport> DirectClient<T> {
    pub fn new(transport: T, credentials: CredentialOptions, config: Config) -> Self {
        Self {
            transport,
            credentials,
            config,
        }
    }

    pub fn credentials(&self) -> &CredentialOptions {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Commands for DirectClient<T> {
    fn config(&self) -> &Config {
        &self.config
    }

    fn dispatch(
        &self,
        op_code: OperationCode,
        payload: &str,
        input_format: u8,
        output_format: u8,
    ) -> Result<String> {
        self.transport.send(
            Endpoint::Credentials(&self.credentials),
            op_code,
            payload,
            input_format,
            output_format,
            self.config.receive_timeout_secs,
        )
    }
}
