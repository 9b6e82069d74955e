//! Persistent (session) client
//!
//! ## State
//! ```text
//!  connection: None ──login──▶ Some(ConnectionInfo) ──logout──▶ None
//! ```
//! Login while logged in and logout while logged out are no-ops. An empty
//! LOGIN response, or one without a session id, leaves the client logged
//! out. Transport errors never change state.

use super::commands::Commands;
use super::transport::{Endpoint, Transport};
use crate::config::Config;
use crate::error::{LinkarError, Result};
use crate::protocol::{login_args, logout_args, DataFormat, LkResponse, OperationCode};
use crate::session::{ConnectionInfo, CredentialOptions};

/// Holds one gateway session between `login` and `logout`
///
/// The session is released only by `logout`. Prefer
/// [`PersistentClient::with_session`], which always logs out.
pub struct PersistentClient<T: Transport> {
    transport: T,
    config: Config,
    connection: Option<ConnectionInfo>,
}

impl<T: Transport> PersistentClient<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            transport,
            config,
            connection: None,
        }
    }

    /// Log in, run `f`, then log out
    ///
    /// Logout runs even when `f` fails; the error from `f` wins over a
    /// logout error.
    pub fn with_session<R>(
        transport: T,
        credentials: CredentialOptions,
        config: Config,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        let mut client = Self::new(transport, config);
        client.login(credentials)?;
        if !client.is_logged_in() {
            return Err(LinkarError::NotLoggedIn);
        }

        let result = f(&mut client);
        let logout = client.logout();
        let value = result?;
        logout?;
        Ok(value)
    }

    pub fn is_logged_in(&self) -> bool {
        self.connection.is_some()
    }

    pub fn connection_info(&self) -> Option<&ConnectionInfo> {
        self.connection.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Open a session and return the raw LOGIN response
    pub fn login(&mut self, credentials: CredentialOptions) -> Result<String> {
        if self.is_logged_in() {
            tracing::warn!("Login ignored: session already open");
            return Ok(String::new());
        }

        let payload = login_args(&self.config.custom_vars);
        let response = self.transport.send(
            Endpoint::Credentials(&credentials),
            OperationCode::Login,
            &payload,
            DataFormat::Mv.into(),
            DataFormat::Mv.into(),
            self.config.receive_timeout_secs,
        )?;

        if response.is_empty() {
            tracing::warn!("Login to {} returned an empty response", credentials.host);
            return Ok(response);
        }

        let parsed = LkResponse::parse(&response);
        let session_id = parsed.session_id();
        if session_id.is_empty() {
            tracing::warn!(
                "Login to {} returned no session id (errors: {:?})",
                credentials.host,
                parsed.errors()
            );
            return Ok(response);
        }

        tracing::info!(
            "Logged in to {}:{} as {}",
            credentials.host,
            credentials.port,
            credentials.username
        );
        let info = ConnectionInfo::new(
            credentials,
            session_id,
            parsed.lk_connection_id(),
            parsed.public_key(),
        );
        self.connection = Some(info);
        Ok(response)
    }

    /// Close the session and return the raw LOGOUT response
    pub fn logout(&mut self) -> Result<String> {
        let Some(info) = &self.connection else {
            tracing::warn!("Logout ignored: no open session");
            return Ok(String::new());
        };

        let payload = logout_args(&self.config.custom_vars);
        let response = self.transport.send(
            Endpoint::Session(info),
            OperationCode::Logout,
            &payload,
            DataFormat::Mv.into(),
            DataFormat::Mv.into(),
            self.config.receive_timeout_secs,
        )?;

        if response.is_empty() {
            tracing::warn!("Logout returned an empty response; session kept");
        } else {
            tracing::info!("Logged out of session {}", info.session_id);
            self.connection = None;
        }
        Ok(response)
    }
}

impl<T: Transport> Commands for PersistentClient<T> {
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
        let info = self.connection.as_ref().ok_or(LinkarError::NotLoggedIn)?;
        self.transport.send(
            Endpoint::Session(info),
            op_code,
            payload,
            input_format,
            output_format,
            self.config.receive_timeout_secs,
        )
    }
}

impl<T: Transport> Drop for PersistentClient<T> {
    fn drop(&mut self) {
        if let Some(info) = &self.connection {
            tracing::warn!(
                "Session {} dropped without logout; it stays open on the server",
                info.session_id
            );
        }
    }
}
