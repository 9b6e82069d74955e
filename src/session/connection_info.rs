//! Connection info
//!
//! Session state returned by LOGIN and presented on every persistent call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::credentials::{CredentialOptions, CREDENTIAL_FIELDS};
use crate::error::{LinkarError, Result};
use crate::protocol::marks::FS;

/// Credentials plus the session issued for them
///
/// Serializes to `SessionId FS LkConnectionId FS PublicKey FS <credentials>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub session_id: String,
    pub lk_connection_id: String,
    pub public_key: String,
    pub credentials: CredentialOptions,
}

impl ConnectionInfo {
    pub fn new(
        credentials: CredentialOptions,
        session_id: impl Into<String>,
        lk_connection_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            lk_connection_id: lk_connection_id.into(),
            public_key: public_key.into(),
            credentials,
        }
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FS}{}{FS}{}{FS}{}",
            self.session_id, self.lk_connection_id, self.public_key, self.credentials
        )
    }
}

impl FromStr for ConnectionInfo {
    type Err = LinkarError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(4, FS);
        let (Some(session_id), Some(lk_connection_id), Some(public_key), Some(credentials)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(LinkarError::Protocol(format!(
                "Connection info: expected {} fields",
                CREDENTIAL_FIELDS + 3
            )));
        };

        Ok(Self::new(
            credentials.parse()?,
            session_id,
            lk_connection_id,
            public_key,
        ))
    }
}
