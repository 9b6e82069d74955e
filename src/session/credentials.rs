//! Credential options
//!
//! Login data for one gateway entry point.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LinkarError, Result};
use crate::protocol::marks::FS;

/// Number of FS-separated fields in the serialized form
pub const CREDENTIAL_FIELDS: usize = 8;

/// Gateway credentials
///
/// Serializes to `Host FS EntryPoint FS Port FS Username FS Password FS
/// Language FS FreeText FS PluginId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialOptions {
    pub host: String,
    pub entry_point: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub language: String,
    /// Free text shown by the server's session monitor
    pub free_text: String,
    pub plugin_id: String,
}

impl CredentialOptions {
    pub fn new(
        host: impl Into<String>,
        entry_point: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            entry_point: entry_point.into(),
            port,
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn free_text(mut self, free_text: impl Into<String>) -> Self {
        self.free_text = free_text.into();
        self
    }

    pub fn plugin_id(mut self, plugin_id: impl Into<String>) -> Self {
        self.plugin_id = plugin_id.into();
        self
    }

    /// Lenient parse of the FS-joined form
    ///
    /// Malformed input yields empty credentials instead of an error. Use
    /// `str::parse` when the caller needs to know.
    pub fn from_lk_string(s: &str) -> Self {
        match s.parse() {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::warn!("Ignoring malformed credential string: {}", e);
                Self::default()
            }
        }
    }

    /// Load credentials from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl fmt::Display for CredentialOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FS}{}{FS}{}{FS}{}{FS}{}{FS}{}{FS}{}{FS}{}",
            self.host,
            self.entry_point,
            self.port,
            self.username,
            self.password,
            self.language,
            self.free_text,
            self.plugin_id
        )
    }
}

impl FromStr for CredentialOptions {
    type Err = LinkarError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(FS).collect();
        if parts.len() != CREDENTIAL_FIELDS {
            return Err(LinkarError::Protocol(format!(
                "Credential string: expected {} fields, got {}",
                CREDENTIAL_FIELDS,
                parts.len()
            )));
        }

        let port = parts[2].trim().parse().map_err(|_| {
            LinkarError::Protocol(format!("Credential string: invalid port '{}'", parts[2]))
        })?;

        Ok(Self {
            host: parts[0].to_owned(),
            entry_point: parts[1].to_owned(),
            port,
            username: parts[3].to_owned(),
            password: parts[4].to_owned(),
            language: parts[5].to_owned(),
            free_text: parts[6].to_owned(),
            plugin_id: parts[7].to_owned(),
        })
    }
}
