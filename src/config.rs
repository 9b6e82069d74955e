//! Configuration for Linkar clients
//!
//! Centralized configuration with sensible defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Client-side configuration shared by direct and persistent clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Receive timeout handed to the transport (seconds).
    /// 0 means wait indefinitely.
    pub receive_timeout_secs: u32,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// CUSTOMVARS segment sent with every client operation except VERSION
    /// and RESETCOMMONBLOCKS. There is no per-call override.
    /// Forwarded verbatim to the server-side custom hook routine.
    pub custom_vars: String,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the receive timeout (in seconds, 0 = no timeout)
    pub fn receive_timeout_secs(mut self, secs: u32) -> Self {
        self.config.receive_timeout_secs = secs;
        self
    }

    /// Set the default CUSTOMVARS segment
    pub fn custom_vars(mut self, custom_vars: impl Into<String>) -> Self {
        self.config.custom_vars = custom_vars.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
