//! Agent configuration
//!
//! Mirrors the `agentHost` / `agentPort` / `agentConnectTimeout` keys of the
//! shared game configuration file.

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default KOF server port
pub const DEFAULT_PORT: u16 = 29110;

/// Default budget for the channel to become ready
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for [`AgentClient`](crate::AgentClient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// KOF server hostname or IP
    #[serde(rename = "agentHost")]
    pub host: String,
    /// KOF server port (1-65535)
    #[serde(rename = "agentPort")]
    pub port: u16,
    /// How long to wait for the channel to become ready
    #[serde(rename = "agentConnectTimeout", with = "seconds")]
    pub connect_timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl AgentConfig {
    /// Create a config for `host:port`
    pub fn new(host: impl Into<String>, port: u16, connect_timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout,
        }
    }

    /// Parse and validate a JSON config document
    ///
    /// Unrelated keys are ignored so the agent can share a file with the
    /// rest of the game tooling.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AgentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AgentError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Check host and port are usable
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AgentError::Config("agentHost must not be empty".into()));
        }
        if self.port == 0 {
            return Err(AgentError::Config(
                "agentPort must be in 1-65535".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` form of the server address; IPv6 literals are bracketed
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// URI handed to the gRPC endpoint
    pub(crate) fn endpoint_uri(&self) -> String {
        format!("http://{}", self.addr())
    }
}

/// (De)serialize a `Duration` as a non-negative number of seconds
mod seconds {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            D::Error::custom(format!(
                "agentConnectTimeout must be a non-negative number of seconds, got {}",
                secs
            ))
        })
    }
}
