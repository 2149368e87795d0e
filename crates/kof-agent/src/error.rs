//! Error types for the KOF agent

use kof_proto::ErrorCode;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Debug, Error)]
pub enum AgentError {
    /// Channel did not become ready before the connect deadline
    #[error("Connection to {addr} timed out after {timeout:?}")]
    ConnectionTimeout { addr: String, timeout: Duration },

    /// Any other failure while establishing the channel
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Server answered with an error code other than ERROR_NONE
    #[error("Remote error: {0}")]
    Remote(RemoteErrorCode),

    /// The call itself failed (connection lost, server-side status, ...)
    #[error("Transport error: {0}")]
    Transport(tonic::Status),

    /// Operation has no defined contract yet
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Caller-supplied argument rejected before sending
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl AgentError {
    /// Remote error code, if this error came from the server's reply
    pub fn remote_code(&self) -> Option<RemoteErrorCode> {
        match self {
            AgentError::Remote(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Config(err.to_string())
    }
}

/// Non-success code received from the server
///
/// Values outside the known [`ErrorCode`] set are kept as their raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorCode {
    Known(ErrorCode),
    Unknown(i32),
}

impl RemoteErrorCode {
    /// Numeric value as sent on the wire
    pub fn value(&self) -> i32 {
        match self {
            RemoteErrorCode::Known(code) => *code as i32,
            RemoteErrorCode::Unknown(value) => *value,
        }
    }
}

impl From<i32> for RemoteErrorCode {
    fn from(value: i32) -> Self {
        match ErrorCode::try_from(value) {
            Ok(code) => RemoteErrorCode::Known(code),
            Err(_) => RemoteErrorCode::Unknown(value),
        }
    }
}

impl PartialEq<ErrorCode> for RemoteErrorCode {
    fn eq(&self, other: &ErrorCode) -> bool {
        matches!(self, RemoteErrorCode::Known(code) if code == other)
    }
}

impl fmt::Display for RemoteErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteErrorCode::Known(code) => f.write_str(code.as_str_name()),
            RemoteErrorCode::Unknown(value) => write!(f, "UNKNOWN({})", value),
        }
    }
}
