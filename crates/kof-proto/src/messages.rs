//! Protobuf messages of the `kofserver` package

/// Error codes reported by the KOF server
///
/// `ErrorNone` is the zero value and is the only code meaning success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ErrorCode {
    ErrorNone = 0,
    ErrorGameNotFound = 1,
    ErrorPlayerNotFound = 2,
    ErrorGameNotRunning = 3,
    ErrorShellcodeRejected = 4,
}

impl ErrorCode {
    /// Name of the value as it appears in the protobuf definition
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ErrorCode::ErrorNone => "ERROR_NONE",
            ErrorCode::ErrorGameNotFound => "ERROR_GAME_NOT_FOUND",
            ErrorCode::ErrorPlayerNotFound => "ERROR_PLAYER_NOT_FOUND",
            ErrorCode::ErrorGameNotRunning => "ERROR_GAME_NOT_RUNNING",
            ErrorCode::ErrorShellcodeRejected => "ERROR_SHELLCODE_REJECTED",
        }
    }

    /// Look up a value by its protobuf name
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "ERROR_NONE" => Some(ErrorCode::ErrorNone),
            "ERROR_GAME_NOT_FOUND" => Some(ErrorCode::ErrorGameNotFound),
            "ERROR_PLAYER_NOT_FOUND" => Some(ErrorCode::ErrorPlayerNotFound),
            "ERROR_GAME_NOT_RUNNING" => Some(ErrorCode::ErrorGameNotRunning),
            "ERROR_SHELLCODE_REJECTED" => Some(ErrorCode::ErrorShellcodeRejected),
            _ => None,
        }
    }
}

/// Request of `KOFServer.PlayerIssueSC`
#[derive(Clone, PartialEq, prost::Message)]
pub struct PlayerIssueSc {
    #[prost(string, tag = "1")]
    pub game_name: String,
    #[prost(string, tag = "2")]
    pub player_name: String,
    #[prost(bytes = "vec", tag = "3")]
    pub shellcode: Vec<u8>,
}

/// Reply of `KOFServer.PlayerIssueSC`
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct PlayerIssueScReply {
    #[prost(enumeration = "ErrorCode", tag = "1")]
    pub error: i32,
}

impl PlayerIssueScReply {
    /// Build a reply carrying `code`
    pub fn with_code(code: ErrorCode) -> Self {
        Self { error: code as i32 }
    }
}
