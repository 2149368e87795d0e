//! gRPC client for the KOF game-control server

use crate::config::AgentConfig;
use crate::error::{AgentError, RemoteErrorCode, Result};
use kof_proto::{ErrorCode, KofServerClient, PlayerIssueSc};
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info, warn};

/// Agent connected to a KOF server
///
/// A value of this type only exists once its channel has become ready, so
/// every method can assume a live connection. The channel is released when
/// the client is closed or dropped.
#[derive(Debug)]
pub struct AgentClient {
    addr: String,
    stub: KofServerClient<Channel>,
}

impl AgentClient {
    /// Open a channel to the configured server and wait for it to become
    /// ready within `config.connect_timeout`
    pub async fn connect(config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        let addr = config.addr();

        let endpoint = Endpoint::from_shared(config.endpoint_uri()).map_err(|e| {
            AgentError::ConnectionError(format!("Invalid endpoint {}: {}", addr, error_chain(&e)))
        })?;

        info!("Agent connecting to {}", addr);
        let channel = match timeout(config.connect_timeout, wait_ready(&endpoint, &addr)).await {
            Ok(channel) => channel,
            Err(_) => {
                return Err(AgentError::ConnectionTimeout {
                    addr,
                    timeout: config.connect_timeout,
                });
            }
        };
        info!("Agent connected to {}", addr);

        Ok(Self {
            addr,
            stub: KofServerClient::new(channel),
        })
    }

    /// Load the JSON config at `path` and connect with it
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = AgentConfig::load(path)?;
        Self::connect(&config).await
    }

    /// Address (`host:port`) of the server this agent talks to
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Submit `payload` as shellcode for `player_name` in `game_name`
    ///
    /// Returns `Ok(())` only when the server answers `ERROR_NONE`. Any other
    /// code comes back as [`AgentError::Remote`], and a failed call as
    /// [`AgentError::Transport`]. No deadline is applied to the call.
    pub async fn issue_shellcode(
        &self,
        game_name: &str,
        player_name: &str,
        payload: impl Into<Vec<u8>>,
    ) -> Result<()> {
        require_name("game name", game_name)?;
        require_name("player name", player_name)?;

        let request = PlayerIssueSc {
            game_name: game_name.to_string(),
            player_name: player_name.to_string(),
            shellcode: payload.into(),
        };
        debug!(
            "PlayerIssueSC game={} player={} len={}",
            request.game_name,
            request.player_name,
            request.shellcode.len()
        );

        // Channel clones share the underlying connection
        let mut stub = self.stub.clone();
        let reply = stub
            .player_issue_sc(request)
            .await
            .map_err(|status| {
                warn!("PlayerIssueSC call failed: {}", status);
                AgentError::Transport(status)
            })?
            .into_inner();

        if reply.error == ErrorCode::ErrorNone as i32 {
            info!("Shellcode accepted for {}/{}", game_name, player_name);
            Ok(())
        } else {
            let code = RemoteErrorCode::from(reply.error);
            warn!("Shellcode rejected for {}/{}: {}", game_name, player_name, code);
            Err(AgentError::Remote(code))
        }
    }

    /// Create a game on the server (no contract yet)
    pub async fn create_game(&self, game_name: &str) -> Result<()> {
        not_implemented("CreateGame", game_name)
    }

    /// Start a game on the server (no contract yet)
    pub async fn start_game(&self, game_name: &str) -> Result<()> {
        not_implemented("StartGame", game_name)
    }

    /// Destroy a game on the server (no contract yet)
    pub async fn destroy_game(&self, game_name: &str) -> Result<()> {
        not_implemented("DestroyGame", game_name)
    }

    /// Close the channel
    pub fn close(self) {
        info!("Agent disconnected from {}", self.addr);
    }
}

/// First and maximum delay between connection attempts
const RECONNECT_BACKOFF: (Duration, Duration) =
    (Duration::from_millis(20), Duration::from_secs(1));

/// Keep dialing until the endpoint accepts a channel; the caller bounds the wait
async fn wait_ready(endpoint: &Endpoint, addr: &str) -> Channel {
    let (mut delay, max_delay) = RECONNECT_BACKOFF;
    loop {
        match endpoint.connect().await {
            Ok(channel) => return channel,
            Err(e) => {
                debug!(
                    "Connect to {} failed, retrying in {:?}: {}",
                    addr,
                    delay,
                    error_chain(&e)
                );
                sleep(delay).await;
                delay = (delay * 2).min(max_delay);
            }
        }
    }
}

fn require_name(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AgentError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(())
}

fn not_implemented(op: &'static str, game_name: &str) -> Result<()> {
    warn!("{} requested for game {:?} but is not implemented", op, game_name);
    Err(AgentError::NotImplemented(op))
}

/// Render an error with its sources, skipping causes already in the text
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
