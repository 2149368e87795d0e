//! Agent for the KOF game-control server
//!
//! This crate provides a client that connects to the `kofserver.KOFServer`
//! gRPC service and issues player commands on behalf of a game operator.
//!
//! ```no_run
//! # async fn run() -> kof_agent::Result<()> {
//! use kof_agent::{AgentClient, AgentConfig};
//!
//! let agent = AgentClient::connect(&AgentConfig::default()).await?;
//! agent.issue_shellcode("gameA", "playerA", vec![0x90, 0x90]).await?;
//! agent.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::AgentClient;
pub use config::AgentConfig;
pub use error::{AgentError, RemoteErrorCode, Result};
pub use kof_proto::ErrorCode;
