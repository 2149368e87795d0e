//! # kof-proto
//!
//! Wire contract of the KOF game-control service (`kofserver.KOFServer`).
//!
//! - Protobuf messages and the [`ErrorCode`] enumeration
//! - tonic client stub ([`KofServerClient`]) used by the agent
//! - tonic server stub ([`KofServer`] / [`KofServerServer`]) for mock servers

pub mod messages;

/// Generated tonic glue for `kofserver.KOFServer`
pub mod service {
    #![allow(non_camel_case_types, clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/kofserver.KOFServer.rs"));
}

pub use messages::{ErrorCode, PlayerIssueSc, PlayerIssueScReply};
pub use service::k_o_f_server_client::KOFServerClient as KofServerClient;
pub use service::k_o_f_server_server::{
    KOFServer as KofServer, KOFServerServer as KofServerServer,
};
