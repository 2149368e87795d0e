//! Generates the `kofserver.KOFServer` client and server stubs.
//!
//! The messages are declared by hand in `src/messages.rs`, so only the
//! service glue is generated here and no `protoc` is required.

use tonic_build::manual::{Builder, Method, Service};

fn main() {
    let kof_server = Service::builder()
        .name("KOFServer")
        .package("kofserver")
        .method(
            Method::builder()
                .name("player_issue_sc")
                .route_name("PlayerIssueSC")
                .input_type("crate::messages::PlayerIssueSc")
                .output_type("crate::messages::PlayerIssueScReply")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new().compile(&[kof_server]);

    println!("cargo:rerun-if-changed=build.rs");
}
