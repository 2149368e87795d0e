//! In-process fake KOF server

use kof_proto::{KofServer, KofServerServer, PlayerIssueSc, PlayerIssueScReply};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tokio::sync::{Notify, oneshot};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};

/// How the fake answers `PlayerIssueSC`
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Reply with this raw error code
    Reply(i32),
    /// Accept the call and never answer
    Hang,
}

struct FakeKofServer {
    behavior: Behavior,
    received: Arc<Mutex<Vec<PlayerIssueSc>>>,
    call_started: Arc<Notify>,
}

#[tonic::async_trait]
impl KofServer for FakeKofServer {
    async fn player_issue_sc(
        &self,
        request: Request<PlayerIssueSc>,
    ) -> Result<Response<PlayerIssueScReply>, Status> {
        self.received.lock().unwrap().push(request.into_inner());
        self.call_started.notify_one();

        match self.behavior {
            Behavior::Reply(error) => Ok(Response::new(PlayerIssueScReply { error })),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

/// Fake server running on its own runtime thread
///
/// Killing it drops the runtime, which tears down every open connection
/// without a graceful HTTP/2 shutdown.
pub struct FakeServer {
    pub addr: SocketAddr,
    pub received: Arc<Mutex<Vec<PlayerIssueSc>>>,
    pub call_started: Arc<Notify>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FakeServer {
    pub fn start(behavior: Behavior) -> Self {
        Self::start_at(behavior, "127.0.0.1:0".parse().unwrap())
    }

    /// Start listening on a specific address
    pub fn start_at(behavior: Behavior, bind_addr: SocketAddr) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let call_started = Arc::new(Notify::new());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();

        let service = FakeKofServer {
            behavior,
            received: received.clone(),
            call_started: call_started.clone(),
        };

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(bind_addr).await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();

                let server = tonic::transport::Server::builder()
                    .add_service(KofServerServer::new(service))
                    .serve_with_incoming(TcpListenerStream::new(listener));

                tokio::select! {
                    _ = server => {}
                    _ = shutdown_rx => {}
                }
            });

            runtime.shutdown_background();
        });

        let addr = addr_rx.recv().unwrap();
        Self {
            addr,
            received,
            call_started,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    pub fn requests(&self) -> Vec<PlayerIssueSc> {
        self.received.lock().unwrap().clone()
    }

    /// Stop the server and drop all of its connections
    pub fn kill(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.kill();
    }
}

/// An address on which nothing listens
pub fn refused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
