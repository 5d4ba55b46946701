//! Shared helpers for integration tests that talk to a live task API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use kanban::{
    api::{AppState, router},
    board::{adapters::HttpTaskGateway, ports::Celebration},
    task::adapters::memory::InMemoryTaskRepository,
};
use mockable::DefaultClock;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Task API served from an in-memory repository on an ephemeral port.
///
/// Dropping the server triggers a graceful shutdown.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Binds `127.0.0.1:0` and starts serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> Result<Self, eyre::Report> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = router(AppState::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        ));
        let (shutdown, signal) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let served = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    signal.await.ok();
                })
                .await;
            if let Err(err) = served {
                tracing::warn!(error = %err, "test server stopped with an error");
            }
        });
        Ok(Self {
            addr,
            shutdown: Some(shutdown),
            handle: Some(handle),
        })
    }

    /// Base URL with the `/api` prefix the board client uses.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Gateway for this server that never reuses pooled connections, so a
    /// stopped server is noticed on the next call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn gateway(&self) -> Result<HttpTaskGateway, eyre::Report> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(HttpTaskGateway::with_client(client, &self.api_url())?)
    }

    /// Shuts the server down and waits for it to exit.
    pub async fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
        if let Some(handle) = self.handle.take() {
            handle.await.ok();
        }
    }
}

/// Celebration that records every task it was asked to celebrate.
#[derive(Debug, Clone, Default)]
pub struct RecordingCelebration {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingCelebration {
    /// Returns the celebrated task ids in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Celebration for RecordingCelebration {
    fn celebrate(&self, task_id: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(task_id.to_owned());
        }
    }
}
