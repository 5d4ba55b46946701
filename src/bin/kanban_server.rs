//! Runs the kanban task API.
//!
//! Usage:
//!
//! ```text
//! HOST=127.0.0.1 PORT=3000 kanban_server
//! ```
//!
//! See [`kanban::config`] for every recognised variable. With
//! `DATABASE_URL` set, tasks are stored in `PostgreSQL` and the `tasks`
//! table is created on startup if missing; otherwise they are kept in
//! memory. The server stops gracefully on Ctrl-C or `SIGTERM`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use kanban::{
    api::{AppState, router},
    config::{ConfigError, ServerConfig, StorageMode, redact_database_url},
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, connect_pool},
        },
        ports::TaskRepositoryError,
    },
    telemetry::init_tracing,
};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("storage setup failed: {0}")]
    Storage(#[from] TaskRepositoryError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;
    run()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "kanban server stopped"))
        .map_err(Into::into)
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = build_app(&config.storage).await?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "kanban server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn build_app(storage: &StorageMode) -> Result<Router, ServerError> {
    let clock = Arc::new(DefaultClock);
    match storage {
        StorageMode::Memory => {
            tracing::info!("using in-memory task storage");
            let repository = Arc::new(InMemoryTaskRepository::new());
            Ok(router(AppState::new(repository, clock)))
        }
        StorageMode::Postgres {
            database_url,
            pool_size,
        } => {
            tracing::info!(
                database_url = %redact_database_url(database_url),
                pool_size,
                "using PostgreSQL task storage"
            );
            let repository = PostgresTaskRepository::new(connect_pool(database_url, *pool_size)?);
            repository.ensure_schema().await?;
            Ok(router(
                AppState::new(Arc::new(repository), clock).with_storage(storage.clone()),
            ))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown requested");
}
