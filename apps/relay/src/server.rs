//! HTTP server setup
//!
//! # Responsibilities
//! - Create the axum Router with the single relay route
//! - Wire up access logging
//! - Serve connections until shutdown

use axum::{Router, middleware, routing::post};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use za_relay_common::constants::RELAY_PATH;

use crate::access_log::access_log;
use crate::relay::relay_handler;

/// State injected into the relay handler
///
/// Read-only for handlers; the client is shared by every request.
#[derive(Clone)]
pub struct RelayState {
    pub client: reqwest::Client,
}

impl RelayState {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Build the relay router
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(RELAY_PATH, post(relay_handler))
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

/// HTTP server for the relay
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    pub fn new(state: RelayState) -> Self {
        Self {
            router: router(state),
        }
    }

    /// Run until Ctrl-C
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run until `shutdown` completes
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!("Relay listening on {}{}", addr, RELAY_PATH);

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Relay stopped");
        Ok(())
    }
}

/// Wait for Ctrl-C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down gracefully..."),
        Err(e) => {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
