//! HTTP server for the HubSpot integration.

pub mod extract;
pub mod pages;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::HubSpotClient;
use crate::config::Config;
use crate::items::ItemFetcher;
use crate::oauth::OAuthFlow;
use crate::store::KeyValueStore;

/// HubSpot integration server.
#[derive(Debug)]
pub struct IntegrationServer {
    oauth: OAuthFlow,
    items: ItemFetcher,
}

impl IntegrationServer {
    /// Wire the flow and fetcher to `store`.
    #[must_use]
    pub fn new(config: &Config, client: HubSpotClient, store: Arc<dyn KeyValueStore>) -> Self {
        let oauth = OAuthFlow::new(config, client.clone(), store);
        let items = ItemFetcher::new(client);

        Self { oauth, items }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(self) -> axum::Router {
        routes::create_router(self.oauth, self.items)
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
