use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use transfer_manager::config::ServerConfig;
use transfer_manager::domain::ports::WalletStoreRef;
use transfer_manager::infrastructure::in_memory::InMemoryWalletStore;
use transfer_manager::interfaces::http::{self, AppState};
use transfer_manager::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(&config.log_filter).into_diagnostic()?;

    let store: WalletStoreRef = Arc::new(InMemoryWalletStore::new());
    let app = http::router(AppState::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()?;
    tracing::info!(%addr, "Wallet service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Wallet service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
