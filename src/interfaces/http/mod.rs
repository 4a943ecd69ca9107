//! HTTP adapter over the wallet use cases.
//!
//! Parses request shape (anything unparseable becomes `MalformedInput`),
//! calls into the application layer and maps `WalletError` to a status code
//! and a `ResponseModel` body. It enforces no wallet invariants itself.

pub mod handlers;
pub mod models;

use crate::application::transfer::TransferEngine;
use crate::application::wallets::WalletService;
use crate::domain::ports::WalletStoreRef;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Base path of every wallet resource.
pub const WALLET_PATH: &str = "/wallet";

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub wallets: WalletService,
    pub transfers: TransferEngine,
}

impl AppState {
    pub fn new(store: WalletStoreRef) -> Self {
        Self {
            wallets: WalletService::new(store.clone()),
            transfers: TransferEngine::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{WALLET_PATH}/:id"),
            get(handlers::get_wallet)
                .post(handlers::create_wallet)
                .patch(handlers::update_wallet)
                .delete(handlers::delete_wallet),
        )
        .route(
            &format!("{WALLET_PATH}/:id/transfer"),
            post(handlers::transfer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
