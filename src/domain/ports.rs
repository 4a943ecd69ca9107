use super::guard::WalletGuard;
use super::wallet::{Balance, Wallet, WalletId};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Keyed wallet storage with one exclusive lock per wallet.
///
/// Implementations must make `create` and `delete` atomic with respect to
/// every other operation on the same id, and must never hold a map-wide lock
/// while a wallet is being mutated.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Inserts a new wallet, failing with `AlreadyExists` if the id is taken.
    async fn create(&self, wallet: Wallet) -> Result<()>;

    /// Waits for exclusive access to a live wallet.
    async fn lock(&self, id: &WalletId) -> Result<WalletGuard>;

    /// Removes an empty wallet, freeing its id.
    async fn delete(&self, id: &WalletId) -> Result<Wallet>;

    /// Drops every wallet.
    async fn reset(&self) -> Result<()>;

    async fn get(&self, id: &WalletId) -> Result<Wallet> {
        Ok(self.lock(id).await?.snapshot())
    }

    async fn apply_delta(&self, id: &WalletId, delta: Decimal) -> Result<Balance> {
        self.lock(id).await?.apply_delta(delta)
    }
}

pub type WalletStoreRef = Arc<dyn WalletStore>;
