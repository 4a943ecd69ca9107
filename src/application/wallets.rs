use crate::application::locking::lock_in_order;
use crate::domain::ports::WalletStoreRef;
use crate::domain::wallet::{Balance, Wallet, WalletId};
use crate::error::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Single-wallet use cases over a shared [`WalletStore`](crate::domain::ports::WalletStore).
///
/// Raw input is validated here, before the store is touched; the store only
/// ever sees well-formed wallets.
#[derive(Clone)]
pub struct WalletService {
    store: WalletStoreRef,
}

impl WalletService {
    pub fn new(store: WalletStoreRef) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &WalletStoreRef {
        &self.store
    }

    /// Opens a wallet. The currency is checked before the amount, and both
    /// before the id is looked up.
    pub async fn create_wallet(&self, id: &str, currency: &str, amount: Decimal) -> Result<Wallet> {
        let wallet = Wallet::open(id, currency, amount)?;
        self.store.create(wallet.clone()).await?;
        tracing::info!(
            wallet = %wallet.id(),
            currency = %wallet.currency(),
            amount = %wallet.amount(),
            "Wallet created"
        );
        Ok(wallet)
    }

    pub async fn wallet(&self, id: &WalletId) -> Result<Wallet> {
        let wallet = self.store.get(id).await?;
        tracing::debug!(wallet = %id, amount = %wallet.amount(), "Wallet read");
        Ok(wallet)
    }

    /// Sets the balance of an existing wallet to `amount`.
    pub async fn update_wallet(&self, id: &WalletId, amount: Decimal) -> Result<Wallet> {
        let target = Balance::new(amount)?;
        let mut guard = self.store.lock(id).await?;
        let previous = guard.wallet().amount();
        guard.set_balance(target)?;
        tracing::debug!(wallet = %id, from = %previous, to = %target, "Wallet updated");
        Ok(guard.snapshot())
    }

    pub async fn delete_wallet(&self, id: &WalletId) -> Result<Wallet> {
        let removed = self.store.delete(id).await?;
        tracing::info!(wallet = %id, currency = %removed.currency(), "Wallet deleted");
        Ok(removed)
    }

    /// Reads several wallets at one instant.
    ///
    /// All requested wallets are locked (in canonical order) before any of
    /// them is read, so no transfer between them can be seen half applied.
    pub async fn snapshot<'a, I>(&self, ids: I) -> Result<BTreeMap<WalletId, Wallet>>
    where
        I: IntoIterator<Item = &'a WalletId>,
    {
        let guards = lock_in_order(self.store.as_ref(), ids).await;
        let mut locked = Vec::with_capacity(guards.len());
        for (_, guard) in guards {
            locked.push(guard?);
        }
        Ok(locked
            .iter()
            .map(|guard| (guard.wallet().id().clone(), guard.snapshot()))
            .collect())
    }

    /// Drops every wallet. Meant for test harnesses.
    pub async fn reset(&self) -> Result<()> {
        self.store.reset().await?;
        tracing::debug!("Wallet store reset");
        Ok(())
    }
}
