use crate::domain::guard::{WalletGuard, WalletSlot};
use crate::domain::ports::WalletStore;
use crate::domain::wallet::{Wallet, WalletId};
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

type SharedSlot = Arc<Mutex<WalletSlot>>;

/// A thread-safe in-memory wallet store.
///
/// The map of `WalletId` to slot sits behind an `RwLock` that is only held to
/// look up, insert or remove a slot. Balances are changed under the slot's own
/// `Mutex`, so wallets with different ids never wait on each other.
#[derive(Default, Clone)]
pub struct InMemoryWalletStore {
    wallets: Arc<RwLock<HashMap<WalletId, SharedSlot>>>,
}

impl InMemoryWalletStore {
    /// Creates a new, empty in-memory wallet store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wallets currently in the map.
    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn slot(&self, id: &WalletId) -> Result<SharedSlot> {
        let wallets = self.wallets.read().await;
        wallets
            .get(id)
            .cloned()
            .ok_or_else(|| WalletError::NotFound(id.clone()))
    }
}

#[async_trait]
impl WalletStore for InMemoryWalletStore {
    async fn create(&self, wallet: Wallet) -> Result<()> {
        let id = wallet.id().clone();
        loop {
            let busy = {
                let mut wallets = self.wallets.write().await;
                match wallets.entry(id.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(Arc::new(Mutex::new(WalletSlot::new(wallet))));
                        return Ok(());
                    }
                    Entry::Occupied(mut entry) => {
                        // A retired slot may linger until its deleter takes the
                        // write lock.
                        let retired = entry.get().try_lock().map(|slot| slot.is_retired());
                        match retired {
                            Ok(true) => {
                                entry.insert(Arc::new(Mutex::new(WalletSlot::new(wallet))));
                                return Ok(());
                            }
                            Ok(false) => return Err(WalletError::AlreadyExists(id)),
                            Err(_) => entry.get().clone(),
                        }
                    }
                }
            };

            // Someone holds the slot. Wait for them outside the map lock, then
            // look again if it turned out to be retired.
            let retired = busy.lock().await.is_retired();
            if !retired {
                return Err(WalletError::AlreadyExists(id));
            }
        }
    }

    async fn lock(&self, id: &WalletId) -> Result<WalletGuard> {
        let slot = self.slot(id).await?;
        WalletGuard::acquire(id, slot.lock_owned().await)
    }

    async fn delete(&self, id: &WalletId) -> Result<Wallet> {
        let slot = self.slot(id).await?;
        let guard = WalletGuard::acquire(id, slot.clone().lock_owned().await)?;
        let removed = guard.retire()?;

        let mut wallets = self.wallets.write().await;
        if let Entry::Occupied(entry) = wallets.entry(id.clone())
            && Arc::ptr_eq(entry.get(), &slot)
        {
            entry.remove();
        }
        Ok(removed)
    }

    async fn reset(&self) -> Result<()> {
        self.wallets.write().await.clear();
        Ok(())
    }
}
