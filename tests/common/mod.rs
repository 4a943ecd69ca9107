#![allow(dead_code)]

use rust_decimal::Decimal;
use std::sync::Arc;
use transfer_manager::application::transfer::TransferEngine;
use transfer_manager::application::wallets::WalletService;
use transfer_manager::domain::ports::WalletStoreRef;
use transfer_manager::domain::wallet::WalletId;
use transfer_manager::infrastructure::in_memory::InMemoryWalletStore;

pub struct Harness {
    pub wallets: WalletService,
    pub transfers: TransferEngine,
}

pub fn harness() -> Harness {
    let store: WalletStoreRef = Arc::new(InMemoryWalletStore::new());
    Harness {
        wallets: WalletService::new(store.clone()),
        transfers: TransferEngine::new(store),
    }
}

pub fn id(raw: &str) -> WalletId {
    WalletId::new(raw).expect("valid wallet id")
}

impl Harness {
    pub async fn seed(&self, wallets: &[(&str, &str, Decimal)]) {
        for (raw, currency, amount) in wallets {
            self.wallets
                .create_wallet(raw, currency, *amount)
                .await
                .expect("seed wallet");
        }
    }

    pub async fn balance(&self, raw: &str) -> Decimal {
        self.wallets
            .wallet(&id(raw))
            .await
            .expect("wallet exists")
            .amount()
            .value()
    }
}
