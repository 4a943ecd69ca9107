use crate::application::locking::lock_in_order;
use crate::domain::guard::WalletGuard;
use crate::domain::ports::WalletStoreRef;
use crate::domain::validation;
use crate::domain::wallet::{Amount, Wallet, WalletId};
use crate::error::{Result, WalletError};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Post-transfer state of both wallets, read under the same locks that
/// applied the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub source: Wallet,
    pub target: Wallet,
    pub amount: Amount,
}

/// Moves money between two wallets as one atomic step.
///
/// Both wallet locks are taken in canonical id order and held until the debit
/// and the credit are committed. Every check runs before anything is written,
/// so a failed transfer leaves both wallets exactly as they were.
#[derive(Clone)]
pub struct TransferEngine {
    store: WalletStoreRef,
}

impl TransferEngine {
    pub fn new(store: WalletStoreRef) -> Self {
        Self { store }
    }

    /// Transfers `amount` from `source` to `target`.
    ///
    /// Checks run in this order: positive amount, distinct wallets, source
    /// exists, target exists, matching currencies, sufficient funds.
    pub async fn transfer(
        &self,
        source: &WalletId,
        target: &WalletId,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        let result = self.try_transfer(source, target, amount).await;
        match &result {
            Ok(receipt) => tracing::info!(
                source = %source,
                target = %target,
                amount = %amount,
                source_balance = %receipt.source.amount(),
                target_balance = %receipt.target.amount(),
                "Transfer committed"
            ),
            Err(e) => tracing::warn!(
                source = %source,
                target = %target,
                amount = %amount,
                error = %e,
                "Transfer rejected"
            ),
        }
        result
    }

    async fn try_transfer(
        &self,
        source: &WalletId,
        target: &WalletId,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        let amount = Amount::new(amount)?;
        validation::ensure_distinct(source, target)?;

        let mut guards = lock_in_order(self.store.as_ref(), [source, target]).await;
        let mut source_guard = take(&mut guards, source)?;
        let mut target_guard = take(&mut guards, target)?;

        validation::ensure_same_currency(source_guard.wallet(), target_guard.wallet())?;
        validation::ensure_sufficient_funds(source_guard.wallet(), amount.value())?;

        // Both sides are computed first so an unrepresentable credit cannot
        // strand a committed debit.
        source_guard.preview_delta(-amount.value())?;
        target_guard.preview_delta(amount.value())?;
        source_guard.apply_delta(-amount.value())?;
        target_guard.apply_delta(amount.value())?;

        Ok(TransferReceipt {
            source: source_guard.snapshot(),
            target: target_guard.snapshot(),
            amount,
        })
    }
}

fn take(guards: &mut BTreeMap<WalletId, Result<WalletGuard>>, id: &WalletId) -> Result<WalletGuard> {
    guards
        .remove(id)
        .unwrap_or_else(|| Err(WalletError::NotFound(id.clone())))
}
