use crate::domain::wallet::{Balance, Wallet, WalletId};
use crate::error::{Result, WalletError};
use rust_decimal::Decimal;
use tokio::sync::OwnedMutexGuard;

/// The lockable cell a store keeps per wallet.
///
/// A slot outlives its map entry for as long as someone holds a handle to it,
/// so deletion first retires the slot under its own lock; anyone who locks a
/// retired slot afterwards sees the wallet as gone.
#[derive(Debug)]
pub struct WalletSlot {
    wallet: Wallet,
    retired: bool,
}

impl WalletSlot {
    pub fn new(wallet: Wallet) -> Self {
        Self {
            wallet,
            retired: false,
        }
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}

/// Exclusive access to one live wallet. Dropping it releases the lock.
///
/// Every balance change in the crate goes through [`WalletGuard::apply_delta`].
#[derive(Debug)]
pub struct WalletGuard {
    slot: OwnedMutexGuard<WalletSlot>,
}

impl WalletGuard {
    /// Wraps a locked slot, failing with `NotFound` if it was retired while
    /// the caller waited for the lock.
    pub fn acquire(id: &WalletId, slot: OwnedMutexGuard<WalletSlot>) -> Result<Self> {
        if slot.retired {
            return Err(WalletError::NotFound(id.clone()));
        }
        Ok(Self { slot })
    }

    pub fn wallet(&self) -> &Wallet {
        &self.slot.wallet
    }

    pub fn snapshot(&self) -> Wallet {
        self.slot.wallet.clone()
    }

    /// Computes the balance `delta` would produce without applying it.
    ///
    /// A sum that `Decimal` can only hold by rounding is rejected: the stored
    /// balance always differs from the old one by exactly `delta`.
    pub fn preview_delta(&self, delta: Decimal) -> Result<Balance> {
        let wallet = &self.slot.wallet;
        let current = wallet.amount().value();
        let next = current
            .checked_add(delta)
            .filter(|next| next.checked_sub(current) == Some(delta))
            .ok_or_else(|| unrepresentable(wallet, delta))?;

        if next < Decimal::ZERO {
            return Err(WalletError::InsufficientFunds {
                wallet: wallet.id().clone(),
                balance: current,
                requested: -delta,
            });
        }

        Balance::new(next)
    }

    /// Adds `delta` to the balance, or leaves it untouched and fails.
    pub fn apply_delta(&mut self, delta: Decimal) -> Result<Balance> {
        let next = self.preview_delta(delta)?;
        self.slot.wallet.set_amount(next);
        Ok(next)
    }

    /// Moves the balance to an absolute value through `apply_delta`.
    pub fn set_balance(&mut self, target: Balance) -> Result<Balance> {
        let wallet = &self.slot.wallet;
        let delta = target
            .value()
            .checked_sub(wallet.amount().value())
            .ok_or_else(|| unrepresentable(wallet, target.value()))?;
        if self.preview_delta(delta)?.value() != target.value() {
            return Err(unrepresentable(&self.slot.wallet, delta));
        }
        self.apply_delta(delta)
    }

    /// Marks the wallet as deleted. Only empty wallets can be retired.
    pub fn retire(mut self) -> Result<Wallet> {
        if !self.slot.wallet.amount().is_zero() {
            return Err(WalletError::NonEmptyWallet(self.slot.wallet.id().clone()));
        }
        self.slot.retired = true;
        Ok(self.slot.wallet.clone())
    }
}

fn unrepresentable(wallet: &Wallet, delta: Decimal) -> WalletError {
    WalletError::InvalidAmount(format!(
        "adding {} to wallet {} does not give an exact balance",
        delta,
        wallet.id()
    ))
}
