//! Pure checks shared by the store, the wallet service and the transfer engine.
//!
//! Nothing in here touches shared state.

use crate::domain::wallet::{CurrencyCode, Wallet, WalletId};
use crate::error::{Result, WalletError};
use rust_decimal::Decimal;

/// Currencies a wallet may be opened in.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "RUB"];

pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(code))
}

pub fn ensure_supported_currency(code: &str) -> Result<()> {
    let well_formed = code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic());
    if well_formed && is_supported_currency(code) {
        Ok(())
    } else {
        Err(WalletError::InvalidCurrency(format!(
            "'{}' is not one of {}",
            code,
            SUPPORTED_CURRENCIES.join(", ")
        )))
    }
}

/// Balances may be zero but never negative.
pub fn ensure_non_negative(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        Err(WalletError::InvalidAmount(format!(
            "{} must not be negative",
            amount
        )))
    } else {
        Ok(())
    }
}

/// Transferred amounts must be strictly positive.
pub fn ensure_positive(amount: Decimal) -> Result<()> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(WalletError::InvalidAmount(format!(
            "{} must be greater than zero",
            amount
        )))
    }
}

pub fn ensure_distinct(source: &WalletId, target: &WalletId) -> Result<()> {
    if source == target {
        Err(WalletError::InvalidWalletId(format!(
            "cannot transfer from wallet {} to itself",
            source
        )))
    } else {
        Ok(())
    }
}

pub fn ensure_same_currency(source: &Wallet, target: &Wallet) -> Result<()> {
    if source.currency() == target.currency() {
        Ok(())
    } else {
        Err(currency_mismatch(source.currency(), target.currency()))
    }
}

pub fn ensure_sufficient_funds(source: &Wallet, requested: Decimal) -> Result<()> {
    let balance = source.amount().value();
    if balance >= requested {
        Ok(())
    } else {
        Err(WalletError::InsufficientFunds {
            wallet: source.id().clone(),
            balance,
            requested,
        })
    }
}

fn currency_mismatch(source: &CurrencyCode, target: &CurrencyCode) -> WalletError {
    WalletError::InvalidCurrency(format!(
        "source wallet holds {} but target wallet holds {}",
        source, target
    ))
}
