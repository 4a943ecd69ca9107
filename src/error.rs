use crate::domain::wallet::WalletId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Every way a wallet operation can be refused.
///
/// All variants are deterministic given the same state and input, and none of
/// them leave a partially applied mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Wallet {0} already exists")]
    AlreadyExists(WalletId),
    #[error("Wallet {0} not found")]
    NotFound(WalletId),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("Invalid wallet id: {0}")]
    InvalidWalletId(String),
    #[error("Insufficient funds in wallet {wallet}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        wallet: WalletId,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Wallet {0} is not empty")]
    NonEmptyWallet(WalletId),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, WalletError>;
