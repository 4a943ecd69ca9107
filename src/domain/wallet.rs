use crate::domain::validation;
use crate::error::{Result, WalletError};
use rust_decimal::Decimal;
use std::fmt;

/// Opaque wallet identifier.
///
/// Ordering is lexicographic on the underlying string; it is the canonical
/// order in which wallet locks are taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletId(String);

impl WalletId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(WalletError::InvalidWalletId(
                "wallet id must not be blank".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cased three letter currency code from the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        validation::ensure_supported_currency(code)?;
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet balance. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self> {
        validation::ensure_non_negative(amount)?;
        // -0 would otherwise survive as a distinct representation
        Ok(Self(amount.abs()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = WalletError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A strictly positive amount of money to move between wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        validation::ensure_positive(value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = WalletError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A wallet as held by the store.
///
/// `id` and `currency` are fixed at construction; only the store changes
/// `amount`, and only while holding the wallet's lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    id: WalletId,
    currency: CurrencyCode,
    amount: Balance,
}

impl Wallet {
    pub fn new(id: WalletId, currency: CurrencyCode, amount: Balance) -> Self {
        Self {
            id,
            currency,
            amount,
        }
    }

    /// Builds a wallet from raw input, checking the id, then the currency,
    /// then the opening amount.
    pub fn open(id: &str, currency: &str, amount: Decimal) -> Result<Self> {
        let id = WalletId::new(id)?;
        let currency = CurrencyCode::parse(currency)?;
        let amount = Balance::new(amount)?;
        Ok(Self::new(id, currency, amount))
    }

    pub fn id(&self) -> &WalletId {
        &self.id
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn amount(&self) -> Balance {
        self.amount
    }

    pub(crate) fn set_amount(&mut self, amount: Balance) {
        self.amount = amount;
    }
}
