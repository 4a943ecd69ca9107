//! Application layer containing the wallet use cases.
//!
//! `WalletService` covers single-wallet operations and consistent reads;
//! `TransferEngine` moves money between two wallets. Both act on wallets only
//! through the `WalletStore` port.

pub mod locking;
pub mod transfer;
pub mod wallets;
