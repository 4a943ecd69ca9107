//! Storage adapters implementing the `WalletStore` port.

pub mod in_memory;
