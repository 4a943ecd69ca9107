use crate::domain::guard::WalletGuard;
use crate::domain::ports::WalletStore;
use crate::domain::wallet::WalletId;
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Locks every distinct id in `ids`, always in ascending id order.
///
/// Taking locks in one global order is what keeps two callers touching the
/// same wallets (in whatever request order) from deadlocking. A missing wallet
/// does not stop the remaining ids from being locked, so callers can decide
/// which `NotFound` to report.
pub async fn lock_in_order<'a, I>(
    store: &dyn WalletStore,
    ids: I,
) -> BTreeMap<WalletId, Result<WalletGuard>>
where
    I: IntoIterator<Item = &'a WalletId>,
{
    let ordered: BTreeSet<&WalletId> = ids.into_iter().collect();
    let mut guards = BTreeMap::new();
    for id in ordered {
        let guard = store.lock(id).await;
        guards.insert(id.clone(), guard);
    }
    guards
}
