use rust_decimal_macros::dec;
use transfer_manager::error::WalletError;

mod common;
use common::{harness, id};

#[tokio::test]
async fn test_transfer_between_usd_wallets() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50)), ("456", "USD", dec!(0.50))])
        .await;

    h.transfers
        .transfer(&id("123"), &id("456"), dec!(10.50))
        .await
        .unwrap();

    assert_eq!(h.balance("123").await, dec!(90.00));
    assert_eq!(h.balance("456").await, dec!(11.00));
}

#[tokio::test]
async fn test_overdraw_by_one_cent_is_rejected() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50)), ("456", "USD", dec!(0.50))])
        .await;

    let err = h
        .transfers
        .transfer(&id("123"), &id("456"), dec!(100.51))
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::InsufficientFunds { .. }));
    assert_eq!(h.balance("123").await, dec!(100.50));
    assert_eq!(h.balance("456").await, dec!(0.50));
}

#[tokio::test]
async fn test_self_transfer_rejected_regardless_of_balance() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50))]).await;

    for amount in [dec!(1), dec!(100.50), dec!(1000)] {
        assert!(matches!(
            h.transfers.transfer(&id("123"), &id("123"), amount).await,
            Err(WalletError::InvalidWalletId(_))
        ));
    }
    assert_eq!(h.balance("123").await, dec!(100.50));
}

#[tokio::test]
async fn test_transfer_to_missing_wallet_is_not_found() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50))]).await;

    assert!(matches!(
        h.transfers.transfer(&id("123"), &id("456"), dec!(1)).await,
        Err(WalletError::NotFound(_))
    ));
    assert!(matches!(
        h.transfers.transfer(&id("456"), &id("123"), dec!(1)).await,
        Err(WalletError::NotFound(_))
    ));
    assert!(matches!(
        h.transfers.transfer(&id("777"), &id("888"), dec!(1)).await,
        Err(WalletError::NotFound(_))
    ));
    assert_eq!(h.balance("123").await, dec!(100.50));
}

#[tokio::test]
async fn test_transfer_between_currencies_rejected() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50)), ("456", "EUR", dec!(0.50))])
        .await;

    assert!(matches!(
        h.transfers.transfer(&id("123"), &id("456"), dec!(1)).await,
        Err(WalletError::InvalidCurrency(_))
    ));
}

#[tokio::test]
async fn test_negative_transfer_amount_rejected() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(100.50)), ("456", "USD", dec!(200.50))])
        .await;

    assert!(matches!(
        h.transfers.transfer(&id("123"), &id("456"), dec!(-1)).await,
        Err(WalletError::InvalidAmount(_))
    ));
    assert_eq!(h.balance("123").await, dec!(100.50));
    assert_eq!(h.balance("456").await, dec!(200.50));
}

#[tokio::test]
async fn test_drained_wallet_can_be_deleted_and_id_reused() {
    let h = harness();
    h.seed(&[("123", "USD", dec!(5)), ("456", "USD", dec!(0))])
        .await;

    assert!(matches!(
        h.wallets.delete_wallet(&id("123")).await,
        Err(WalletError::NonEmptyWallet(_))
    ));
    assert_eq!(h.balance("123").await, dec!(5));

    h.transfers
        .transfer(&id("123"), &id("456"), dec!(5))
        .await
        .unwrap();
    h.wallets.delete_wallet(&id("123")).await.unwrap();

    assert!(matches!(
        h.transfers.transfer(&id("456"), &id("123"), dec!(1)).await,
        Err(WalletError::NotFound(_))
    ));

    h.wallets
        .create_wallet("123", "RUB", dec!(3))
        .await
        .unwrap();
    assert_eq!(h.balance("123").await, dec!(3));
}

#[tokio::test]
async fn test_sequence_of_operations_never_goes_negative() {
    let h = harness();
    h.seed(&[("a", "USD", dec!(10)), ("b", "USD", dec!(0)), ("c", "USD", dec!(3))])
        .await;

    let moves = [
        ("a", "b", dec!(4)),
        ("b", "c", dec!(5)),
        ("c", "a", dec!(3)),
        ("a", "c", dec!(9.01)),
        ("b", "a", dec!(4)),
        ("c", "b", dec!(0.5)),
    ];
    for (from, to, amount) in moves {
        let _ = h.transfers.transfer(&id(from), &id(to), amount).await;
        for wallet in ["a", "b", "c"] {
            assert!(h.balance(wallet).await >= dec!(0));
        }
    }

    let total = h.balance("a").await + h.balance("b").await + h.balance("c").await;
    assert_eq!(total, dec!(13));
}
