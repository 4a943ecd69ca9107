//! JSON bodies exchanged with HTTP clients.

use crate::domain::wallet::Wallet;
use crate::error::WalletError;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /wallet/{id}` and the `data` of `GET /wallet/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletModel {
    pub currency_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<&Wallet> for WalletModel {
    fn from(wallet: &Wallet) -> Self {
        Self {
            currency_code: wallet.currency().to_string(),
            amount: wallet.amount().value(),
        }
    }
}

/// Body of `PATCH /wallet/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWalletModel {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Body of `POST /wallet/{id}/transfer`; the path id is the source wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferModel {
    pub target_wallet_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Envelope of every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseModel<T> {
    pub code_ex: u32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseModel<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self {
            code_ex: ApiStatus::Ok.code(),
            message: "OK".to_string(),
            data,
        }
    }
}

/// Outcome codes reported in `codeEx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Ok,
    BadRequest,
    NotFound,
    WalletAlreadyExists,
    InvalidAmount,
    InvalidCurrency,
    InvalidWalletId,
    InsufficientMoney,
    NonEmptyWalletDeletion,
}

impl ApiStatus {
    pub fn code(self) -> u32 {
        match self {
            ApiStatus::Ok => 200,
            ApiStatus::BadRequest => 400,
            ApiStatus::NotFound => 404,
            ApiStatus::WalletAlreadyExists => 4001,
            ApiStatus::InvalidAmount => 4002,
            ApiStatus::InvalidCurrency => 4003,
            ApiStatus::InvalidWalletId => 4004,
            ApiStatus::InsufficientMoney => 4005,
            ApiStatus::NonEmptyWalletDeletion => 4006,
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            ApiStatus::Ok => StatusCode::OK,
            ApiStatus::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<&WalletError> for ApiStatus {
    fn from(error: &WalletError) -> Self {
        match error {
            WalletError::AlreadyExists(_) => ApiStatus::WalletAlreadyExists,
            WalletError::NotFound(_) => ApiStatus::NotFound,
            WalletError::InvalidAmount(_) => ApiStatus::InvalidAmount,
            WalletError::InvalidCurrency(_) => ApiStatus::InvalidCurrency,
            WalletError::InvalidWalletId(_) => ApiStatus::InvalidWalletId,
            WalletError::InsufficientFunds { .. } => ApiStatus::InsufficientMoney,
            WalletError::NonEmptyWallet(_) => ApiStatus::NonEmptyWalletDeletion,
            WalletError::MalformedInput(_) => ApiStatus::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet::WalletId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wallet_model_uses_json_numbers() {
        let model = WalletModel {
            currency_code: "USD".to_string(),
            amount: dec!(123.45),
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json, serde_json::json!({"currencyCode": "USD", "amount": 123.45}));

        let parsed: WalletModel =
            serde_json::from_str(r#"{"currencyCode": "EUR", "amount": 0.5}"#).unwrap();
        assert_eq!(parsed.amount, dec!(0.5));
    }

    #[test]
    fn test_transfer_model_field_names() {
        let parsed: TransferModel =
            serde_json::from_str(r#"{"targetWalletId": "456", "amount": 10.5}"#).unwrap();
        assert_eq!(parsed.target_wallet_id, "456");
        assert_eq!(parsed.amount, dec!(10.5));
    }

    #[test]
    fn test_response_omits_missing_data() {
        let json = serde_json::to_string(&ResponseModel::<WalletModel>::ok(None)).unwrap();
        assert_eq!(json, r#"{"codeEx":200,"message":"OK"}"#);
    }

    #[test]
    fn test_error_status_mapping() {
        let not_found = WalletError::NotFound(WalletId::new("1").unwrap());
        let status = ApiStatus::from(&not_found);
        assert_eq!(status.code(), 404);
        assert_eq!(status.http_status(), StatusCode::NOT_FOUND);

        let malformed = WalletError::MalformedInput("bad".to_string());
        assert_eq!(ApiStatus::from(&malformed).code(), 400);

        let broke = WalletError::InsufficientFunds {
            wallet: WalletId::new("1").unwrap(),
            balance: dec!(1),
            requested: dec!(2),
        };
        let status = ApiStatus::from(&broke);
        assert_eq!(status.code(), 4005);
        assert_eq!(status.http_status(), StatusCode::BAD_REQUEST);
    }
}
