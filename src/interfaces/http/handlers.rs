use super::AppState;
use super::models::{
    ApiStatus, ResponseModel, TransferModel, UpdateWalletModel, WalletModel,
};
use crate::domain::wallet::WalletId;
use crate::error::WalletError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

/// A core failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub WalletError);

impl From<WalletError> for ApiError {
    fn from(error: WalletError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(WalletError::MalformedInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = ApiStatus::from(&self.0);
        let body = ResponseModel::<()> {
            code_ex: status.code(),
            message: self.0.to_string(),
            data: None,
        };
        (status.http_status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ResponseModel<T>>, ApiError>;

/// `POST /wallet/{id}`
pub async fn create_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WalletModel>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    state
        .wallets
        .create_wallet(&id, &body.currency_code, body.amount)
        .await?;
    Ok(Json(ResponseModel::ok(None)))
}

/// `GET /wallet/{id}`
pub async fn get_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<WalletModel> {
    let id = WalletId::new(id)?;
    let wallet = state.wallets.wallet(&id).await?;
    Ok(Json(ResponseModel::ok(Some(WalletModel::from(&wallet)))))
}

/// `PATCH /wallet/{id}`
pub async fn update_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateWalletModel>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let id = WalletId::new(id)?;
    state.wallets.update_wallet(&id, body.amount).await?;
    Ok(Json(ResponseModel::ok(None)))
}

/// `DELETE /wallet/{id}`
pub async fn delete_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = WalletId::new(id)?;
    state.wallets.delete_wallet(&id).await?;
    Ok(Json(ResponseModel::ok(None)))
}

/// `POST /wallet/{id}/transfer`
pub async fn transfer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TransferModel>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let source = WalletId::new(id)?;
    let target = WalletId::new(body.target_wallet_id)?;
    state
        .transfers
        .transfer(&source, &target, body.amount)
        .await?;
    Ok(Json(ResponseModel::ok(None)))
}
