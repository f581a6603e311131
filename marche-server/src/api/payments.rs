use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use marche_sdk::objects::PaymentRequest;

use super::ApiError;
use crate::state::AppState;

/// `POST /paiements/mobile` — start a mobile-money payment.
///
/// Bodies that do not decode are rejected like any other invalid request.
/// A missing reference is generated. The request is validated before the
/// single outbound call to the commerce API.
pub(super) async fn initiate_mobile_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(mut request) = payload.map_err(ApiError::InvalidBody)?;
    request.ensure_reference();
    request.validate().map_err(ApiError::InvalidPayment)?;

    let result = state
        .payments
        .initiate(&request)
        .await
        .map_err(ApiError::PaymentInitiation)?;

    Ok(Json(result))
}
