//! Storefront API handlers.
//!
//! # Endpoints
//!
//! - `GET  /boutiques`        – list known boutiques
//! - `GET  /boutiques/{slug}` – resolve a boutique configuration
//! - `POST /paiements/mobile` – start a mobile-money payment

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use marche_core::payments::PaymentInitiationError;
use marche_sdk::objects::{BoutiqueNotFound, InvalidPaymentRequest};
use serde::Serialize;

use crate::state::AppState;

mod boutiques;
mod payments;

/// Build the storefront API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/boutiques", get(boutiques::list_boutiques))
        .route("/boutiques/{slug}", get(boutiques::get_boutique))
        .route(
            "/paiements/mobile",
            post(payments::initiate_mobile_payment),
        )
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

/// Errors that can occur in API handlers.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// The slug is not in the registry.
    BoutiqueNotFound(BoutiqueNotFound),
    /// The payment body is not valid JSON or does not match `PaymentRequest`.
    InvalidBody(JsonRejection),
    /// The payment request failed validation.
    InvalidPayment(InvalidPaymentRequest),
    /// The commerce API could not start the payment.
    PaymentInitiation(PaymentInitiationError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BoutiqueNotFound(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            ApiError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            ApiError::InvalidPayment(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response(),
            ApiError::PaymentInitiation(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
