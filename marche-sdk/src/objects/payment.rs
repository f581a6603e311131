//! Mobile-money payment initiation types.
//!
//! These are sent as-is to the commerce API `paiements/mobile` endpoint,
//! so the field names follow its JSON contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix of every reference generated by [`generate_reference`].
pub const REFERENCE_PREFIX: &str = "M241-";

/// Mobile-money operators accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSystem {
    AirtelMoney,
    MoovMoney,
}

/// A request to start a mobile-money payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub email: String,
    /// Phone number of the paying wallet.
    pub msisdn: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Caller-chosen reference, unique per attempt.
    #[serde(default)]
    pub reference: String,
    pub payment_system: PaymentSystem,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
}

/// The gateway's answer to a [`PaymentRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Reasons a [`PaymentRequest`] is rejected before reaching the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPaymentRequest {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("reference must not be empty")]
    EmptyReference,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("msisdn must contain 8 to 15 digits")]
    InvalidMsisdn,
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

impl PaymentRequest {
    /// Check the request before any outbound call is made.
    pub fn validate(&self) -> Result<(), InvalidPaymentRequest> {
        if self.amount <= Decimal::ZERO {
            return Err(InvalidPaymentRequest::NonPositiveAmount);
        }
        if self.reference.trim().is_empty() {
            return Err(InvalidPaymentRequest::EmptyReference);
        }
        if !is_plausible_email(&self.email) {
            return Err(InvalidPaymentRequest::InvalidEmail);
        }
        if !is_valid_msisdn(&self.msisdn) {
            return Err(InvalidPaymentRequest::InvalidMsisdn);
        }
        if self.first_name.trim().is_empty() {
            return Err(InvalidPaymentRequest::MissingField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(InvalidPaymentRequest::MissingField("last_name"));
        }
        Ok(())
    }

    /// Fill an empty reference with a freshly generated one.
    pub fn ensure_reference(&mut self) {
        if self.reference.trim().is_empty() {
            self.reference = generate_reference();
        }
    }
}

/// Generate a fresh, unique payment reference.
pub fn generate_reference() -> String {
    format!("{REFERENCE_PREFIX}{}", uuid::Uuid::now_v7().simple())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn is_valid_msisdn(msisdn: &str) -> bool {
    let digits = msisdn.strip_prefix('+').unwrap_or(msisdn);
    (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
