//! Mobile-money payment initiation.
//!
//! [`PaymentInitiator`] sends one request to a [`PaymentGateway`] and relays
//! its answer. Failures are logged with their cause and surfaced to the
//! caller as the single, generic [`PaymentInitiationError`]. Nothing is
//! retried and no payment state is kept: the gateway is the source of truth.

use async_trait::async_trait;
use marche_sdk::client::CommerceClient;
use marche_sdk::objects::{PaymentRequest, PaymentResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Error type returned by gateway implementations.
pub type GatewayError = Box<dyn std::error::Error + Send + Sync>;

/// A remote service able to start a mobile-money payment.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Perform exactly one outbound call.
    async fn initiate_mobile_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, GatewayError>;
}

#[async_trait]
impl PaymentGateway for CommerceClient {
    async fn initiate_mobile_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, GatewayError> {
        CommerceClient::initiate_mobile_payment(self, request)
            .await
            .map_err(Into::into)
    }
}

/// The payment could not be started. Safe to show to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("payment could not be initiated, please try again")]
pub struct PaymentInitiationError;

/// Stateless wrapper around a shared [`PaymentGateway`].
#[derive(Clone)]
pub struct PaymentInitiator {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentInitiator {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Start a payment and relay the gateway's result.
    pub async fn initiate(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, PaymentInitiationError> {
        match self.gateway.initiate_mobile_payment(request).await {
            Ok(result) => {
                if result.success {
                    info!(
                        reference = %request.reference,
                        transaction_id = ?result.transaction_id,
                        "Payment initiated"
                    );
                } else {
                    warn!(
                        reference = %request.reference,
                        status = ?result.status,
                        message = ?result.message,
                        "Gateway declined payment initiation"
                    );
                }
                Ok(result)
            }
            Err(e) => {
                error!(
                    error = %e,
                    reference = %request.reference,
                    payment_system = ?request.payment_system,
                    "Failed to initiate payment"
                );
                Err(PaymentInitiationError)
            }
        }
    }
}
