//! Application state shared across all request handlers.

use marche_core::payments::{PaymentGateway, PaymentInitiator};
use marche_core::registry::BoutiqueRegistry;
use marche_core::resolver::BoutiqueResolver;
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
/// Nothing in it is mutated after startup, so no locks are needed.
#[derive(Clone)]
pub struct AppState {
    /// Boutique lookups over the immutable registry.
    pub resolver: BoutiqueResolver,
    /// Mobile-money payment initiation.
    pub payments: PaymentInitiator,
}

impl AppState {
    /// Create a new AppState from the registry and the payment gateway.
    pub fn new(registry: BoutiqueRegistry, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            resolver: BoutiqueResolver::new(Arc::new(registry)),
            payments: PaymentInitiator::new(gateway),
        }
    }
}
