pub mod boutique;
pub mod payment;

pub use boutique::{BoutiqueConfig, BoutiqueLink, BoutiqueNotFound, ResolvedBoutique, Theme};
pub use payment::{
    InvalidPaymentRequest, PaymentRequest, PaymentResult, PaymentSystem, generate_reference,
};
