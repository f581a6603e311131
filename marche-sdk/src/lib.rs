//! Shared types for the Marché241 storefront backend.
//!
//! `objects` holds the wire types exchanged with storefront clients and the
//! remote commerce API. The HTTP client lives behind the `client` feature.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
