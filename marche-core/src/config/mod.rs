//! Configuration types for the storefront backend.
//!
//! These types represent the validated runtime configuration. Loading and
//! parsing the TOML file is handled by the server crate.

mod commerce_api;
mod server;

pub use commerce_api::CommerceApiConfig;
pub use server::ServerConfig;
