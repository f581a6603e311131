//! TOML file configuration structures.
//!
//! These structs directly map to the `marche-config.toml` file format.

use marche_sdk::objects::Theme;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub commerce_api: CommerceApiConfig,
    /// Boutique table. When empty, the built-in boutiques are served.
    #[serde(default)]
    pub boutiques: Vec<BoutiqueEntry>,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Commerce API section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceApiConfig {
    /// API root (e.g., "https://api.marche241.ga/api/v1").
    pub base_url: Url,
    /// Optional transport timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// One `[[boutiques]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoutiqueEntry {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub theme: Theme,
}
