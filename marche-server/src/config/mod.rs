//! Configuration module for marche-server.
//!
//! Handles loading configuration from TOML files and CLI/environment
//! overrides, then converts it into the validated runtime types of
//! `marche-core`.

pub mod file;

use crate::config::file::{BoutiqueEntry, FileConfig};
use marche_core::config::{CommerceApiConfig, ServerConfig};
use marche_core::registry::{BoutiqueRegistry, RegistryError};
use marche_sdk::objects::BoutiqueConfig;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("invalid boutique table: {0}")]
    RegistryError(#[from] RegistryError),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub commerce_api: CommerceApiConfig,
    pub registry: BoutiqueRegistry,
}

/// Command-line overrides applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub listen: Option<SocketAddr>,
    pub api_url: Option<Url>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Build the boutique registry (built-in table if none is declared)
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(listen) = self.overrides.listen {
            file_config.server.listen = listen;
        }
        if let Some(api_url) = &self.overrides.api_url {
            file_config.commerce_api.base_url = api_url.clone();
        }

        self.validate(&file_config)?;

        self.build_loaded_config(file_config)
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let base_url = &config.commerce_api.base_url;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "commerce_api.base_url must be http(s), got {base_url}"
            )));
        }
        if config.commerce_api.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "commerce_api.timeout_secs must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    fn build_loaded_config(&self, file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        let registry = if file_config.boutiques.is_empty() {
            tracing::info!("No boutiques configured, serving the built-in table");
            BoutiqueRegistry::builtin()
        } else {
            BoutiqueRegistry::new(file_config.boutiques.into_iter().map(convert_boutique))?
        };

        Ok(LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            commerce_api: CommerceApiConfig {
                base_url: file_config.commerce_api.base_url,
                timeout: file_config.commerce_api.timeout_secs.map(Duration::from_secs),
            },
            registry,
        })
    }
}

fn convert_boutique(b: BoutiqueEntry) -> (String, BoutiqueConfig) {
    (
        b.slug,
        BoutiqueConfig {
            name: b.name,
            description: b.description,
            theme: b.theme,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
[server]
listen = "127.0.0.1:3000"

[commerce_api]
base_url = "https://api.example.com/api/v1"
"#;

    fn loader(overrides: Overrides) -> ConfigLoader {
        ConfigLoader::new("unused.toml", overrides)
    }

    #[test]
    fn test_empty_boutique_table_falls_back_to_builtin() {
        let loaded = loader(Overrides::default()).load_str(BASE).unwrap();
        let slugs: Vec<&str> = loaded.registry.slugs().collect();
        assert_eq!(slugs, vec!["marche_241", "boutique_de_joline"]);
        assert_eq!(loaded.commerce_api.timeout, None);
    }

    #[test]
    fn test_declared_boutiques_replace_builtin() {
        let content = format!(
            r##"{BASE}
[[boutiques]]
slug = "chez_ada"
name = "Chez Ada"
description = "Épicerie fine"

[boutiques.theme]
primary = "#111111"
secondary = "#222222"
accent = "#333333"
"##
        );
        let loaded = loader(Overrides::default()).load_str(&content).unwrap();
        assert_eq!(loaded.registry.len(), 1);
        assert!(loaded.registry.contains("chez_ada"));
        assert!(!loaded.registry.contains("marche_241"));
    }

    #[test]
    fn test_invalid_boutique_is_rejected() {
        let content = format!(
            r##"{BASE}
[[boutiques]]
slug = "chez_ada"
name = "Chez Ada"
description = "Épicerie fine"

[boutiques.theme]
primary = "black"
secondary = "#222222"
accent = "#333333"
"##
        );
        let result = loader(Overrides::default()).load_str(&content);
        assert!(matches!(
            result,
            Err(ConfigError::RegistryError(RegistryError::InvalidColor { .. }))
        ));
    }

    #[test]
    fn test_overrides_are_applied() {
        let overrides = Overrides {
            listen: Some("0.0.0.0:9090".parse().unwrap()),
            api_url: Some(Url::parse("http://localhost:4000/api").unwrap()),
        };
        let loaded = loader(overrides).load_str(BASE).unwrap();
        assert_eq!(loaded.server.listen.port(), 9090);
        assert_eq!(loaded.commerce_api.base_url.as_str(), "http://localhost:4000/api");
    }

    #[test]
    fn test_non_http_base_url_is_rejected() {
        let overrides = Overrides {
            listen: None,
            api_url: Some(Url::parse("ftp://files.example.com").unwrap()),
        };
        let result = loader(overrides).load_str(BASE);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let content = BASE.replace(
            "base_url = \"https://api.example.com/api/v1\"",
            "base_url = \"https://api.example.com/api/v1\"\ntimeout_secs = 0",
        );
        let result = loader(Overrides::default()).load_str(&content);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("marche-config-{}.toml", std::process::id()));
        std::fs::write(&path, BASE).unwrap();

        let loaded = ConfigLoader::new(&path, Overrides::default()).load();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.unwrap().server.listen.port(), 3000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = loader(Overrides::default()).load();
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
