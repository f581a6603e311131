//! Commerce API connection settings.

use marche_sdk::client::CommerceClient;
use std::time::Duration;
use url::Url;

/// Where and how to reach the remote commerce API.
#[derive(Debug, Clone)]
pub struct CommerceApiConfig {
    /// API root, e.g. `https://api.example.com/api/v1`.
    pub base_url: Url,
    /// Transport timeout applied to every outbound request.
    /// `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl CommerceApiConfig {
    /// Build the HTTP client described by this configuration.
    pub fn build_client(&self) -> Result<CommerceClient, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(CommerceClient::new(self.base_url.clone()).with_http_client(builder.build()?))
    }
}
