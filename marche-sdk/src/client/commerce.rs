//! Commerce API client (storefront backend → commerce API).

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::payment::{PaymentRequest, PaymentResult};

/// Path of the mobile-money initiation endpoint, relative to the API base.
pub const MOBILE_PAYMENT_PATH: &str = "paiements/mobile";

/// Typed HTTP client for the remote commerce API.
#[derive(Debug, Clone)]
pub struct CommerceClient {
    http: Client,
    base_url: Url,
}

impl CommerceClient {
    /// Create a new `CommerceClient`.
    ///
    /// `base_url` may carry a path prefix (e.g. `https://api.example.com/api/v1`);
    /// endpoint paths are resolved below it.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url: with_trailing_slash(base_url),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST paiements/mobile` – start a mobile-money payment.
    ///
    /// Exactly one request is sent; nothing is retried.
    pub async fn initiate_mobile_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, ClientError> {
        let url = self.base_url.join(MOBILE_PAYMENT_PATH)?;

        let resp = self.http.post(url).json(request).send().await?;

        parse_response(resp).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = CommerceClient::new(Url::parse("https://api.example.com/api/v1").unwrap());
        let url = client.base_url().join(MOBILE_PAYMENT_PATH).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/paiements/mobile");
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let client = CommerceClient::new(Url::parse("https://api.example.com").unwrap());
        let url = client.base_url().join(MOBILE_PAYMENT_PATH).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/paiements/mobile");
    }

    #[test]
    fn test_existing_trailing_slash_untouched() {
        let client = CommerceClient::new(Url::parse("https://api.example.com/v2/").unwrap());
        assert_eq!(client.base_url().path(), "/v2/");
    }
}
