use dioxus_logger::tracing;
use reqwest::StatusCode;

use crate::{error::provider::ProviderError, model::ip::IpLookup};

/// Resolves the host's public IP address from an ordered list of providers.
///
/// Providers are plain HTTP endpoints that answer a GET with the caller's public IP as
/// text. They are tried strictly in order, one at a time, and the first usable answer
/// wins. The service holds no state between resolutions.
pub struct PublicIpService<'a> {
    pub http_client: &'a reqwest::Client,
    pub providers: &'a [String],
}

impl<'a> PublicIpService<'a> {
    pub fn new(http_client: &'a reqwest::Client, providers: &'a [String]) -> Self {
        Self {
            http_client,
            providers,
        }
    }

    /// Queries each provider in order and returns the first successful response body.
    ///
    /// A provider succeeds when it answers 200 OK with a non-empty body; the body is
    /// returned verbatim and the remaining providers are not contacted. Any other outcome
    /// (request failure, other status, unreadable or empty body) is logged and the next
    /// provider is tried. There are no retries.
    ///
    /// # Returns
    /// - `IpLookup::Found(body)` - First successful provider response
    /// - `IpLookup::NotFound` - Every provider failed
    pub async fn resolve(&self) -> IpLookup {
        for provider in self.providers {
            match self.fetch(provider).await {
                Ok(ip) => {
                    tracing::debug!("Resolved public IP from {}", provider);
                    return IpLookup::Found(ip);
                }
                Err(e) => {
                    tracing::warn!("Error getting IP from {}: {}", provider, e);
                }
            }
        }

        tracing::error!(
            "Failed to resolve public IP from all {} providers",
            self.providers.len()
        );

        IpLookup::NotFound
    }

    /// Issues a single GET to `provider` and extracts the IP text.
    async fn fetch(&self, provider: &str) -> Result<String, ProviderError> {
        let response = self
            .http_client
            .get(provider)
            .send()
            .await
            .map_err(ProviderError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await.map_err(ProviderError::Body)?;
        if body.trim().is_empty() {
            return Err(ProviderError::EmptyBody);
        }

        Ok(body)
    }
}
