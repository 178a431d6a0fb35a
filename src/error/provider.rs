use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single public IP provider.
///
/// These errors never leave the resolver: each one is logged and the resolver moves on
/// to the next provider in the list.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent (DNS failure, connection refused, TLS error, etc.).
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The provider answered with a status other than 200 OK.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The provider answered 200 OK with an empty or whitespace-only body.
    #[error("empty or blank response body")]
    EmptyBody,
}
