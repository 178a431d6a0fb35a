//! HTTP client factory for tests that talk to mock providers.

/// Creates an HTTP client for tests.
///
/// Bypasses any proxy configured in the environment so requests reach the local mock
/// providers started by `ProviderBuilder`.
///
/// # Panics
/// - If the TLS backend cannot be initialized
pub fn create_test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client")
}
