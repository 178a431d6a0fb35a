use wiremock::MockServer;

/// A running mock provider.
pub enum MockProvider {
    /// Mock HTTP server answering with a configured response.
    Server(MockServer),
    /// Address refusing connections.
    Unreachable(String),
}

impl MockProvider {
    /// Base URL the resolver should request.
    pub fn url(&self) -> String {
        match self {
            Self::Server(server) => server.uri(),
            Self::Unreachable(url) => url.clone(),
        }
    }

    /// Number of requests this provider has received.
    ///
    /// Unreachable providers never record requests and always report `0`.
    pub async fn request_count(&self) -> usize {
        match self {
            Self::Server(server) => server
                .received_requests()
                .await
                .map(|requests| requests.len())
                .unwrap_or_default(),
            Self::Unreachable(_) => 0,
        }
    }
}

/// Test context holding the running mock providers.
///
/// Keeps every mock server alive for the lifetime of the context. Dropping the context
/// shuts the servers down and verifies any call-count expectations set on the builder.
pub struct ProviderContext {
    /// Providers in fallback order.
    pub providers: Vec<MockProvider>,
}

impl ProviderContext {
    /// Creates a context from already running providers.
    ///
    /// # Arguments
    /// - `providers` - Running providers in fallback order
    ///
    /// # Returns
    /// - New `ProviderContext` owning the providers
    pub fn new(providers: Vec<MockProvider>) -> Self {
        Self { providers }
    }

    /// Ordered provider URLs to hand to the resolver.
    ///
    /// # Returns
    /// - `Vec<String>` - One URL per provider, in the order they were added
    pub fn urls(&self) -> Vec<String> {
        self.providers.iter().map(MockProvider::url).collect()
    }

    /// Number of requests received by the provider at `index`.
    ///
    /// # Panics
    /// - If `index` is out of range
    pub async fn request_count(&self, index: usize) -> usize {
        self.providers[index].request_count().await
    }
}
