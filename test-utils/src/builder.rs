use std::net::TcpListener;

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::context::{MockProvider, ProviderContext};

/// A single provider configured on the builder, started during `build()`.
enum ProviderStub {
    /// Provider answering every GET with a fixed status and body.
    Respond {
        status: u16,
        body: String,
        expected_calls: Option<u64>,
    },
    /// Provider whose address refuses connections.
    Unreachable,
}

/// Builder for creating an ordered list of mock public IP providers.
///
/// Provides a fluent interface for describing how each provider should behave. Providers
/// keep the order they were added in, which is the order the resolver will try them.
/// Call `build()` to start the mock servers and obtain their URLs.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::ProviderBuilder;
///
/// let providers = ProviderBuilder::new()
///     .with_unreachable()
///     .with_response(200, "203.0.113.7")
///     .build()
///     .await;
/// ```
#[derive(Default)]
pub struct ProviderBuilder {
    providers: Vec<ProviderStub>,
}

impl ProviderBuilder {
    /// Creates a new builder with no providers configured.
    ///
    /// # Returns
    /// - New `ProviderBuilder` instance with an empty provider list
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Adds a provider that answers every request with the given status and body.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the provider responds with
    /// - `body` - Plain-text response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_response(mut self, status: u16, body: &str) -> Self {
        self.providers.push(ProviderStub::Respond {
            status,
            body: body.to_string(),
            expected_calls: None,
        });
        self
    }

    /// Adds a provider that must receive exactly `calls` requests.
    ///
    /// The expectation is verified when the `ProviderContext` is dropped, so a test fails
    /// if the provider was contacted more or fewer times than expected. Use `0` to assert
    /// that the resolver short-circuited before reaching this provider.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the provider responds with
    /// - `body` - Plain-text response body
    /// - `calls` - Exact number of requests the provider must receive
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_response_expecting(mut self, status: u16, body: &str, calls: u64) -> Self {
        self.providers.push(ProviderStub::Respond {
            status,
            body: body.to_string(),
            expected_calls: Some(calls),
        });
        self
    }

    /// Adds a provider whose address refuses connections.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_unreachable(mut self) -> Self {
        self.providers.push(ProviderStub::Unreachable);
        self
    }

    /// Starts every configured provider and returns the running context.
    ///
    /// # Returns
    /// - `ProviderContext` - Running providers in the order they were added
    pub async fn build(self) -> ProviderContext {
        let mut providers = Vec::with_capacity(self.providers.len());

        for stub in self.providers {
            let provider = match stub {
                ProviderStub::Respond {
                    status,
                    body,
                    expected_calls,
                } => {
                    let server = MockServer::start().await;

                    let mut mock = Mock::given(method("GET"))
                        .and(path("/"))
                        .respond_with(ResponseTemplate::new(status).set_body_string(body));
                    if let Some(calls) = expected_calls {
                        mock = mock.expect(calls);
                    }
                    mock.mount(&server).await;

                    MockProvider::Server(server)
                }
                ProviderStub::Unreachable => MockProvider::Unreachable(refused_url()),
            };
            providers.push(provider);
        }

        ProviderContext::new(providers)
    }
}

/// Returns a loopback URL on a port nothing is listening on.
///
/// Binds an ephemeral port and releases it immediately so connections to it are refused.
///
/// # Panics
/// - If no ephemeral loopback port can be bound
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read ephemeral port")
        .port();
    drop(listener);

    format!("http://127.0.0.1:{}", port)
}
