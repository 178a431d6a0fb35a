use super::*;

/// Tests that the first successful provider short-circuits the rest.
///
/// The first provider answers 200 with an address; the second must never be contacted.
///
/// Expected: Found("198.51.100.2") and no request to the second provider
#[tokio::test]
async fn returns_first_provider_without_contacting_later_ones() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(200, "198.51.100.2", 1)
        .with_response_expecting(200, "203.0.113.9", 0)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("198.51.100.2".to_string()));
    assert_eq!(providers.request_count(1).await, 0);
}

/// Tests falling back past a provider that refuses connections.
///
/// Expected: Found("203.0.113.7") from the second provider
#[tokio::test]
async fn falls_back_after_connection_refused() {
    let providers = ProviderBuilder::new()
        .with_unreachable()
        .with_response_expecting(200, "203.0.113.7", 1)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("203.0.113.7".to_string()));
}

/// Tests that every failing provider before the first success is tried exactly once.
///
/// Providers 1 and 2 fail with error statuses, provider 3 succeeds and provider 4
/// must not be reached.
///
/// Expected: Found("192.0.2.10") with providers 1..3 contacted once each
#[tokio::test]
async fn tries_failing_providers_in_order_until_success() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(500, "internal error", 1)
        .with_response_expecting(404, "not found", 1)
        .with_response_expecting(200, "192.0.2.10", 1)
        .with_response_expecting(200, "192.0.2.99", 0)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("192.0.2.10".to_string()));
    for index in 0..3 {
        assert_eq!(providers.request_count(index).await, 1);
    }
    assert_eq!(providers.request_count(3).await, 0);
}

/// Tests total failure when every provider answers 500.
///
/// Expected: NotFound
#[tokio::test]
async fn returns_not_found_when_all_providers_fail() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(500, "", 1)
        .with_response_expecting(500, "", 1)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::NotFound);
}

/// Tests that only 200 OK counts as success, not every 2xx status.
///
/// Expected: Found from the second provider after a 204 from the first
#[tokio::test]
async fn treats_other_success_statuses_as_failure() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(204, "", 1)
        .with_response_expecting(200, "198.51.100.4", 1)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("198.51.100.4".to_string()));
}

/// Tests that a 200 response with an empty or blank body is not treated as an answer.
///
/// Expected: Found from the third provider; NotFound is never conflated with ""
#[tokio::test]
async fn skips_providers_with_empty_bodies() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(200, "", 1)
        .with_response_expecting(200, " \n", 1)
        .with_response_expecting(200, "198.51.100.5", 1)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("198.51.100.5".to_string()));
}

/// Tests that the provider body is returned exactly as received.
///
/// Expected: Found with the trailing newline preserved
#[tokio::test]
async fn returns_body_verbatim() {
    let providers = ProviderBuilder::new()
        .with_response(200, "2001:db8::1\n")
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &urls).resolve().await;

    assert_eq!(result, IpLookup::Found("2001:db8::1\n".to_string()));
}

/// Tests that repeated resolutions against the same responses agree.
///
/// Expected: Same result twice, with the first provider contacted on each resolution
#[tokio::test]
async fn resolves_idempotently() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(503, "", 2)
        .with_response_expecting(200, "203.0.113.7", 2)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();
    let service = PublicIpService::new(&http_client, &urls);

    let first = service.resolve().await;
    let second = service.resolve().await;

    assert_eq!(first, IpLookup::Found("203.0.113.7".to_string()));
    assert_eq!(first, second);
}

/// Tests resolving with no providers configured.
///
/// Expected: NotFound without any request
#[tokio::test]
async fn returns_not_found_without_providers() {
    let http_client = create_test_http_client();

    let result = PublicIpService::new(&http_client, &[]).resolve().await;

    assert_eq!(result, IpLookup::NotFound);
}
