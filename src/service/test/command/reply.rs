use super::*;

/// Tests replying to `get-ip` with the resolved address.
///
/// Expected: Public reply containing the provider body verbatim
#[tokio::test]
async fn replies_with_resolved_ip() {
    let providers = ProviderBuilder::new()
        .with_unreachable()
        .with_response(200, "203.0.113.7")
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let reply = CommandService::new(&http_client, &urls)
        .reply(&test_invocation("get-ip"))
        .await;

    assert_eq!(reply, InteractionReply::public("203.0.113.7"));
}

/// Tests replying with the fixed failure message when every provider fails.
///
/// Expected: Public reply with IP_LOOKUP_FAILED_MESSAGE, never an empty message
#[tokio::test]
async fn replies_with_failure_message_when_all_providers_fail() {
    let providers = ProviderBuilder::new()
        .with_response(500, "")
        .with_response(500, "")
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let reply = CommandService::new(&http_client, &urls)
        .reply(&test_invocation("get-ip"))
        .await;

    assert_eq!(reply.content, IP_LOOKUP_FAILED_MESSAGE);
    assert!(!reply.content.is_empty());
    assert!(!reply.ephemeral);
}

/// Tests answering an unknown command without resolving the IP.
///
/// Expected: Ephemeral "Unsupported command" reply and no provider contacted
#[tokio::test]
async fn replies_to_unsupported_command_without_lookup() {
    let providers = ProviderBuilder::new()
        .with_response_expecting(200, "203.0.113.7", 0)
        .build()
        .await;
    let urls = providers.urls();
    let http_client = create_test_http_client();

    let reply = CommandService::new(&http_client, &urls)
        .reply(&test_invocation("get-time"))
        .await;

    assert_eq!(
        reply,
        InteractionReply::ephemeral("Unsupported command: get-time")
    );
}
