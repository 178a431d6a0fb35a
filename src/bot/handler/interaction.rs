//! Interaction event handler answering slash commands.
//!
//! Every slash-command interaction receives exactly one reply, built by
//! `CommandService`. Component, autocomplete and modal interactions are not used by
//! the bot and are ignored.

use dioxus_logger::tracing;
use serenity::all::Interaction;

use crate::{
    bot::session::GatewaySession, model::command::CommandInvocation,
    service::command::CommandService,
};

/// Handles the interaction_create event.
///
/// # Arguments
/// - `session` - Gateway session used to send the reply
/// - `http_client` - HTTP client for querying IP providers
/// - `providers` - Ordered IP provider URLs
/// - `interaction` - Interaction received from Discord
pub async fn handle_interaction_create(
    session: &dyn GatewaySession,
    http_client: &reqwest::Client,
    providers: &[String],
    interaction: Interaction,
) {
    let command = match interaction {
        Interaction::Command(command) => command,
        other => {
            tracing::trace!("Ignoring non-command interaction {}", other.id());
            return;
        }
    };

    handle_command(
        session,
        http_client,
        providers,
        &CommandInvocation::from(&command),
    )
    .await;
}

/// Answers a slash-command invocation with exactly one reply.
///
/// Delivery failures are logged only; there is no retry or fallback channel.
pub async fn handle_command(
    session: &dyn GatewaySession,
    http_client: &reqwest::Client,
    providers: &[String],
    invocation: &CommandInvocation,
) {
    tracing::info!(
        "{} ({}) invoked /{} in {}",
        invocation.user_name,
        invocation.user_id,
        invocation.name,
        invocation
            .guild_id
            .map(|id| format!("guild {}", id))
            .unwrap_or_else(|| "direct messages".to_string())
    );

    let reply = CommandService::new(http_client, providers)
        .reply(invocation)
        .await;

    if let Err(e) = session
        .respond_to_interaction(&invocation.interaction, &reply)
        .await
    {
        tracing::error!(
            "Failed to respond to /{} interaction {}: {}",
            invocation.name,
            invocation.interaction.id,
            e
        );
    }
}
