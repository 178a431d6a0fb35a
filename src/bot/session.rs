//! Outbound operations on the Discord gateway session.
//!
//! Event handlers never call Serenity's HTTP client directly. They go through
//! `GatewaySession`, which `SerenitySession` implements for a live connection and a
//! recording fake implements in tests.

use std::sync::Arc;

use serenity::all::{ApplicationId, GuildId, Http};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::command::{CommandDescriptor, InteractionRef, InteractionReply},
};

/// Operations the bot performs against Discord in response to gateway events.
#[async_trait]
pub trait GatewaySession: Send + Sync {
    /// Registers `command` as a slash command scoped to `guild_id`.
    async fn register_guild_command(
        &self,
        application_id: ApplicationId,
        guild_id: GuildId,
        command: &CommandDescriptor,
    ) -> Result<(), AppError>;

    /// Answers an interaction with a text message.
    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        reply: &InteractionReply,
    ) -> Result<(), AppError>;
}

/// `GatewaySession` backed by Serenity's Discord HTTP client.
pub struct SerenitySession {
    http: Arc<Http>,
}

impl SerenitySession {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GatewaySession for SerenitySession {
    async fn register_guild_command(
        &self,
        application_id: ApplicationId,
        guild_id: GuildId,
        command: &CommandDescriptor,
    ) -> Result<(), AppError> {
        // Guild command routes are keyed by the application id stored on the client
        self.http.set_application_id(application_id);

        guild_id
            .create_command(self.http.as_ref(), command.to_builder())
            .await?;

        Ok(())
    }

    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        reply: &InteractionReply,
    ) -> Result<(), AppError> {
        self.http
            .create_interaction_response(
                interaction.id,
                &interaction.token,
                &reply.to_response(),
                Vec::new(),
            )
            .await?;

        Ok(())
    }
}
