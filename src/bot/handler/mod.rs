use serenity::all::{ApplicationId, Context, EventHandler, Guild, Interaction, Ready};
use serenity::async_trait;

use crate::{bot::session::SerenitySession, model::command::GET_IP_COMMAND};

pub mod guild;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// HTTP client used to query the IP providers
    pub http_client: reqwest::Client,
    /// IP provider URLs in fallback order
    pub ip_providers: Vec<String>,
    /// Application id the guild commands are registered under
    pub application_id: ApplicationId,
}

impl Handler {
    pub fn new(
        http_client: reqwest::Client,
        ip_providers: Vec<String>,
        application_id: ApplicationId,
    ) -> Self {
        Self {
            http_client,
            ip_providers,
            application_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        ready::handle_ready(self.application_id, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let session = SerenitySession::new(ctx.http.clone());

        guild::handle_guild_create(
            &session,
            self.application_id,
            &guild,
            &GET_IP_COMMAND,
        )
        .await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let session = SerenitySession::new(ctx.http.clone());

        interaction::handle_interaction_create(
            &session,
            &self.http_client,
            &self.ip_providers,
            interaction,
        )
        .await;
    }
}
