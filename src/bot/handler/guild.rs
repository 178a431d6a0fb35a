//! Guild event handler registering the bot's slash command.
//!
//! `guild_create` fires on startup for every guild the bot is already in, when the bot
//! joins a new guild, and when a guild becomes available again after an outage. Each
//! time, the command is (re-)registered for that guild; registering an existing command
//! overwrites it, so repeats are harmless.

use dioxus_logger::tracing;
use serenity::all::{ApplicationId, Guild};

use crate::{bot::session::GatewaySession, model::command::CommandDescriptor};

/// Handles the guild_create event by registering `command` in the guild.
///
/// Registration failures are logged and leave the guild without the command; they
/// never affect other guilds or stop the bot.
///
/// # Arguments
/// - `session` - Gateway session used to register the command
/// - `application_id` - Application id resolved at startup
/// - `guild` - Guild data from Discord
/// - `command` - Command to register
pub async fn handle_guild_create(
    session: &dyn GatewaySession,
    application_id: ApplicationId,
    guild: &Guild,
    command: &CommandDescriptor,
) {
    tracing::debug!("Guild create event: {} ({})", guild.name, guild.id);

    if let Err(e) = session
        .register_guild_command(application_id, guild.id, command)
        .await
    {
        tracing::error!(
            "Failed to register /{} in guild {} ({}): {}",
            command.name,
            guild.name,
            guild.id,
            e
        );
    } else {
        tracing::info!(
            "Registered /{} in guild {} ({})",
            command.name,
            guild.name,
            guild.id
        );
    }
}
