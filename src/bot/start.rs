use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, Http};

use crate::{
    bot::{handler::Handler, lifecycle::BotState},
    config::Config,
    error::AppError,
};

/// Builds the Discord client with the bot's event handler.
///
/// The application id is fetched over HTTP before the client is built, so it is known
/// to every event handler from the first event on; `ready` and `guild_create` handlers
/// run concurrently and cannot rely on each other. No gateway connection is opened yet;
/// call `run_bot` to connect.
///
/// # Arguments
/// - `config` - Validated configuration holding the bot token and IP providers
/// - `http_client` - HTTP client used by the handler to query IP providers
///
/// # Returns
/// - `Ok(Client)` - Client ready to connect
/// - `Err(AppError)` - Application lookup (e.g. rejected token) or client construction failed
pub async fn init_bot(config: &Config, http_client: reqwest::Client) -> Result<Client, AppError> {
    // GUILDS delivers guild_create; interactions need no intent
    let intents = GatewayIntents::GUILDS;

    let application_id = Http::new(&config.discord_bot_token)
        .get_current_application_info()
        .await?
        .id;
    tracing::debug!("Resolved application id {}", application_id);

    let handler = Handler::new(http_client, config.ip_providers.clone(), application_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .application_id(application_id)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to Discord and runs the bot until Ctrl+C is received.
///
/// The gateway connection runs in its own tokio task. On interrupt every shard is shut
/// down and the function returns once the client has stopped. If the connection stops
/// on its own before any interrupt, that is treated as fatal.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` - Shut down cleanly after an interrupt
/// - `Err(AppError)` - Connection failed or closed unexpectedly
pub async fn run_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    BotState::Connecting.log();
    let mut bot = tokio::spawn(async move { client.start().await });

    tracing::info!("Press Ctrl+C to exit");

    tokio::select! {
        result = &mut bot => {
            BotState::Terminated.log();
            result??;
            Err(AppError::GatewayClosed)
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;

            BotState::Closing.log();
            shard_manager.shutdown_all().await;

            if let Err(e) = bot.await? {
                tracing::warn!("Discord client reported an error while closing: {}", e);
            }

            BotState::Terminated.log();
            Ok(())
        }
    }
}
