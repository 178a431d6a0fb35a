//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot completes the gateway handshake. The handler
//! logs the bot identity and checks the gateway reports the application id the
//! commands are registered under.

use dioxus_logger::tracing;
use serenity::all::{ApplicationId, Ready};

use crate::bot::lifecycle::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `application_id` - Application id resolved at startup
/// - `ready` - Ready event data containing bot user and application information
pub async fn handle_ready(application_id: ApplicationId, ready: Ready) {
    BotState::Connected.log();

    tracing::info!("Logged in as: {}", ready.user.tag());

    check_application_id(application_id, ready.application.id);
}

/// Warns when the gateway session belongs to a different application.
///
/// # Returns
/// - `true` - Ids match
/// - `false` - Ids differ; guild command registration targets the startup id
fn check_application_id(expected: ApplicationId, reported: ApplicationId) -> bool {
    if expected == reported {
        return true;
    }

    tracing::warn!(
        "Gateway reports application {} but commands are registered for {}",
        reported,
        expected
    );
    false
}
