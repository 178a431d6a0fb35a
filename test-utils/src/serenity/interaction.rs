//! Test factory for creating Serenity interaction objects.
//!
//! Interactions are created by deserializing JSON, simulating the payload Discord sends
//! in an `INTERACTION_CREATE` gateway event.

use serenity::all::{CommandInteraction, Interaction};

/// Discord interaction type for application (slash) commands.
const APPLICATION_COMMAND: u8 = 2;
/// Discord interaction type for command option autocompletion.
const APPLICATION_COMMAND_AUTOCOMPLETE: u8 = 4;

/// Builds the JSON payload of a command-style interaction.
fn command_payload(
    kind: u8,
    interaction_id: u64,
    command_name: &str,
    user_id: u64,
    user_name: &str,
    guild_id: Option<u64>,
) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "id": interaction_id.to_string(),
        "application_id": "555000000000000000",
        "type": kind,
        "data": {
            "id": "444000000000000000",
            "name": command_name,
            "type": 1,
            "options": [],
            "resolved": {},
        },
        "channel_id": "333000000000000000",
        "user": {
            "id": user_id.to_string(),
            "username": user_name,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "token": format!("token-{}", interaction_id),
        "version": 1,
        "app_permissions": "2048",
        "locale": "en-US",
        "entitlements": [],
        "authorizing_integration_owners": {},
        "context": if guild_id.is_some() { 0 } else { 1 },
    });

    if let Some(guild_id) = guild_id {
        payload["guild_id"] = serde_json::json!(guild_id.to_string());
        payload["guild_locale"] = serde_json::json!("en-US");
    }

    payload
}

/// Creates a test Serenity CommandInteraction for a slash-command invocation.
///
/// The invoking user is sent as a top-level `user`, and the interaction token is
/// `token-<interaction_id>`.
///
/// # Arguments
/// - `interaction_id` - Discord interaction ID (snowflake)
/// - `command_name` - Name of the invoked command
/// - `user_id` - Invoking user's ID
/// - `user_name` - Invoking user's username
/// - `guild_id` - Guild the command was invoked in, `None` for direct messages
///
/// # Returns
/// - `CommandInteraction` - A valid Serenity CommandInteraction struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandInteraction (indicates invalid test data)
pub fn create_test_command_interaction(
    interaction_id: u64,
    command_name: &str,
    user_id: u64,
    user_name: &str,
    guild_id: Option<u64>,
) -> CommandInteraction {
    serde_json::from_value(command_payload(
        APPLICATION_COMMAND,
        interaction_id,
        command_name,
        user_id,
        user_name,
        guild_id,
    ))
    .expect("Failed to create test command interaction - invalid JSON structure")
}

/// Creates a test Serenity Interaction wrapping a slash-command invocation.
///
/// # Returns
/// - `Interaction::Command` - Built from the same payload as `create_test_command_interaction`
///
/// # Panics
/// - If the JSON cannot be deserialized into an Interaction (indicates invalid test data)
pub fn create_test_command(
    interaction_id: u64,
    command_name: &str,
    user_id: u64,
    user_name: &str,
    guild_id: Option<u64>,
) -> Interaction {
    serde_json::from_value(command_payload(
        APPLICATION_COMMAND,
        interaction_id,
        command_name,
        user_id,
        user_name,
        guild_id,
    ))
    .expect("Failed to create test command interaction - invalid JSON structure")
}

/// Creates a test Serenity Interaction for command option autocompletion.
///
/// Autocomplete interactions carry command data but are not command invocations, so
/// they exercise the path for interactions the bot does not answer.
///
/// # Returns
/// - `Interaction::Autocomplete` - Autocomplete interaction for `command_name`
///
/// # Panics
/// - If the JSON cannot be deserialized into an Interaction (indicates invalid test data)
pub fn create_test_autocomplete(interaction_id: u64, command_name: &str) -> Interaction {
    serde_json::from_value(command_payload(
        APPLICATION_COMMAND_AUTOCOMPLETE,
        interaction_id,
        command_name,
        42,
        "tester",
        None,
    ))
    .expect("Failed to create test autocomplete interaction - invalid JSON structure")
}
