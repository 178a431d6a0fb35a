use serenity::all::{InteractionId, UserId};

use crate::model::command::{CommandInvocation, InteractionRef};

mod command;
mod ip;

/// Creates an invocation of `name` by a test user inside a guild.
fn test_invocation(name: &str) -> CommandInvocation {
    CommandInvocation {
        interaction: InteractionRef {
            id: InteractionId::new(1),
            token: "interaction-token".to_string(),
        },
        name: name.to_string(),
        user_id: UserId::new(42),
        user_name: "tester".to_string(),
        guild_id: Some(serenity::all::GuildId::new(7)),
    }
}
