use serenity::all::{
    CommandInteraction, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, InteractionId, Permissions, UserId,
};

/// Slash command answered with the server's public IP address.
pub const GET_IP_COMMAND: CommandDescriptor = CommandDescriptor {
    name: "get-ip",
    description: "Get server public IP",
    default_member_permissions: Permissions::SEND_MESSAGES,
};

/// Static definition of a guild-scoped slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Permissions a member needs to see and use the command by default.
    pub default_member_permissions: Permissions,
}

impl CommandDescriptor {
    /// Builds the Serenity request used to register this command.
    pub fn to_builder(&self) -> CreateCommand {
        CreateCommand::new(self.name)
            .description(self.description)
            .default_member_permissions(self.default_member_permissions)
    }
}

/// Handle needed to answer an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRef {
    pub id: InteractionId,
    pub token: String,
}

/// A single slash-command invocation by a user.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub interaction: InteractionRef,
    /// Name of the invoked command
    pub name: String,
    pub user_id: UserId,
    pub user_name: String,
    /// Guild the command was invoked in, `None` for direct messages
    pub guild_id: Option<GuildId>,
}

impl From<&CommandInteraction> for CommandInvocation {
    fn from(command: &CommandInteraction) -> Self {
        Self {
            interaction: InteractionRef {
                id: command.id,
                token: command.token.clone(),
            },
            name: command.data.name.clone(),
            user_id: command.user.id,
            user_name: command.user.name.clone(),
            guild_id: command.guild_id,
        }
    }
}

/// Text reply to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReply {
    pub content: String,
    /// Only the invoking user sees ephemeral replies.
    pub ephemeral: bool,
}

impl InteractionReply {
    /// Reply visible to everyone in the channel.
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// Reply visible only to the invoking user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    /// Builds the Serenity response sending this reply as a channel message.
    pub fn to_response(&self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(self.content.clone())
                .ephemeral(self.ephemeral),
        )
    }
}
