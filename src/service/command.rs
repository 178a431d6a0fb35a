use dioxus_logger::tracing;

use crate::{
    model::command::{CommandInvocation, InteractionReply, GET_IP_COMMAND},
    service::ip::PublicIpService,
};

/// Reply sent when no provider could resolve the public IP.
pub const IP_LOOKUP_FAILED_MESSAGE: &str = "Failed to determine the server's public IP address.";

/// Builds the reply for a slash-command invocation.
pub struct CommandService<'a> {
    pub ip_service: PublicIpService<'a>,
}

impl<'a> CommandService<'a> {
    pub fn new(http_client: &'a reqwest::Client, providers: &'a [String]) -> Self {
        Self {
            ip_service: PublicIpService::new(http_client, providers),
        }
    }

    /// Produces exactly one reply for the invocation.
    ///
    /// `get-ip` resolves the public IP and replies with it verbatim, or with
    /// `IP_LOOKUP_FAILED_MESSAGE` when every provider failed, so the reply is never empty.
    /// Any other command name gets an ephemeral "unsupported command" reply so the
    /// invoking client is not left waiting on an unanswered interaction.
    ///
    /// # Arguments
    /// - `invocation` - The slash-command invocation to answer
    ///
    /// # Returns
    /// - `InteractionReply` - Reply to send for this invocation
    pub async fn reply(&self, invocation: &CommandInvocation) -> InteractionReply {
        if invocation.name != GET_IP_COMMAND.name {
            tracing::warn!(
                "Received unsupported command /{} from {} ({})",
                invocation.name,
                invocation.user_name,
                invocation.user_id
            );

            return InteractionReply::ephemeral(format!(
                "Unsupported command: {}",
                invocation.name
            ));
        }

        let lookup = self.ip_service.resolve().await;

        match lookup.ip() {
            Some(ip) => InteractionReply::public(ip),
            None => InteractionReply::public(IP_LOOKUP_FAILED_MESSAGE),
        }
    }
}
