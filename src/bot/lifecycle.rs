use std::fmt;

use dioxus_logger::tracing;

/// Stages of the bot process, from startup to exit.
///
/// `Unauthenticated → Connecting → Connected → Closing → Terminated`. The bot only
/// reaches `Connecting` once its token has been validated, and reaches `Terminated`
/// either after an interrupt signal or after an unrecoverable connection failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotState {
    Unauthenticated,
    Connecting,
    Connected,
    Closing,
    Terminated,
}

impl BotState {
    pub fn log(self) {
        tracing::info!("Bot state: {}", self);
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Closing => "closing",
            Self::Terminated => "terminated",
        };
        f.write_str(state)
    }
}
