use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No bot token was supplied, or the supplied token is blank.
    ///
    /// Pass `--token` or set `DISCORD_BOT_TOKEN` (a `.env` file is loaded on startup).
    #[error("Missing Discord bot token: pass --token or set DISCORD_BOT_TOKEN")]
    MissingToken,

    /// An IP provider list was supplied but contained no usable entries.
    #[error("IP provider list is empty")]
    NoProviders,

    /// An IP provider is not a valid absolute HTTP(S) URL.
    #[error("Invalid IP provider URL '{url}': {reason}")]
    InvalidProviderUrl {
        /// The provider value as supplied
        url: String,
        /// Why the value was rejected
        reason: String,
    },
}
