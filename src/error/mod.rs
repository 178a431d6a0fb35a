//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from the outbound
//! Discord operations. Domain-specific errors (`ConfigError`, `ProviderError`) live in
//! their own modules and convert into `AppError` where they can become fatal.

pub mod config;
pub mod provider;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates every error that can stop the bot or fail a Discord API call. Most
/// variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal: the bot never opens a gateway connection with invalid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure while waiting for the interrupt signal.
    #[error(transparent)]
    SignalErr(#[from] std::io::Error),

    /// The gateway client task panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// The gateway connection stopped without an interrupt signal.
    #[error("Discord gateway connection closed unexpectedly")]
    GatewayClosed,

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
