//! Discord bot integration answering the `/get-ip` slash command.
//!
//! The bot keeps one gateway connection open and reacts to three events:
//! - `ready` - records the application id and logs the bot identity
//! - `guild_create` - registers `/get-ip` in the guild
//! - `interaction_create` - resolves the public IP and replies
//!
//! Handlers reach Discord only through the `GatewaySession` trait, so they can be tested
//! against a recording fake instead of a live connection.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent, which delivers `guild_create` events.
//! Interactions are delivered regardless of intents.

pub mod handler;
pub mod lifecycle;
pub mod session;
pub mod start;
