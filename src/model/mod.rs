//! Domain models shared between the services and the bot event handlers.
//!
//! Models here are independent of Serenity's gateway types so the services can be
//! exercised without a Discord connection. Conversions from Serenity types live next to
//! the model they produce.

pub mod command;
pub mod ip;
