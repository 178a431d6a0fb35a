//! Service layer with the bot's business logic.
//!
//! Services are cheap, borrow-only structs constructed per event with `new()`. They
//! never talk to Discord directly: the bot handlers pass their results to the gateway
//! session.

pub mod command;
pub mod ip;

#[cfg(test)]
mod test;
