//! Test factories for creating Serenity API objects.
//!
//! When testing code that consumes Serenity gateway events, you need Serenity structs
//! that look like what Discord would send. These factories build them by deserializing
//! JSON with sensible defaults while allowing customization of key fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! #[tokio::test]
//! async fn registers_command_on_guild_create() {
//!     let guild = create_test_guild(123456789, "Test Guild");
//!     // Pass the guild to the guild handler...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `interaction::create_test_command_interaction` - Create Serenity CommandInteraction objects
//! - `interaction::create_test_command` / `create_test_autocomplete` - Create Serenity
//!   Interaction objects of the command and autocomplete kinds

pub mod guild;
pub mod interaction;

pub use guild::create_test_guild;
pub use interaction::{
    create_test_autocomplete, create_test_command, create_test_command_interaction,
};
