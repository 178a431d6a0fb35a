//! ipbot Test Utils
//!
//! Provides shared testing utilities for the ipbot crate. This crate offers a builder
//! pattern for standing up mock public IP providers and factories for Serenity objects
//! that the bot's event handlers consume.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **ProviderBuilder**: Fluent builder for configuring an ordered list of mock providers
//! - **ProviderContext**: Running mock providers plus the URLs to hand to the resolver
//! - **serenity**: Factories creating Serenity structs by deserializing Discord JSON
//! - **http**: HTTP client wired to reach the local mock providers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::ProviderBuilder;
//!
//! #[tokio::test]
//! async fn resolves_first_provider() {
//!     let providers = ProviderBuilder::new()
//!         .with_response(200, "198.51.100.2")
//!         .with_response_expecting(200, "203.0.113.7", 0)
//!         .build()
//!         .await;
//!
//!     let urls = providers.urls();
//!     // Resolve against `urls`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod http;
pub mod serenity;
