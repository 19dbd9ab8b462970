//! Translate Relay Test Utils
//!
//! Provides shared testing utilities for the translate-relay bot. This crate offers a
//! builder pattern for creating test contexts backed by a temporary directory that holds
//! the bot's settings documents, plus factories for Serenity models.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for seeding settings files
//! - **TestContext**: Test environment owning the temporary directory and file paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_seeded_registry() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_channels(serde_json::json!({ "1": ["10"] }))
//!         .build()?;
//!
//!     let repo = ChannelRegistryRepository::new(&test.channels_path);
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
