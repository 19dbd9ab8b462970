//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message and its author) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::create_test_message;
//!
//! #[test]
//! fn converts_message() {
//!     let message = create_test_message(1, 200, Some(300), 400, "Hello");
//!     let incoming = IncomingMessage::from(&message);
//!     // Perform assertions...
//! }
//! ```

pub mod message;
pub mod user;
