//! Error types and user-facing error messages.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Errors that reach the
//! slash command dispatcher are logged in full and converted with
//! [`AppError::user_message`] so internal details never leak into Discord.

pub mod config;
pub mod internal;
pub mod settings;
pub mod translation;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup; never produced once the bot is connected.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal state, such as an unparsable stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Invalid command input.
    ///
    /// The message is shown to the caller as-is.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
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

impl AppError {
    /// Message safe to show to the command caller.
    ///
    /// `BadRequest` carries text written for the user; every other variant is
    /// replaced by a generic message and should be logged by the caller.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            _ => "Something went wrong while running this command.".to_string(),
        }
    }
}
