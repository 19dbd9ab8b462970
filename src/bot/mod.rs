//! Discord gateway integration.
//!
//! The bot connects with the following gateway intents:
//! - `GUILDS` - Guild and channel data for the cache used by `/list_channels`
//! - `GUILD_MESSAGES` - Message events for the relay
//! - `MESSAGE_CONTENT` - Message text for the relay (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
