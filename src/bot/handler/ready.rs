//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's presence
//! - Register the admin slash commands when channels are managed through them, and
//!   clear them otherwise

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};

use crate::{command, config::RelayScope, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Fires again after every reconnect; re-registering global commands is harmless.
///
/// # Arguments
/// - `state` - Application state, for the relay scope
/// - `presence` - Activity text to show
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, presence: &str, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing(presence)));

    match state.scope {
        RelayScope::SingleChannel(channel_id) => {
            tracing::info!("Relaying messages from channel {}", channel_id);

            // Drop commands left registered by an earlier managed run.
            if let Err(e) = Command::set_global_commands(&ctx.http, Vec::new()).await {
                tracing::error!("Failed to clear slash commands: {}", e);
            }
        }
        RelayScope::Registry => {
            match Command::set_global_commands(&ctx.http, command::definitions()).await {
                Ok(commands) => tracing::info!("Synced {} command(s)", commands.len()),
                Err(e) => tracing::error!("Failed to sync slash commands: {}", e),
            }
        }
    }
}
