use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client with the relay's event handler.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared application state handed to the handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(state, config.presence.clone());

    let client = Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to Discord and runs until the client shuts down.
///
/// # Returns
/// - `Ok(())` - Client shut down cleanly
/// - `Err(AppError)` - Connection failed, e.g. an invalid token
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
