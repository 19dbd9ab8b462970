use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Activity text shown once connected.
    pub presence: String,
}

impl Handler {
    pub fn new(state: AppState, presence: String) -> Self {
        Self { state, presence }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, &self.presence, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
