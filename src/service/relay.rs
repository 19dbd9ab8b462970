//! Message routing and translation for the passive relay.

use dioxus_logger::tracing;

use crate::{
    config::RelayScope, model::message::IncomingMessage, model::translation::TagHandling,
    state::AppState,
};

/// Why a message was not translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Sent by the bot itself.
    SelfMessage,
    /// Posted outside the monitored channels.
    NotMonitored,
    /// Nothing left after stripping custom emoji.
    NothingToTranslate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Ignore(IgnoreReason),
    /// Translate the contained, sanitized text.
    Translate(String),
}

pub struct RelayService<'a> {
    state: &'a AppState,
}

impl<'a> RelayService<'a> {
    /// Creates a new RelayService instance.
    ///
    /// # Arguments
    /// - `state` - Shared application state
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Decides whether `message` should be translated.
    ///
    /// Self-messages are rejected before anything else so the bot can never react to
    /// its own replies. Only the registry read lock is taken, and only for the lookup.
    ///
    /// # Arguments
    /// - `message` - The incoming message
    /// - `bot_id` - The bot's own user ID
    ///
    /// # Returns
    /// - `RouteDecision::Translate(text)` - Sanitized text to translate
    /// - `RouteDecision::Ignore(reason)` - Message is not relayed
    pub async fn route(&self, message: &IncomingMessage, bot_id: u64) -> RouteDecision {
        if message.author_id == bot_id {
            return RouteDecision::Ignore(IgnoreReason::SelfMessage);
        }

        let monitored = match self.state.scope {
            RelayScope::SingleChannel(channel_id) => message.channel_id == channel_id,
            RelayScope::Registry => match message.guild_id {
                Some(guild_id) => self
                    .state
                    .channels
                    .read()
                    .await
                    .contains(&guild_id.to_string(), &message.channel_id.to_string()),
                None => false,
            },
        };

        if !monitored {
            return RouteDecision::Ignore(IgnoreReason::NotMonitored);
        }

        let cleaned = self.state.sanitizer.clean(&message.content);
        if cleaned.is_empty() {
            return RouteDecision::Ignore(IgnoreReason::NothingToTranslate);
        }

        RouteDecision::Translate(cleaned)
    }

    /// Routes `message` and translates it if eligible.
    ///
    /// Provider failures are logged and produce `None`; nothing is surfaced to the
    /// channel.
    ///
    /// # Returns
    /// - `Some(text)` - Non-empty translated text to reply with
    /// - `None` - Message ignored or translation unavailable
    pub async fn relay(&self, message: &IncomingMessage, bot_id: u64) -> Option<String> {
        let text = match self.route(message, bot_id).await {
            RouteDecision::Translate(text) => text,
            RouteDecision::Ignore(reason) => {
                tracing::trace!(
                    "Ignoring message in channel {}: {:?}",
                    message.channel_id,
                    reason
                );
                return None;
            }
        };

        let settings = self.state.settings.read().await.clone();
        let translation = self.state.translation.read().await.clone();

        match translation
            .translate(&text, &settings, Some(TagHandling::Xml))
            .await
        {
            Ok(result) if !result.text.trim().is_empty() => {
                tracing::debug!(
                    "Translated message in channel {} ({} -> {})",
                    message.channel_id,
                    settings.source_lang,
                    settings.target_lang
                );
                Some(result.text)
            }
            Ok(_) => {
                tracing::debug!(
                    "Provider returned empty translation for channel {}",
                    message.channel_id
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    "Failed to translate message in channel {}: {}",
                    message.channel_id,
                    e
                );
                None
            }
        }
    }
}
