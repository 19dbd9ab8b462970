//! Owner-only slash commands.
//!
//! Each command is a [`SlashCommand`] in the static table returned by [`commands`].
//! Commands work on Discord-independent inputs ([`Invocation`], [`CommandArgs`]) and
//! return a [`CommandReply`]; the interaction handler converts to and from Serenity
//! types. [`dispatch`] applies the owner check and turns errors into replies.

pub mod add_channel;
pub mod list_channels;
pub mod remove_channel;
pub mod set_api_key;
pub mod set_formality;
pub mod set_languages;
pub mod show_config;
pub mod test_translate;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use dioxus_logger::tracing;
use serenity::all::CreateCommand;
use std::collections::HashMap;

use crate::{config::RelayScope, error::AppError, state::AppState};

pub const COLOR_SUCCESS: u32 = 0x00ff00;
pub const COLOR_INFO: u32 = 0x0099ff;

/// Discord embed limits, in characters.
pub const EMBED_FIELD_NAME_LIMIT: usize = 256;
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;
pub const EMBED_FIELD_COUNT_LIMIT: usize = 25;
pub const EMBED_TOTAL_LIMIT: usize = 6000;

pub const NOT_OWNER_MESSAGE: &str = "This command can only be used by the bot owner.";

/// Who ran a command and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub user_id: u64,
    /// `None` when invoked from a direct message.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}

impl Invocation {
    /// Guild the command was run in, or a `BadRequest` for direct messages.
    pub fn require_guild(&self) -> Result<u64, AppError> {
        self.guild_id.ok_or_else(|| {
            AppError::BadRequest("This command can only be used in a server.".to_string())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Boolean(bool),
    Channel(u64),
}

/// Resolved command options by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs(HashMap<String, ArgValue>);

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: ArgValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ArgValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(ArgValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// String option Discord marks as required; absent means a malformed interaction.
    pub fn required_string(&self, name: &str) -> Result<&str, AppError> {
        self.string(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{name}'.")))
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.0.get(name) {
            Some(ArgValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<u64> {
        match self.0.get(name) {
            Some(ArgValue::Channel(id)) => Some(*id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEmbed {
    pub title: String,
    pub color: u32,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
}

impl ReplyEmbed {
    pub fn new(title: &str, color: u32) -> Self {
        Self {
            title: title.to_string(),
            color,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field, truncating the name and value to Discord's field limits.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: truncate(name.into(), EMBED_FIELD_NAME_LIMIT),
            value: truncate(value.into(), EMBED_FIELD_VALUE_LIMIT),
            inline,
        });
        self
    }

    /// Characters counted against the embed total.
    pub fn char_count(&self) -> usize {
        self.title.chars().count()
            + self
                .description
                .as_deref()
                .map_or(0, |description| description.chars().count())
            + self
                .fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
    }
}

/// Shortens `text` to at most `limit` characters, ending in an ellipsis when cut.
pub fn truncate(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }

    let mut truncated: String = text.chars().take(limit.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Response to a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub content: Option<String>,
    pub embed: Option<ReplyEmbed>,
    /// Only visible to the caller.
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            ephemeral: false,
        }
    }

    pub fn embed(embed: ReplyEmbed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            ephemeral: false,
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

/// Name lookups for rendering stored IDs.
///
/// Backed by the Serenity cache at runtime.
pub trait Directory: Send + Sync {
    fn guild_name(&self, guild_id: u64) -> Option<String>;

    /// Whether the channel is known to exist in the guild.
    fn has_channel(&self, guild_id: u64, channel_id: u64) -> bool;
}

#[async_trait]
pub trait SlashCommand: Send + Sync {
    fn name(&self) -> &'static str;

    /// Slash command definition registered with Discord.
    fn register(&self) -> CreateCommand;

    /// Checks whether the caller may run the command. Defaults to owner only.
    fn validate(&self, invocation: &Invocation, state: &AppState) -> bool {
        state.is_owner(invocation.user_id)
    }

    /// Whether the command may outlast Discord's 3 second response window, so the
    /// interaction must be deferred and the reply sent as an edit.
    fn defers(&self) -> bool {
        false
    }

    async fn execute(
        &self,
        invocation: &Invocation,
        args: &CommandArgs,
        state: &AppState,
        directory: &dyn Directory,
    ) -> Result<CommandReply, AppError>;
}

/// All admin commands.
pub fn commands() -> Vec<Box<dyn SlashCommand>> {
    vec![
        Box::new(add_channel::AddChannel),
        Box::new(remove_channel::RemoveChannel),
        Box::new(list_channels::ListChannels),
        Box::new(set_api_key::SetApiKey),
        Box::new(set_languages::SetLanguages),
        Box::new(set_formality::SetFormality),
        Box::new(show_config::ShowConfig),
        Box::new(test_translate::TestTranslate),
    ]
}

/// Slash command definitions for registration.
pub fn definitions() -> Vec<CreateCommand> {
    commands().iter().map(|command| command.register()).collect()
}

/// Commands are only served in the managed scope.
pub fn accepts_commands(state: &AppState) -> bool {
    matches!(state.scope, RelayScope::Registry)
}

/// Whether the named command is served and must be deferred before it runs.
pub fn defers(name: &str, state: &AppState) -> bool {
    accepts_commands(state)
        && commands()
            .iter()
            .any(|command| command.name() == name && command.defers())
}

/// Runs the named command for `invocation`.
///
/// Unknown commands, and every command in the single-channel scope, yield `None`.
/// Callers that fail validation get the fixed denial and nothing runs. Errors are
/// logged in full and replaced by their user-facing message.
pub async fn dispatch(
    name: &str,
    invocation: &Invocation,
    args: &CommandArgs,
    state: &AppState,
    directory: &dyn Directory,
) -> Option<CommandReply> {
    if !accepts_commands(state) {
        tracing::debug!("Ignoring /{} outside the managed scope", name);
        return None;
    }

    let commands = commands();
    let command = commands.iter().find(|command| command.name() == name)?;

    if !command.validate(invocation, state) {
        tracing::warn!(
            "User {} was denied access to /{}",
            invocation.user_id,
            name
        );
        return Some(CommandReply::text(NOT_OWNER_MESSAGE).ephemeral());
    }

    let reply = match command.execute(invocation, args, state, directory).await {
        Ok(reply) => reply,
        Err(e) => {
            match &e {
                AppError::BadRequest(msg) => {
                    tracing::debug!("Rejected /{}: {}", name, msg)
                }
                _ => tracing::error!("Command /{} failed: {}", name, e),
            }
            CommandReply::text(e.user_message()).ephemeral()
        }
    };

    Some(reply)
}

/// Appends a note about a failed save to a success message.
pub(crate) fn with_save_note(
    message: String,
    save_error: &Option<crate::error::settings::SettingsError>,
) -> String {
    match save_error {
        Some(e) => format!("{message}\n⚠️ The change is active but could not be saved: {e}"),
        None => message,
    }
}
