//! Slash command interactions.
//!
//! Converts Serenity interaction data into [`Invocation`]/[`CommandArgs`], runs the
//! command through [`command::dispatch`] and sends the resulting reply.

use std::{num::NonZeroU64, sync::Arc};

use dioxus_logger::tracing;
use serenity::all::{
    Cache, ChannelId, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, GuildId, Interaction,
    ResolvedOption, ResolvedValue,
};

use crate::{
    command::{self, ArgValue, CommandArgs, CommandReply, Directory, Invocation, ReplyEmbed},
    state::AppState,
};

/// Name lookups served from the gateway cache.
///
/// Zero is not a valid snowflake; such IDs from a hand-edited registry are
/// reported as unknown.
struct CacheDirectory {
    cache: Arc<Cache>,
}

impl Directory for CacheDirectory {
    fn guild_name(&self, guild_id: u64) -> Option<String> {
        let guild_id = NonZeroU64::new(guild_id)?;

        self.cache
            .guild(GuildId::from(guild_id))
            .map(|guild| guild.name.clone())
    }

    fn has_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        let (Some(guild_id), Some(channel_id)) =
            (NonZeroU64::new(guild_id), NonZeroU64::new(channel_id))
        else {
            return false;
        };

        self.cache
            .guild(GuildId::from(guild_id))
            .is_some_and(|guild| guild.channels.contains_key(&ChannelId::from(channel_id)))
    }
}

/// Handle an incoming interaction
///
/// Only slash commands are handled; other interaction kinds are ignored. Commands
/// that may outlast Discord's response window are deferred first and answered by
/// editing the deferred response.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let name = interaction.data.name.as_str();
    let invocation = Invocation {
        user_id: interaction.user.id.get(),
        guild_id: interaction.guild_id.map(|id| id.get()),
        channel_id: interaction.channel_id.get(),
    };
    let args = command_args(&interaction.data.options());
    let directory = CacheDirectory {
        cache: ctx.cache.clone(),
    };

    let deferred = command::defers(name, state);
    if deferred {
        let defer = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        );
        if let Err(e) = interaction.create_response(&ctx.http, defer).await {
            tracing::error!("Failed to defer /{}: {}", name, e);
            return;
        }
    }

    let Some(reply) = command::dispatch(name, &invocation, &args, state, &directory).await
    else {
        tracing::warn!("Ignoring command /{}", name);
        return;
    };

    if deferred {
        edit_response(&ctx, &interaction, reply).await;
    } else {
        respond(&ctx, &interaction, reply).await;
    }
}

fn command_args(options: &[ResolvedOption<'_>]) -> CommandArgs {
    let mut args = CommandArgs::new();

    for option in options {
        let value = match &option.value {
            ResolvedValue::String(value) => ArgValue::String(value.to_string()),
            ResolvedValue::Boolean(value) => ArgValue::Boolean(*value),
            ResolvedValue::Channel(channel) => ArgValue::Channel(channel.id.get()),
            _ => continue,
        };
        args.insert(option.name, value);
    }

    args
}

fn build_embed(embed: ReplyEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(embed.title).color(embed.color);
    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }
    builder
}

async fn respond(ctx: &Context, interaction: &CommandInteraction, reply: CommandReply) {
    let mut message = CreateInteractionResponseMessage::new().ephemeral(reply.ephemeral);

    if let Some(content) = reply.content {
        message = message.content(content);
    }
    if let Some(embed) = reply.embed {
        message = message.embed(build_embed(embed));
    }

    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", interaction.data.name, e);
    }
}

/// Replaces the deferred "thinking" response with the reply.
///
/// Visibility was fixed when the interaction was deferred.
async fn edit_response(ctx: &Context, interaction: &CommandInteraction, reply: CommandReply) {
    let mut edit = EditInteractionResponse::new();

    if let Some(content) = reply.content {
        edit = edit.content(content);
    }
    if let Some(embed) = reply.embed {
        edit = edit.embed(build_embed(embed));
    }

    if let Err(e) = interaction.edit_response(&ctx.http, edit).await {
        tracing::error!("Failed to edit response to /{}: {}", interaction.data.name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_directory() -> CacheDirectory {
        CacheDirectory {
            cache: Arc::new(Cache::new()),
        }
    }

    #[test]
    fn zero_ids_are_unknown() {
        let directory = empty_directory();

        assert_eq!(directory.guild_name(0), None);
        assert!(!directory.has_channel(0, 0));
        assert!(!directory.has_channel(300, 0));
        assert!(!directory.has_channel(0, 400));
    }

    #[test]
    fn uncached_guild_is_unknown() {
        let directory = empty_directory();

        assert_eq!(directory.guild_name(300), None);
        assert!(!directory.has_channel(300, 400));
    }
}
