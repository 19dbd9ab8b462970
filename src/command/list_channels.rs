use async_trait::async_trait;
use serenity::all::CreateCommand;

use super::{
    CommandArgs, CommandReply, Directory, Invocation, ReplyEmbed, SlashCommand, COLOR_SUCCESS,
    EMBED_FIELD_COUNT_LIMIT, EMBED_TOTAL_LIMIT,
};
use crate::{
    error::AppError, service::admin::AdminService, state::AppState,
    util::parse::parse_u64_from_string,
};

/// Room kept for the "more servers" field when the embed is cut short.
const OVERFLOW_NOTE_RESERVE: usize = 64;

/// `/list_channels` - every monitored channel grouped by server.
pub struct ListChannels;

#[async_trait]
impl SlashCommand for ListChannels {
    fn name(&self) -> &'static str {
        "list_channels"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("List the monitored channels")
    }

    async fn execute(
        &self,
        _invocation: &Invocation,
        _args: &CommandArgs,
        state: &AppState,
        directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let registry = AdminService::new(state).list_channels().await;
        let mut embed = ReplyEmbed::new("Monitored Channels", COLOR_SUCCESS);

        if registry.is_empty() {
            embed = embed.description("No channels are being monitored.");
            return Ok(CommandReply::embed(embed));
        }

        let total = registry.len();
        for (index, (guild_id, channel_ids)) in registry.iter().enumerate() {
            let guild = parse_id(guild_id);

            let server_name = guild
                .and_then(|guild| directory.guild_name(guild))
                .unwrap_or_else(|| format!("Unknown Server ({guild_id})"));

            let channels: Vec<String> = channel_ids
                .iter()
                .map(|channel_id| match (guild, parse_id(channel_id)) {
                    (Some(guild), Some(channel)) if directory.has_channel(guild, channel) => {
                        format!("<#{channel}>")
                    }
                    _ => format!("Unknown Channel ({channel_id})"),
                })
                .collect();

            let next = embed.clone().field(server_name, channels.join("\n"), false);

            let fits = if index + 1 == total {
                next.fields.len() <= EMBED_FIELD_COUNT_LIMIT
                    && next.char_count() <= EMBED_TOTAL_LIMIT
            } else {
                next.fields.len() < EMBED_FIELD_COUNT_LIMIT
                    && next.char_count() + OVERFLOW_NOTE_RESERVE <= EMBED_TOTAL_LIMIT
            };

            if !fits {
                embed = embed.field(
                    "More Servers",
                    format!("…and {} more server(s) not shown.", total - index),
                    false,
                );
                break;
            }

            embed = next;
        }

        Ok(CommandReply::embed(embed))
    }
}

/// Stored Discord ID, or `None` when it is not a valid snowflake.
fn parse_id(value: &str) -> Option<u64> {
    parse_u64_from_string(value).ok().filter(|id| *id != 0)
}
