use async_trait::async_trait;
use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption};

use super::{with_save_note, CommandArgs, CommandReply, Directory, Invocation, SlashCommand};
use crate::{
    error::AppError,
    service::admin::{AdminService, ChannelChange},
    state::AppState,
};

/// `/remove_channel [channel]` - stop relaying a channel, defaulting to the current one.
pub struct RemoveChannel;

#[async_trait]
impl SlashCommand for RemoveChannel {
    fn name(&self) -> &'static str {
        "remove_channel"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Remove a channel from the monitored channels")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel to stop monitoring (defaults to this channel)",
                )
                .channel_types(vec![ChannelType::Text, ChannelType::News])
                .required(false),
            )
    }

    async fn execute(
        &self,
        invocation: &Invocation,
        args: &CommandArgs,
        state: &AppState,
        _directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let guild_id = invocation.require_guild()?;
        let channel_id = args.channel("channel").unwrap_or(invocation.channel_id);

        let result = AdminService::new(state)
            .remove_channel(guild_id, channel_id)
            .await;

        let message = match result.outcome {
            ChannelChange::NotMonitored => {
                format!("Channel <#{channel_id}> is not being monitored.")
            }
            _ => format!("Removed <#{channel_id}> from the monitored channels."),
        };

        Ok(CommandReply::text(with_save_note(message, &result.save_error)))
    }
}
