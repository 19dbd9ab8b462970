use async_trait::async_trait;
use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption};

use super::{with_save_note, CommandArgs, CommandReply, Directory, Invocation, SlashCommand};
use crate::{
    error::AppError,
    service::admin::{AdminService, ChannelChange},
    state::AppState,
};

/// `/add_channel [channel]` - start relaying a channel, defaulting to the current one.
pub struct AddChannel;

#[async_trait]
impl SlashCommand for AddChannel {
    fn name(&self) -> &'static str {
        "add_channel"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Add a channel to the monitored channels")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel to monitor (defaults to this channel)",
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
            .add_channel(guild_id, channel_id)
            .await;

        let message = match result.outcome {
            ChannelChange::AlreadyMonitored => {
                format!("Channel <#{channel_id}> is already being monitored.")
            }
            _ => format!("Added <#{channel_id}> to the monitored channels."),
        };

        Ok(CommandReply::text(with_save_note(message, &result.save_error)))
    }
}
