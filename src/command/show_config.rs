use async_trait::async_trait;
use serenity::all::CreateCommand;

use super::{
    CommandArgs, CommandReply, Directory, Invocation, ReplyEmbed, SlashCommand, COLOR_INFO,
};
use crate::{error::AppError, service::admin::AdminService, state::AppState};

/// `/show_config` - current settings, without the key itself.
pub struct ShowConfig;

#[async_trait]
impl SlashCommand for ShowConfig {
    fn name(&self) -> &'static str {
        "show_config"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Show the current settings")
    }

    async fn execute(
        &self,
        _invocation: &Invocation,
        _args: &CommandArgs,
        state: &AppState,
        _directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let summary = AdminService::new(state).show_config().await;

        let key_status = match (summary.api_key_set, summary.translator_ready) {
            (true, true) => "Set",
            (true, false) => "Set (translator unavailable)",
            (false, _) => "Not set",
        };

        let embed = ReplyEmbed::new("Bot Settings", COLOR_INFO)
            .field("Provider", summary.provider.to_string(), false)
            .field(
                format!("{} API Key", summary.provider.display_name()),
                key_status,
                false,
            )
            .field("Source Language", summary.source_lang, true)
            .field("Target Language", summary.target_lang, true)
            .field("Formality", summary.formality.to_string(), true)
            .field("Monitored Servers", summary.guild_count.to_string(), true)
            .field("Monitored Channels", summary.channel_count.to_string(), true);

        Ok(CommandReply::embed(embed).ephemeral())
    }
}
