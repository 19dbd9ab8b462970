use async_trait::async_trait;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{
    CommandArgs, CommandReply, Directory, Invocation, ReplyEmbed, SlashCommand, COLOR_SUCCESS,
};
use crate::{error::AppError, service::admin::AdminService, state::AppState};

/// `/test_translate <text>` - translate ad-hoc text, visible to the caller only.
pub struct TestTranslate;

#[async_trait]
impl SlashCommand for TestTranslate {
    fn name(&self) -> &'static str {
        "test_translate"
    }

    fn defers(&self) -> bool {
        true
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Translate text with the current settings")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "text", "Text to translate")
                    .required(true),
            )
    }

    async fn execute(
        &self,
        _invocation: &Invocation,
        args: &CommandArgs,
        state: &AppState,
        _directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let text = args.required_string("text")?;

        let reply = match AdminService::new(state).test_translate(text).await {
            Ok(translation) => {
                let mut embed = ReplyEmbed::new("Translation Test", COLOR_SUCCESS)
                    .field("Original", text, false)
                    .field("Translation", translation.text, false);
                if let Some(detected) = translation.detected_source_lang {
                    embed = embed.field("Detected Language", detected, true);
                }
                CommandReply::embed(embed)
            }
            Err(e) => CommandReply::text(format!("Translation failed: {e}")),
        };

        Ok(reply.ephemeral())
    }
}
