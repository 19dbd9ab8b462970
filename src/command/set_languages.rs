use async_trait::async_trait;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{with_save_note, CommandArgs, CommandReply, Directory, Invocation, SlashCommand};
use crate::{error::AppError, service::admin::AdminService, state::AppState};

/// `/set_languages <source_lang> <target_lang>`
pub struct SetLanguages;

#[async_trait]
impl SlashCommand for SetLanguages {
    fn name(&self) -> &'static str {
        "set_languages"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Set the translation languages")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "source_lang",
                    "Source language code, e.g. EN",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "target_lang",
                    "Target language code, e.g. JA",
                )
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
        let source_lang = args.required_string("source_lang")?;
        let target_lang = args.required_string("target_lang")?;

        let result = AdminService::new(state)
            .set_languages(source_lang, target_lang)
            .await?;

        let (source, target) = &result.outcome;
        let message = format!("Translation languages updated: {source} → {target}");

        Ok(CommandReply::text(with_save_note(message, &result.save_error)))
    }
}
