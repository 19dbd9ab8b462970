use async_trait::async_trait;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{with_save_note, CommandArgs, CommandReply, Directory, Invocation, SlashCommand};
use crate::{
    error::AppError, model::settings::Formality, service::admin::AdminService, state::AppState,
};

/// `/set_formality <formality>`
pub struct SetFormality;

#[async_trait]
impl SlashCommand for SetFormality {
    fn name(&self) -> &'static str {
        "set_formality"
    }

    fn register(&self) -> CreateCommand {
        let mut option = CreateCommandOption::new(
            CommandOptionType::String,
            "formality",
            "Formality of the translated text",
        )
        .required(true);

        for formality in Formality::ALL {
            option = option.add_string_choice(formality.as_str(), formality.as_str());
        }

        CreateCommand::new(self.name())
            .description("Set the translation formality")
            .add_option(option)
    }

    async fn execute(
        &self,
        _invocation: &Invocation,
        args: &CommandArgs,
        state: &AppState,
        _directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let value = args.required_string("formality")?;

        let result = AdminService::new(state).set_formality(value).await?;

        let message = format!("Formality set to '{}'.", result.outcome);

        Ok(CommandReply::text(with_save_note(message, &result.save_error)))
    }
}
