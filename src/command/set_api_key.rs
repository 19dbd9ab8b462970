use async_trait::async_trait;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{CommandArgs, CommandReply, Directory, Invocation, SlashCommand};
use crate::{
    error::AppError,
    service::admin::{AdminService, ApiKeyUpdate},
    state::AppState,
};

/// `/set_api_key <api_key> [save_to_env]` - replace the provider key.
pub struct SetApiKey;

#[async_trait]
impl SlashCommand for SetApiKey {
    fn name(&self) -> &'static str {
        "set_api_key"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Set the translation API key")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "api_key",
                    "Translation provider API key",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "save_to_env",
                    "Also write the key to the .env file (default: true)",
                )
                .required(false),
            )
    }

    async fn execute(
        &self,
        _invocation: &Invocation,
        args: &CommandArgs,
        state: &AppState,
        _directory: &dyn Directory,
    ) -> Result<CommandReply, AppError> {
        let api_key = args.required_string("api_key")?;
        let save_to_env = args.boolean("save_to_env").unwrap_or(true);

        let update = AdminService::new(state)
            .set_api_key(api_key, save_to_env)
            .await;

        Ok(CommandReply::text(describe(&update)).ephemeral())
    }
}

fn describe(update: &ApiKeyUpdate) -> String {
    let headline = if update.translator_ready {
        "API key set and translator initialized."
    } else {
        "API key stored, but the translator could not be initialized. Check the key."
    };

    let config = match &update.config_saved {
        Ok(()) => "saved to config.json".to_string(),
        Err(e) => format!("not saved to config.json ({e})"),
    };

    let env = match &update.env_saved {
        Some(Ok(())) => format!("saved to .env as {}", update.env_var),
        Some(Err(e)) => format!("failed to update .env ({e})"),
        None => "not written to .env".to_string(),
    };

    format!("{headline}\nKey {config}; {env}.")
}
