//! Settings administration on behalf of the bot owner.
//!
//! Every mutation updates the in-memory state first and then persists it. A failed
//! save is reported back in the result instead of as an error: the in-memory value
//! stays authoritative until the next successful save.

use dioxus_logger::tracing;

use crate::{
    data::{
        channel_registry::ChannelRegistryRepository, env_file::EnvFileRepository,
        translation_config::TranslationConfigRepository,
    },
    error::{settings::SettingsError, translation::TranslationError, AppError},
    model::{settings::Formality, translation::Translation},
    service::translation::{ProviderKind, TranslationService},
    state::AppState,
};

/// Outcome of a mutation together with the result of persisting it.
#[derive(Debug)]
pub struct Saved<T> {
    pub outcome: T,
    /// `None` when the document was written, or when nothing needed writing.
    pub save_error: Option<SettingsError>,
}

impl<T> Saved<T> {
    fn unchanged(outcome: T) -> Self {
        Self {
            outcome,
            save_error: None,
        }
    }

    fn persisted(outcome: T, result: Result<(), SettingsError>) -> Self {
        Self {
            outcome,
            save_error: result.err(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelChange {
    Added,
    AlreadyMonitored,
    Removed,
    NotMonitored,
}

/// Result of `set_api_key`.
#[derive(Debug)]
pub struct ApiKeyUpdate {
    pub config_saved: Result<(), SettingsError>,
    /// `None` when mirroring to the dotenv file was not requested.
    pub env_saved: Option<Result<(), SettingsError>>,
    /// Environment variable the key was mirrored to.
    pub env_var: &'static str,
    /// Whether a provider client could be built from the new key.
    pub translator_ready: bool,
}

/// Read-only view of the current settings. Never contains the key itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSummary {
    pub provider: ProviderKind,
    pub api_key_set: bool,
    pub translator_ready: bool,
    pub source_lang: String,
    pub target_lang: String,
    pub formality: Formality,
    pub guild_count: usize,
    pub channel_count: usize,
}

pub struct AdminService<'a> {
    state: &'a AppState,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `state` - Shared application state
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Adds a channel to the monitored set of a guild.
    ///
    /// Adding an already monitored channel changes nothing and writes nothing.
    ///
    /// # Returns
    /// - `Saved { outcome: Added, .. }` - Channel added, with the save result
    /// - `Saved { outcome: AlreadyMonitored, .. }` - No change
    pub async fn add_channel(&self, guild_id: u64, channel_id: u64) -> Saved<ChannelChange> {
        let mut channels = self.state.channels.write().await;

        if !channels.add(&guild_id.to_string(), &channel_id.to_string()) {
            return Saved::unchanged(ChannelChange::AlreadyMonitored);
        }

        tracing::info!("Monitoring channel {} in guild {}", channel_id, guild_id);

        let result = ChannelRegistryRepository::new(&self.state.paths.channels)
            .save(&channels)
            .await;
        log_save_failure(&result);

        Saved::persisted(ChannelChange::Added, result)
    }

    /// Removes a channel from the monitored set of a guild.
    ///
    /// Removing the guild's last channel removes the guild. Removing a channel that
    /// is not monitored changes nothing.
    pub async fn remove_channel(&self, guild_id: u64, channel_id: u64) -> Saved<ChannelChange> {
        let mut channels = self.state.channels.write().await;

        if !channels.remove(&guild_id.to_string(), &channel_id.to_string()) {
            return Saved::unchanged(ChannelChange::NotMonitored);
        }

        tracing::info!(
            "Stopped monitoring channel {} in guild {}",
            channel_id,
            guild_id
        );

        let result = ChannelRegistryRepository::new(&self.state.paths.channels)
            .save(&channels)
            .await;
        log_save_failure(&result);

        Saved::persisted(ChannelChange::Removed, result)
    }

    /// Snapshot of the registry as `(guild_id, channel_ids)` pairs.
    pub async fn list_channels(&self) -> Vec<(String, Vec<String>)> {
        self.state
            .channels
            .read()
            .await
            .iter()
            .map(|(guild_id, channels)| (guild_id.clone(), channels.iter().cloned().collect()))
            .collect()
    }

    /// Replaces the API key and rebuilds the provider client.
    ///
    /// # Arguments
    /// - `api_key` - New provider key
    /// - `persist_to_env` - Also write the key into the dotenv file
    pub async fn set_api_key(&self, api_key: &str, persist_to_env: bool) -> ApiKeyUpdate {
        let api_key = api_key.trim();
        let env_var = self.state.translator_factory.provider().api_key_env_var();

        let config_saved = {
            let mut settings = self.state.settings.write().await;
            settings.api_key = Some(api_key.to_string());

            TranslationConfigRepository::new(&self.state.paths.config)
                .save(&settings)
                .await
        };
        log_save_failure(&config_saved);

        let env_saved = if persist_to_env {
            let result = EnvFileRepository::new(&self.state.paths.env_file)
                .upsert(env_var, api_key)
                .await;
            log_save_failure(&result);
            Some(result)
        } else {
            None
        };

        let translator = self.state.translator_factory.build(api_key);
        let translator_ready = translator.is_some();
        {
            let mut translation = self.state.translation.write().await;
            let timeout = translation.timeout();
            *translation = TranslationService::new(translator, timeout);
        }

        tracing::info!(
            "API key updated (translator ready: {}, mirrored to env: {})",
            translator_ready,
            persist_to_env
        );

        ApiKeyUpdate {
            config_saved,
            env_saved,
            env_var,
            translator_ready,
        }
    }

    /// Sets the source and target languages, upper-cased.
    ///
    /// # Returns
    /// - `Ok(Saved<(source, target)>)` - Normalized codes and the save result
    /// - `Err(AppError::BadRequest)` - A code was blank; nothing changed
    pub async fn set_languages(
        &self,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Saved<(String, String)>, AppError> {
        let source_lang = source_lang.trim().to_uppercase();
        let target_lang = target_lang.trim().to_uppercase();

        if source_lang.is_empty() || target_lang.is_empty() {
            return Err(AppError::BadRequest(
                "Both a source and a target language code are required.".to_string(),
            ));
        }

        let mut settings = self.state.settings.write().await;
        settings.source_lang = source_lang.clone();
        settings.target_lang = target_lang.clone();

        tracing::info!("Languages set to {} -> {}", source_lang, target_lang);

        let result = TranslationConfigRepository::new(&self.state.paths.config)
            .save(&settings)
            .await;
        log_save_failure(&result);

        Ok(Saved::persisted((source_lang, target_lang), result))
    }

    /// Sets the formality from its string name.
    ///
    /// # Returns
    /// - `Ok(Saved<Formality>)` - Parsed value and the save result
    /// - `Err(AppError::BadRequest)` - Unknown value; nothing changed
    pub async fn set_formality(&self, value: &str) -> Result<Saved<Formality>, AppError> {
        let formality = value.trim().parse::<Formality>().map_err(|invalid| {
            AppError::BadRequest(format!(
                "Invalid formality '{}'. Valid values: {}",
                invalid,
                Formality::valid_values()
            ))
        })?;

        let mut settings = self.state.settings.write().await;
        settings.formality = formality;

        tracing::info!("Formality set to {}", formality);

        let result = TranslationConfigRepository::new(&self.state.paths.config)
            .save(&settings)
            .await;
        log_save_failure(&result);

        Ok(Saved::persisted(formality, result))
    }

    pub async fn show_config(&self) -> ConfigSummary {
        let settings = self.state.settings.read().await.clone();
        let translator_ready = self.state.translation.read().await.is_ready();
        let (guild_count, channel_count) = {
            let channels = self.state.channels.read().await;
            (channels.guild_count(), channels.channel_count())
        };

        ConfigSummary {
            provider: self.state.translator_factory.provider(),
            api_key_set: settings.has_api_key(),
            translator_ready,
            source_lang: settings.source_lang,
            target_lang: settings.target_lang,
            formality: settings.formality,
            guild_count,
            channel_count,
        }
    }

    /// Translates `text` with the current settings, outside the relay path.
    ///
    /// The text is sent as-is, without emoji stripping or tag handling.
    pub async fn test_translate(&self, text: &str) -> Result<Translation, TranslationError> {
        let settings = self.state.settings.read().await.clone();
        let translation = self.state.translation.read().await.clone();

        translation.translate(text, &settings, None).await
    }
}

fn log_save_failure(result: &Result<(), SettingsError>) {
    if let Err(e) = result {
        tracing::error!("Failed to persist settings: {}", e);
    }
}
