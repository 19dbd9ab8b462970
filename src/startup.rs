use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    config::Config,
    data::{
        channel_registry::ChannelRegistryRepository,
        translation_config::TranslationConfigRepository,
    },
    error::{internal::InternalError, AppError},
    service::{
        sanitizer::Sanitizer,
        translation::{HttpTranslatorFactory, TranslationService, TranslatorFactory},
    },
    state::AppState,
};

/// Initializes logging at the configured level.
///
/// A second initialization (e.g. from tests) is ignored.
pub fn init_logging(config: &Config) {
    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {e}");
    }
}

/// Builds the HTTP client shared by every translation provider.
///
/// Redirects are disabled; the provider endpoints never redirect and a redirect
/// must not carry the API key elsewhere.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with a shared connection pool
/// - `Err(AppError::InternalErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(InternalError::HttpClient)?;

    Ok(client)
}

/// Loads the persisted documents and assembles the application state.
///
/// The API key from the environment is used when the config document has none;
/// a key already stored in the document wins.
///
/// # Arguments
/// - `config` - Application configuration
/// - `factory` - Builds the provider client from the API key
///
/// # Returns
/// - `AppState` - State ready to hand to the Discord handler
pub async fn build_state(config: &Config, factory: Arc<dyn TranslatorFactory>) -> AppState {
    let mut settings = TranslationConfigRepository::new(&config.paths.config)
        .load()
        .await;
    let channels = ChannelRegistryRepository::new(&config.paths.channels)
        .load()
        .await;

    if !settings.has_api_key() {
        settings.api_key = config.api_key.clone();
    }

    let translator = settings
        .api_key
        .as_deref()
        .and_then(|api_key| factory.build(api_key));

    if translator.is_none() {
        tracing::warn!(
            "No {} API key configured; translations will fail until one is set",
            factory.provider().display_name()
        );
    }

    tracing::info!(
        "Loaded settings: {} -> {} ({} channel(s) in {} server(s))",
        settings.source_lang,
        settings.target_lang,
        channels.channel_count(),
        channels.guild_count()
    );

    AppState::new(
        settings,
        channels,
        TranslationService::new(translator, config.translation_timeout),
        factory,
        Sanitizer::new(config.emoji_grammar),
        config.owner_id,
        config.scope,
        config.paths.clone(),
    )
}

/// Builds the production translator factory for the configured provider.
pub fn translator_factory(config: &Config, http: reqwest::Client) -> Arc<dyn TranslatorFactory> {
    Arc::new(HttpTranslatorFactory::new(config.provider, http))
}
