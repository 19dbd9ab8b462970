use dioxus_logger::tracing::Level;
use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{
    error::{config::ConfigError, AppError},
    service::{sanitizer::EmojiGrammar, translation::ProviderKind},
};

const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_CHANNELS_FILE: &str = "channels.json";
const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_TRANSLATION_TIMEOUT_SECS: u64 = 10;
const MANAGED_PRESENCE: &str = "WATCHING CHANNELS";
const SINGLE_CHANNEL_PRESENCE: &str = "WATCHING ANNOUNCEMENT";

/// Locations of the persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    pub config: PathBuf,
    pub channels: PathBuf,
    pub env_file: PathBuf,
}

/// Which channels the relay watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayScope {
    /// Channels registered per guild through the admin commands.
    Registry,
    /// A single channel fixed by `CHANNEL_ID`; admin commands are not registered.
    SingleChannel(u64),
}

pub struct Config {
    pub bot_token: String,
    pub owner_id: Option<u64>,

    pub provider: ProviderKind,
    /// Provider key from the environment, used when the config document has none.
    pub api_key: Option<String>,
    pub translation_timeout: Duration,

    pub scope: RelayScope,
    pub emoji_grammar: EmojiGrammar,
    pub presence: String,
    pub log_level: Level,

    pub paths: SettingsPaths,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. Only `BOT_TOKEN` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token =
            var("BOT_TOKEN").ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

        let owner_id = var("BOT_OWNER_ID")
            .map(|value| parse_id("BOT_OWNER_ID", value))
            .transpose()?;

        let provider = var("TRANSLATION_PROVIDER")
            .map(|value| {
                ProviderKind::from_str(&value).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "TRANSLATION_PROVIDER".to_string(),
                    value,
                    reason: "expected 'deepl' or 'google'".to_string(),
                })
            })
            .transpose()?
            .unwrap_or_default();

        let api_key = var(provider.api_key_env_var());

        let translation_timeout = match var("TRANSLATION_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "TRANSLATION_TIMEOUT_SECS".to_string(),
                        value,
                        reason: "expected a positive number of seconds".to_string(),
                    }
                    .into())
                }
            },
            None => Duration::from_secs(DEFAULT_TRANSLATION_TIMEOUT_SECS),
        };

        let scope = match var("CHANNEL_ID") {
            Some(value) => RelayScope::SingleChannel(parse_id("CHANNEL_ID", value)?),
            None => RelayScope::Registry,
        };

        let emoji_grammar = match var("EMOJI_FORMAT").as_deref() {
            None | Some("tagged") => EmojiGrammar::Tagged,
            Some("shortcode") => EmojiGrammar::Shortcode,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "EMOJI_FORMAT".to_string(),
                    value: other.to_string(),
                    reason: "expected 'tagged' or 'shortcode'".to_string(),
                }
                .into())
            }
        };

        let presence = var("PRESENCE_TEXT").unwrap_or_else(|| {
            match scope {
                RelayScope::Registry => MANAGED_PRESENCE,
                RelayScope::SingleChannel(_) => SINGLE_CHANNEL_PRESENCE,
            }
            .to_string()
        });

        let log_level = match var("LOG_LEVEL") {
            Some(value) => Level::from_str(&value).map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value,
                reason: "expected one of trace, debug, info, warn, error".to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            bot_token,
            owner_id,
            provider,
            api_key,
            translation_timeout,
            scope,
            emoji_grammar,
            presence,
            log_level,
            paths: SettingsPaths {
                config: var("CONFIG_FILE")
                    .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
                    .into(),
                channels: var("CHANNELS_FILE")
                    .unwrap_or_else(|| DEFAULT_CHANNELS_FILE.to_string())
                    .into(),
                env_file: var("ENV_FILE")
                    .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string())
                    .into(),
            },
        })
    }
}

fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}
