use crate::{
    data::{
        channel_registry::ChannelRegistryRepository, env_file::EnvFileRepository,
        translation_config::TranslationConfigRepository,
    },
    error::settings::SettingsError,
    model::{
        channel_registry::ChannelRegistry,
        settings::{Formality, TranslationConfig},
    },
};
use test_utils::{builder::TestBuilder, error::TestError};

mod env_file;
