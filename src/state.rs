//! Application state shared by every event handler.
//!
//! This module defines the `AppState` struct which holds the settings and clients
//! the relay and the admin commands work on. The state is built once during startup,
//! handed to the serenity event handler, and cloned into each handler invocation.
//!
//! The state includes:
//! - Translation settings and the monitored channel registry
//! - The translation adapter and the factory used to rebuild it
//! - Owner identity and relay scope from the environment
//! - Locations of the persisted documents

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    config::{RelayScope, SettingsPaths},
    model::{channel_registry::ChannelRegistry, settings::TranslationConfig},
    service::{
        sanitizer::Sanitizer,
        translation::{TranslationService, TranslatorFactory},
    },
};

/// Application state containing shared settings and clients.
///
/// All fields are cheap to clone: the mutable parts sit behind `Arc<RwLock<_>>` so
/// clones share them. Admin commands take the write locks; the relay only takes
/// short read locks and never holds one across a provider call.
#[derive(Clone)]
pub struct AppState {
    /// Current translation settings, mirrored to the config document on change.
    pub settings: Arc<RwLock<TranslationConfig>>,

    /// Monitored channels, mirrored to the registry document on change.
    pub channels: Arc<RwLock<ChannelRegistry>>,

    /// Translation adapter, replaced when the API key changes.
    pub translation: Arc<RwLock<TranslationService>>,

    /// Builds a provider client from a new API key.
    pub translator_factory: Arc<dyn TranslatorFactory>,

    pub sanitizer: Sanitizer,

    /// The only user allowed to run admin commands. `None` denies everyone.
    pub owner_id: Option<u64>,

    pub scope: RelayScope,

    pub paths: SettingsPaths,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `settings` - Loaded translation settings
    /// - `channels` - Loaded channel registry
    /// - `translation` - Adapter built from the current API key
    /// - `translator_factory` - Factory for rebuilding the adapter's provider client
    /// - `sanitizer` - Emoji stripping rules
    /// - `owner_id` - Owner identity, if configured
    /// - `scope` - Channels the relay watches
    /// - `paths` - Document locations
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: TranslationConfig,
        channels: ChannelRegistry,
        translation: TranslationService,
        translator_factory: Arc<dyn TranslatorFactory>,
        sanitizer: Sanitizer,
        owner_id: Option<u64>,
        scope: RelayScope,
        paths: SettingsPaths,
    ) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            channels: Arc::new(RwLock::new(channels)),
            translation: Arc::new(RwLock::new(translation)),
            translator_factory,
            sanitizer,
            owner_id,
            scope,
            paths,
        }
    }

    /// Whether `user_id` may run admin commands.
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_id == Some(user_id)
    }
}
