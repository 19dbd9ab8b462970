//! Per-guild set of monitored channels.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Monitored channels keyed by guild ID.
///
/// Serialized as `{ "<guild_id>": ["<channel_id>", ...] }`. A channel appears at
/// most once per guild and a guild with no channels left is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelRegistry {
    guilds: BTreeMap<String, BTreeSet<String>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel, returning `false` if it was already monitored.
    pub fn add(&mut self, guild_id: &str, channel_id: &str) -> bool {
        self.guilds
            .entry(guild_id.to_string())
            .or_default()
            .insert(channel_id.to_string())
    }

    /// Removes a channel, returning `false` if it was not monitored.
    ///
    /// Removing the last channel of a guild removes the guild entry.
    pub fn remove(&mut self, guild_id: &str, channel_id: &str) -> bool {
        let Some(channels) = self.guilds.get_mut(guild_id) else {
            return false;
        };

        let removed = channels.remove(channel_id);
        if channels.is_empty() {
            self.guilds.remove(guild_id);
        }

        removed
    }

    pub fn contains(&self, guild_id: &str, channel_id: &str) -> bool {
        self.guilds
            .get(guild_id)
            .is_some_and(|channels| channels.contains(channel_id))
    }

    pub fn contains_guild(&self, guild_id: &str) -> bool {
        self.guilds.contains_key(guild_id)
    }

    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    pub fn channel_count(&self) -> usize {
        self.guilds.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.guilds.iter()
    }

    /// Drops guilds with no channels, which can only come from hand-edited files.
    pub fn prune_empty(&mut self) {
        self.guilds.retain(|_, channels| !channels.is_empty());
    }
}
