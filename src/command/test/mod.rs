use std::collections::{HashMap, HashSet};

use crate::{
    command::{
        dispatch, ArgValue, CommandArgs, CommandReply, Directory, Invocation,
        EMBED_FIELD_COUNT_LIMIT, EMBED_FIELD_VALUE_LIMIT, EMBED_TOTAL_LIMIT,
    },
    config::RelayScope,
    model::{channel_registry::ChannelRegistry, settings::Formality},
    service::translation::mock::MockMode,
    state::{
        test::{monitored_state, state_with, CHANNEL_ID, GUILD_ID, OWNER_ID},
        AppState,
    },
};
use test_utils::{builder::TestBuilder, error::TestError};

mod dispatch;
mod embed;
mod settings;

/// In-memory stand-in for the Serenity cache.
#[derive(Default)]
struct FakeDirectory {
    guilds: HashMap<u64, String>,
    channels: HashSet<(u64, u64)>,
}

impl FakeDirectory {
    fn with_guild(mut self, guild_id: u64, name: &str) -> Self {
        self.guilds.insert(guild_id, name.to_string());
        self
    }

    fn with_channel(mut self, guild_id: u64, channel_id: u64) -> Self {
        self.channels.insert((guild_id, channel_id));
        self
    }
}

impl Directory for FakeDirectory {
    fn guild_name(&self, guild_id: u64) -> Option<String> {
        self.guilds.get(&guild_id).cloned()
    }

    fn has_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        self.channels.contains(&(guild_id, channel_id))
    }
}

fn owner_in_guild() -> Invocation {
    Invocation {
        user_id: OWNER_ID,
        guild_id: Some(GUILD_ID),
        channel_id: CHANNEL_ID,
    }
}

/// Runs `name` as the owner in `GUILD_ID`/`CHANNEL_ID` with an empty directory.
async fn run(name: &str, args: CommandArgs, state: &AppState) -> CommandReply {
    run_as(name, owner_in_guild(), args, state).await
}

async fn run_as(
    name: &str,
    invocation: Invocation,
    args: CommandArgs,
    state: &AppState,
) -> CommandReply {
    dispatch(name, &invocation, &args, state, &FakeDirectory::default())
        .await
        .expect("command should exist")
}

fn content(reply: &CommandReply) -> &str {
    reply.content.as_deref().unwrap_or_default()
}
