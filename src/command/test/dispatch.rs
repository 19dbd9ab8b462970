use super::*;
use crate::command::{commands, definitions, NOT_OWNER_MESSAGE};

/// Tests that every command in the table has a distinct name.
///
/// Expected: eight unique names, one definition each
#[test]
fn command_table_is_complete() {
    let names: HashSet<&str> = commands().iter().map(|command| command.name()).collect();

    assert_eq!(names.len(), 8);
    for name in [
        "add_channel",
        "remove_channel",
        "list_channels",
        "set_api_key",
        "set_languages",
        "set_formality",
        "show_config",
        "test_translate",
    ] {
        assert!(names.contains(name), "missing /{name}");
    }
    assert_eq!(definitions().len(), 8);
}

/// Tests dispatching a name that is not in the table.
///
/// Expected: None
#[tokio::test]
async fn unknown_command_yields_none() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let reply = dispatch(
        "ban_everyone",
        &owner_in_guild(),
        &CommandArgs::new(),
        &state,
        &FakeDirectory::default(),
    )
    .await;

    assert_eq!(reply, None);

    Ok(())
}

/// Tests every command invoked by someone other than the owner.
///
/// Expected: ephemeral denial, no state or file change, no provider call
#[tokio::test]
async fn non_owner_is_denied_without_side_effects() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, factory) = monitored_state(&test, MockMode::Echo);
    let intruder = Invocation {
        user_id: OWNER_ID + 1,
        ..owner_in_guild()
    };

    let settings_before = state.settings.read().await.clone();
    let channels_before = state.channels.read().await.clone();

    let args = CommandArgs::new()
        .with("channel", ArgValue::Channel(999))
        .with("api_key", ArgValue::String("stolen".to_string()))
        .with("source_lang", ArgValue::String("DE".to_string()))
        .with("target_lang", ArgValue::String("FR".to_string()))
        .with("formality", ArgValue::String("less".to_string()))
        .with("text", ArgValue::String("Hello".to_string()));

    for command in commands() {
        let reply = run_as(command.name(), intruder, args.clone(), &state).await;

        assert_eq!(content(&reply), NOT_OWNER_MESSAGE);
        assert!(reply.ephemeral);
    }

    assert_eq!(*state.settings.read().await, settings_before);
    assert_eq!(*state.channels.read().await, channels_before);
    assert!(!test.config_path.exists());
    assert!(!test.channels_path.exists());
    assert!(!test.env_path.exists());
    assert!(factory.translator.calls().is_empty());
    assert_eq!(factory.keys(), vec!["test-key".to_string()]);

    Ok(())
}

/// Tests that a bot without a configured owner denies everyone.
///
/// Expected: denial even for the would-be owner ID
#[tokio::test]
async fn missing_owner_denies_everyone() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (mut state, _) = monitored_state(&test, MockMode::Echo);
    state.owner_id = None;

    let reply = run("show_config", CommandArgs::new(), &state).await;

    assert_eq!(content(&reply), NOT_OWNER_MESSAGE);

    Ok(())
}

/// Tests that a missing required option is reported to the caller.
///
/// Expected: ephemeral message naming the option
#[tokio::test]
async fn missing_required_option_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let reply = run("test_translate", CommandArgs::new(), &state).await;

    assert_eq!(content(&reply), "Missing required option 'text'.");
    assert!(reply.ephemeral);

    Ok(())
}

/// Tests which commands are deferred before running.
///
/// Expected: only the provider-bound command defers; unknown names never do
#[tokio::test]
async fn only_provider_bound_commands_defer() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    for command in commands() {
        assert_eq!(
            crate::command::defers(command.name(), &state),
            command.name() == "test_translate",
            "/{}",
            command.name()
        );
    }
    assert!(!crate::command::defers("ban_everyone", &state));

    Ok(())
}

/// Tests commands arriving while relaying a single fixed channel.
///
/// Expected: every command ignored, nothing deferred, registry untouched
#[tokio::test]
async fn single_channel_scope_serves_no_commands() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, factory) = state_with(
        &test,
        MockMode::Echo,
        ChannelRegistry::new(),
        RelayScope::SingleChannel(CHANNEL_ID),
    );

    for command in commands() {
        let reply = dispatch(
            command.name(),
            &owner_in_guild(),
            &CommandArgs::new().with("text", ArgValue::String("Hello".to_string())),
            &state,
            &FakeDirectory::default(),
        )
        .await;

        assert_eq!(reply, None, "/{}", command.name());
        assert!(!crate::command::defers(command.name(), &state));
    }

    assert!(state.channels.read().await.is_empty());
    assert!(!test.channels_path.exists());
    assert!(factory.translator.calls().is_empty());

    Ok(())
}
