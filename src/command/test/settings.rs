use super::*;

/// Tests setting the languages with untidy input.
///
/// Expected: trimmed upper-case codes in memory and on disk
#[tokio::test]
async fn set_languages_normalizes_and_persists() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new()
        .with("source_lang", ArgValue::String(" de ".to_string()))
        .with("target_lang", ArgValue::String("en-gb".to_string()));
    let reply = run("set_languages", args, &state).await;

    assert_eq!(
        content(&reply),
        "Translation languages updated: DE → EN-GB"
    );

    let settings = state.settings.read().await.clone();
    assert_eq!(settings.source_lang, "DE");
    assert_eq!(settings.target_lang, "EN-GB");

    let stored = test.read_config()?;
    assert_eq!(stored["source_lang"], "DE");
    assert_eq!(stored["target_lang"], "EN-GB");

    Ok(())
}

/// Tests setting a blank language code.
///
/// Expected: rejection, languages unchanged
#[tokio::test]
async fn set_languages_rejects_blank_code() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new()
        .with("source_lang", ArgValue::String("EN".to_string()))
        .with("target_lang", ArgValue::String("   ".to_string()));
    let reply = run("set_languages", args, &state).await;

    assert_eq!(
        content(&reply),
        "Both a source and a target language code are required."
    );
    assert_eq!(state.settings.read().await.target_lang, "JA");
    assert!(!test.config_path.exists());

    Ok(())
}

/// Tests setting a valid formality.
///
/// Expected: formality applied and saved in snake_case
#[tokio::test]
async fn set_formality_applies_value() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new().with("formality", ArgValue::String("prefer_less".to_string()));
    let reply = run("set_formality", args, &state).await;

    assert_eq!(content(&reply), "Formality set to 'prefer_less'.");
    assert_eq!(state.settings.read().await.formality, Formality::PreferLess);
    assert_eq!(test.read_config()?["formality"], "prefer_less");

    Ok(())
}

/// Tests setting an unknown formality.
///
/// Expected: rejection listing the valid values, formality unchanged
#[tokio::test]
async fn set_formality_rejects_invalid_value() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new().with("formality", ArgValue::String("casual".to_string()));
    let reply = run("set_formality", args, &state).await;

    assert!(content(&reply).starts_with("Invalid formality 'casual'."));
    assert!(content(&reply).contains(&Formality::valid_values()));
    assert_eq!(state.settings.read().await.formality, Formality::More);
    assert!(!test.config_path.exists());

    Ok(())
}

/// Tests replacing the API key with the default env mirroring.
///
/// Expected: key stored in both documents, translator rebuilt, ephemeral reply
#[tokio::test]
async fn set_api_key_persists_everywhere() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_env_file("BOT_TOKEN=abc\nDEEPL_API_KEY=old\n")
        .build()?;
    let (state, factory) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new().with("api_key", ArgValue::String("new-key:fx".to_string()));
    let reply = run("set_api_key", args, &state).await;

    assert!(reply.ephemeral);
    assert!(content(&reply).starts_with("API key set and translator initialized."));
    assert!(content(&reply).contains("saved to .env as DEEPL_API_KEY"));
    assert!(!content(&reply).contains("new-key:fx"));

    assert_eq!(
        state.settings.read().await.api_key.as_deref(),
        Some("new-key:fx")
    );
    assert_eq!(test.read_config()?["api_key"], "new-key:fx");
    assert_eq!(
        test.read_env_file()?,
        "BOT_TOKEN=abc\nDEEPL_API_KEY=new-key:fx\n"
    );
    assert_eq!(factory.keys().last().map(String::as_str), Some("new-key:fx"));
    assert!(state.translation.read().await.is_ready());

    Ok(())
}

/// Tests replacing the API key without touching the dotenv file.
///
/// Expected: env file left absent, reply says so
#[tokio::test]
async fn set_api_key_can_skip_env_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let args = CommandArgs::new()
        .with("api_key", ArgValue::String("other-key".to_string()))
        .with("save_to_env", ArgValue::Boolean(false));
    let reply = run("set_api_key", args, &state).await;

    assert!(content(&reply).contains("not written to .env"));
    assert!(!test.env_path.exists());

    Ok(())
}

/// Tests the settings summary.
///
/// Expected: ephemeral embed with key status and counts, never the key itself
#[tokio::test]
async fn show_config_summarizes_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let (state, _) = monitored_state(&test, MockMode::Echo);

    let reply = run("show_config", CommandArgs::new(), &state).await;
    assert!(reply.ephemeral);

    let embed = reply.embed.expect("embed");
    let field = |name: &str| {
        embed
            .fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.clone())
    };

    assert_eq!(field("Provider").as_deref(), Some("DeepL"));
    assert_eq!(field("DeepL API Key").as_deref(), Some("Set"));
    assert_eq!(field("Source Language").as_deref(), Some("EN"));
    assert_eq!(field("Target Language").as_deref(), Some("JA"));
    assert_eq!(field("Formality").as_deref(), Some("more"));
    assert_eq!(field("Monitored Servers").as_deref(), Some("1"));
    assert_eq!(field("Monitored Channels").as_deref(), Some("1"));
    assert!(embed.fields.iter().all(|field| !field.value.contains("test-key")));

    Ok(())
}
