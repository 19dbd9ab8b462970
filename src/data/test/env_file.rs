use super::*;

/// Tests mirroring a key into an existing dotenv file.
///
/// Expected: the key line is replaced, other lines are kept
#[tokio::test]
async fn upsert_replaces_key_in_existing_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_env_file("BOT_TOKEN=token\nDEEPL_API_KEY=old\n")
        .build()?;

    let repo = EnvFileRepository::new(&test.env_path);
    repo.upsert("DEEPL_API_KEY", "new:fx").await.unwrap();

    assert_eq!(
        test.read_env_file()?,
        "BOT_TOKEN=token\nDEEPL_API_KEY=new:fx\n"
    );

    Ok(())
}

/// Tests mirroring a key when no dotenv file exists yet.
///
/// Expected: file created with the single assignment
#[tokio::test]
async fn upsert_creates_missing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let repo = EnvFileRepository::new(&test.env_path);
    repo.upsert("GOOGLE_API_KEY", "abc").await.unwrap();

    assert_eq!(test.read_env_file()?, "GOOGLE_API_KEY=abc\n");

    Ok(())
}

/// Tests mirroring into a location that cannot be written.
///
/// Expected: Err(SettingsError::Io)
#[tokio::test]
async fn upsert_reports_io_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let path = test.unwritable_path()?;

    let repo = EnvFileRepository::new(&path);
    let result = repo.upsert("DEEPL_API_KEY", "abc").await;

    assert!(matches!(result, Err(SettingsError::Io { .. })));

    Ok(())
}
