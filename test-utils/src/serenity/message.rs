//! Test factory for creating Serenity Message objects.
//!
//! Messages are built by deserializing a MESSAGE_CREATE payload with the fields
//! the relay reads filled in and everything else left empty.

use serenity::all::Message;

use super::user::test_user_json;

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild of the channel, `None` for direct messages
/// - `author_id` - ID of the (non-bot) author
/// - `content` - Raw message text
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// // Message in a guild channel
/// let message = create_test_message(1, 200, Some(300), 400, "Hello <:wave:123>");
///
/// // Direct message
/// let message = create_test_message(2, 201, None, 400, "psst");
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": test_user_json(author_id, "tester", false),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
