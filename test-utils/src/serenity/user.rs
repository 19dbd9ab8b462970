//! Test payloads for Serenity User objects.

use serde_json::Value;

/// JSON payload of a Discord user as the gateway sends it.
///
/// Shared with the message factory, which embeds the author object.
pub fn test_user_json(user_id: u64, name: &str, bot: bool) -> Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}
