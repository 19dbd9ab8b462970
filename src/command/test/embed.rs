use super::*;
use crate::command::{truncate, ReplyEmbed, COLOR_INFO};

/// Tests that text within the limit is left alone.
///
/// Expected: unchanged text
#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate("Hello".to_string(), 5), "Hello");
}

/// Tests cutting text over the limit, including multi-byte characters.
///
/// Expected: exactly `limit` characters ending in an ellipsis
#[test]
fn truncate_cuts_on_char_boundaries() {
    let cut = truncate("こんにちは世界".to_string(), 4);

    assert_eq!(cut, "こんに…");
    assert_eq!(cut.chars().count(), 4);
}

/// Tests that fields are clamped to Discord's value limit when added.
///
/// Expected: value of exactly the limit, counted in the embed total
#[test]
fn field_value_is_clamped() {
    let embed = ReplyEmbed::new("Title", COLOR_INFO).field("Name", "x".repeat(5000), false);

    assert_eq!(embed.fields[0].value.chars().count(), EMBED_FIELD_VALUE_LIMIT);
    assert!(embed.fields[0].value.ends_with('…'));
    assert_eq!(embed.char_count(), 5 + 4 + EMBED_FIELD_VALUE_LIMIT);
}
