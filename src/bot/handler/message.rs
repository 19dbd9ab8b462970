use dioxus_logger::tracing;
use serenity::all::{Context, CreateAllowedMentions, CreateMessage, Message};
use serenity::http::HttpError;

use crate::{model::message::IncomingMessage, service::relay::RelayService, state::AppState};

/// Discord's per-message character limit.
const MESSAGE_LIMIT: usize = 2000;

/// Handle message creation in a channel
///
/// Eligible messages are translated and answered with a reply that does not ping
/// the author. Failed sends are logged and dropped.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    let bot_id = ctx.cache.current_user().id.get();
    let incoming = IncomingMessage::from(&message);

    let Some(translated) = RelayService::new(state).relay(&incoming, bot_id).await else {
        return;
    };

    for (index, chunk) in split_message(&translated, MESSAGE_LIMIT)
        .into_iter()
        .enumerate()
    {
        let mut reply = CreateMessage::new().content(chunk);
        if index == 0 {
            reply = reply
                .reference_message(&message)
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false));
        }

        if let Err(e) = message.channel_id.send_message(&ctx.http, reply).await {
            log_send_failure(message.channel_id.get(), &e);
            return;
        }
    }
}

fn log_send_failure(channel_id: u64, error: &serenity::Error) {
    let forbidden = matches!(
        error,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403
    );

    if forbidden {
        tracing::warn!(
            "Missing permission to reply in channel {}: {}",
            channel_id,
            error
        );
    } else {
        tracing::error!("Failed to send translation to channel {}: {}", channel_id, error);
    }
}

/// Splits `text` into chunks of at most `limit` characters.
///
/// Splits on character boundaries, never inside a UTF-8 sequence.
fn split_message(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();

    chars
        .chunks(limit.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_message("こんにちは", MESSAGE_LIMIT), vec!["こんにちは"]);
    }

    #[test]
    fn long_text_splits_on_char_boundaries() {
        let text = "あ".repeat(4500);

        let chunks = split_message(&text, MESSAGE_LIMIT);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 2000);
        assert_eq!(chunks[1].chars().count(), 2000);
        assert_eq!(chunks[2].chars().count(), 500);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn exact_limit_is_not_split() {
        let text = "a".repeat(MESSAGE_LIMIT);

        assert_eq!(split_message(&text, MESSAGE_LIMIT).len(), 1);
    }
}
