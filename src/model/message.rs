//! Message shape the relay routes on.

use serenity::all::Message;

/// The parts of a Discord message the relay needs.
///
/// Built once per `message` event; owned by that handler invocation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            channel_id: message.channel_id.get(),
            content: message.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::message::create_test_message;

    #[test]
    fn converts_guild_message() {
        let message = create_test_message(1, 200, Some(300), 400, "Hello there");
        let incoming = IncomingMessage::from(&message);

        assert_eq!(incoming.author_id, 400);
        assert_eq!(incoming.guild_id, Some(300));
        assert_eq!(incoming.channel_id, 200);
        assert_eq!(incoming.content, "Hello there");
    }

    #[test]
    fn converts_direct_message() {
        let message = create_test_message(1, 200, None, 400, "psst");
        let incoming = IncomingMessage::from(&message);

        assert_eq!(incoming.guild_id, None);
    }
}
