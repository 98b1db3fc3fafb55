#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

/// Shared chat store read by the statistics page.
///
/// `is_loaded` stays `false` until the initial fetch completes, so a fresh
/// (or absent) store reads as "still loading".
#[derive(Clone, Debug, Default)]
pub struct ChatsState {
    pub chats: Vec<ChatSummary>,
    pub is_loaded: bool,
}

/// A single chat known to the bot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatSummary {
    pub id: i64,
    pub title: String,
}
