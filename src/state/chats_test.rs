use super::*;

// =============================================================
// ChatsState defaults
// =============================================================

#[test]
fn chats_state_default_not_loaded() {
    let state = ChatsState::default();
    assert!(!state.is_loaded);
}

#[test]
fn chats_state_default_empty() {
    let state = ChatsState::default();
    assert!(state.chats.is_empty());
}

// =============================================================
// ChatSummary wire shape
// =============================================================

#[test]
fn chat_summary_deserializes() {
    let chat: ChatSummary = serde_json::from_str(r#"{"id":42,"title":"General"}"#).unwrap();
    assert_eq!(
        chat,
        ChatSummary {
            id: 42,
            title: "General".to_owned(),
        }
    );
}
