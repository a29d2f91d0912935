use super::ChatLog;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[test]
fn it_counts_label_body_and_spacer_lines() {
    let mut chat_log = ChatLog::default();
    chat_log.set_messages(
        &[
            Message::new(Author::Assistant, "Hi there"),
            Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!"),
        ],
        80,
    );

    // One label, one body line, and one spacer per message.
    assert_eq!(chat_log.len(), 6);
}

#[test]
fn it_wraps_bodies_to_the_viewport_width() {
    let mut chat_log = ChatLog::default();
    chat_log.set_messages(
        &[Message::new(
            Author::Assistant,
            "The quick brown fox jumps over the lazy dog",
        )],
        22,
    );

    // Label + three wrapped lines + spacer.
    assert_eq!(chat_log.len(), 5);
}

#[test]
fn it_clears_previous_lines_on_set() {
    let mut chat_log = ChatLog::default();
    chat_log.set_messages(&[Message::new(Author::Assistant, "Hi there")], 80);
    chat_log.set_messages(&[], 80);

    assert_eq!(chat_log.len(), 0);
}
