use super::Transcript;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_appends_messages_in_order() {
    let mut transcript = Transcript::default();
    transcript.append(Message::new(Author::User, "Hello"));
    transcript.append(Message::new(Author::Assistant, "Hi there"));

    let snapshot = transcript.snapshot();
    assert_eq!(snapshot.messages.len(), 2);
    assert_eq!(snapshot.messages[0].author, Author::User);
    assert_eq!(snapshot.messages[0].text, "Hello");
    assert_eq!(snapshot.messages[1].author, Author::Assistant);
    assert_eq!(snapshot.messages[1].text, "Hi there");
    assert!(!snapshot.pending);
}

#[test]
fn it_drops_blank_user_messages() {
    let mut transcript = Transcript::default();
    transcript.append(Message::new(Author::User, ""));
    transcript.append(Message::new(Author::User, "   \n  "));

    assert!(transcript.snapshot().messages.is_empty());
}

#[test]
fn it_keeps_empty_assistant_placeholders() {
    let mut transcript = Transcript::default();
    transcript.append(Message::new(Author::Assistant, ""));

    assert_eq!(transcript.snapshot().messages.len(), 1);
}

#[test]
fn it_toggles_pending() {
    let mut transcript = Transcript::default();
    assert!(!transcript.pending());

    transcript.set_pending(true);
    assert!(transcript.pending());
    assert!(transcript.snapshot().pending);

    transcript.set_pending(false);
    assert!(!transcript.pending());
}

#[test]
fn it_snapshots_without_sharing_state() {
    let mut transcript = Transcript::default();
    transcript.append(Message::new(Author::User, "Hello"));

    let snapshot = transcript.snapshot();
    transcript.append(Message::new(Author::User, "Again"));

    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(transcript.snapshot().messages.len(), 2);
}
