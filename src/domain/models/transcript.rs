#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;
use super::Message;

/// The ordered record of all messages exchanged in a session, together with
/// the flag marking an outbound request in flight. Messages are append-only;
/// there is no edit or delete.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: bool,
}

/// Read-only copy of the transcript handed to observers. The view layer
/// renders these and nothing else.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    pub messages: Vec<Message>,
    pub pending: bool,
}

impl Transcript {
    /// Appends to the end of the transcript. A user message that trims down
    /// to nothing is dropped, mirroring the dispatcher's submission guard so
    /// the store stays consistent when called directly.
    pub fn append(&mut self, message: Message) {
        if message.author == Author::User && message.text.trim().is_empty() {
            return;
        }

        self.messages.push(message);
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub fn pending(&self) -> bool {
        return self.pending;
    }

    pub fn snapshot(&self) -> TranscriptSnapshot {
        return TranscriptSnapshot {
            messages: self.messages.clone(),
            pending: self.pending,
        };
    }
}
