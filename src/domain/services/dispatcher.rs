#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::Completion;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Transcript;
use crate::domain::models::TranscriptSnapshot;

/// Substituted when a successful response is missing the reply text.
pub const FALLBACK_REPLY: &str = "No reply";

/// Committed in place of a reply when the request fails outright.
pub const FETCH_ERROR_REPLY: &str = "Error fetching response";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One request went out and its result was committed to the transcript.
    Dispatched,
    /// The input trimmed down to nothing. The transcript was left untouched.
    Blank,
    /// A request was already in flight. The transcript was left untouched.
    Rejected,
}

/// Turns a user submission into one outbound request and one or two
/// transcript mutations. Owns the transcript; observers receive
/// `Event::TranscriptChanged` snapshots after every mutation.
pub struct Dispatcher {
    backend: BackendBox,
    transcript: Transcript,
}

impl Dispatcher {
    pub fn new(backend: BackendBox) -> Dispatcher {
        return Dispatcher {
            backend,
            transcript: Transcript::default(),
        };
    }

    pub fn snapshot(&self) -> TranscriptSnapshot {
        return self.transcript.snapshot();
    }

    /// Runs one submission cycle: commit the user message, hold the pending
    /// flag for the duration of the outbound request, commit the reply.
    /// Request failures surface as an error-typed assistant message and are
    /// never re-thrown.
    pub async fn submit(
        &mut self,
        raw_input: &str,
        tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<SubmitOutcome> {
        let text = raw_input.trim();
        if text.is_empty() {
            return Ok(SubmitOutcome::Blank);
        }
        if self.transcript.pending() {
            tracing::warn!("submission rejected, a request is already in flight");
            return Ok(SubmitOutcome::Rejected);
        }

        self.transcript.append(Message::new(Author::User, text));
        tx.send(Event::TranscriptChanged(self.transcript.snapshot()))?;

        self.transcript.set_pending(true);
        tx.send(Event::TranscriptChanged(self.transcript.snapshot()))?;

        let reply = match self.backend.generate(text).await {
            Ok(Completion::Reply(reply_text)) => Message::new(Author::Assistant, &reply_text),
            Ok(Completion::NoReply) => Message::new(Author::Assistant, FALLBACK_REPLY),
            Err(err) => {
                tracing::error!(error = ?err, "generation request failed");
                Message::new_with_type(Author::Assistant, MessageType::Error, FETCH_ERROR_REPLY)
            }
        };

        self.transcript.append(reply);
        self.transcript.set_pending(false);
        tx.send(Event::TranscriptChanged(self.transcript.snapshot()))?;

        return Ok(SubmitOutcome::Dispatched);
    }
}

pub struct DispatcherService {}

impl DispatcherService {
    /// Receives prompt submissions from the view and runs each cycle to
    /// completion before reading the next, serializing outbound requests
    /// within the session.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        if let Err(err) = backend.health_check().await {
            tracing::warn!(error = ?err, "generation service health check failed");
        }

        let mut dispatcher = Dispatcher::new(backend);

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            match action.unwrap() {
                Action::SubmitPrompt(text) => {
                    dispatcher.submit(&text, &tx).await?;
                }
            }
        }
    }
}
