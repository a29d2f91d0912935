use anyhow::Result;
use async_trait::async_trait;

/// Outcome of one generation request that reached the service and came back
/// with a success status. `NoReply` marks a response body missing the
/// expected reply path; the dispatcher substitutes placeholder text for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Reply(String),
    NoReply,
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the configuration can reach the generation
    /// service. Failures are logged and never block submissions.
    async fn health_check(&self) -> Result<()>;

    /// Sends the trimmed user input as the sole content of exactly one
    /// generation request and extracts the reply text.
    async fn generate(&self, text: &str) -> Result<Completion>;
}
