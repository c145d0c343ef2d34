//! The coach model seam. `AppState` holds an `Option<Arc<dyn CoachModel>>`;
//! production uses [`LlmClient`], tests use a scripted model.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError, TextStream};

#[async_trait]
pub trait CoachModel: Send + Sync {
    /// Starts a reply. Text arrives incrementally; dropping the stream cancels it.
    async fn stream_reply(&self, system: &str, prompt: &str) -> Result<TextStream, LlmError>;
}

#[async_trait]
impl CoachModel for LlmClient {
    async fn stream_reply(&self, system: &str, prompt: &str) -> Result<TextStream, LlmError> {
        self.stream_generate(system, prompt).await
    }
}
