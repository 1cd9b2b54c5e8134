//! Mock AI Provider for testing.
//!
//! Returns queued replies or errors in order, then a default reply, and
//! records every request for later assertions.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Stay hydrated.")
//!     .with_error(AIError::network("connection reset"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const DEFAULT_REPLY: &str = "Mock reply";

/// Mock AI provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<Result<String, AIError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(content.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, response: Result<String, AIError>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    fn next_response(&self) -> Result<String, AIError> {
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Ok(DEFAULT_REPLY.to_string()))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }

        let content = self.next_response()?;
        Ok(CompletionResponse {
            usage: TokenUsage::new(10, (content.len() / 4) as u32),
            content,
            model: "mock-model".to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::MessageRole;
    use uuid::Uuid;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new(UserId::from_uuid(Uuid::new_v4()))
            .with_message(MessageRole::User, text)
    }

    #[tokio::test]
    async fn returns_responses_in_order_then_default() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(provider.complete(request("a")).await.unwrap().content, "first");
        assert_eq!(provider.complete(request("b")).await.unwrap().content, "second");
        assert_eq!(provider.complete(request("c")).await.unwrap().content, DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn returns_queued_error() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        let err = provider.complete(request("a")).await.unwrap_err();
        assert_eq!(err, AIError::AuthenticationFailed);
    }

    #[tokio::test]
    async fn tracks_calls() {
        let provider = MockAIProvider::new();
        provider.complete(request("hello")).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].last_user_message(), Some("hello"));
    }
}
