//! Canned response provider.
//!
//! Answers from a fixed list of wellness replies, cycling through them in
//! order. Used when no completion API is configured and as a deterministic
//! fixture in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

pub const CANNED_REPLIES: [&str; 5] = [
    "Based on your symptoms, I recommend staying hydrated and getting adequate rest. However, if symptoms persist for more than 48 hours, please consult with a healthcare professional.",
    "That's a great question about nutrition! A balanced diet rich in fruits, vegetables, and lean proteins can significantly improve your energy levels and overall health.",
    "For better sleep quality, try establishing a consistent bedtime routine, avoiding screens before bed, and keeping your bedroom cool and dark.",
    "Regular exercise is excellent for cardiovascular health. Start with 30 minutes of moderate activity 3-4 times per week and gradually increase intensity.",
    "Stress management is crucial for overall health. Consider meditation, deep breathing exercises, or yoga to help manage daily stress levels.",
];

pub struct CannedResponseProvider {
    replies: Vec<String>,
    next: AtomicUsize,
}

impl CannedResponseProvider {
    /// Provider over the built-in wellness replies.
    pub fn new() -> Self {
        Self::with_replies(CANNED_REPLIES.iter().map(|r| r.to_string()).collect())
    }

    /// Provider over caller-supplied replies.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies,
            next: AtomicUsize::new(0),
        }
    }
}

impl Default for CannedResponseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AIProvider for CannedResponseProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if self.replies.is_empty() {
            return Err(AIError::unavailable("no canned replies configured"));
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.replies.len();

        Ok(CompletionResponse {
            content: self.replies[index].clone(),
            model: "canned".to_string(),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::default(),
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("canned", "canned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use uuid::Uuid;

    fn request() -> CompletionRequest {
        CompletionRequest::new(UserId::from_uuid(Uuid::new_v4()))
    }

    #[tokio::test]
    async fn cycles_through_replies_in_order() {
        let provider = CannedResponseProvider::with_replies(vec!["a".into(), "b".into()]);

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(provider.complete(request()).await.unwrap().content);
        }
        assert_eq!(seen, vec!["a", "b", "a"]);
    }

    #[tokio::test]
    async fn default_replies_start_with_hydration_advice() {
        let reply = CannedResponseProvider::new().complete(request()).await.unwrap();
        assert_eq!(reply.content, CANNED_REPLIES[0]);
    }

    #[tokio::test]
    async fn empty_reply_list_is_unavailable() {
        let provider = CannedResponseProvider::with_replies(Vec::new());
        assert!(matches!(
            provider.complete(request()).await,
            Err(AIError::Unavailable { .. })
        ));
    }
}
