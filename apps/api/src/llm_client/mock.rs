use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatProvider, ChatRequest, LlmError};

/// A scripted reply for `MockChatProvider`.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail { status: u16, message: String },
}

impl MockReply {
    pub fn text(content: impl Into<String>) -> Self {
        MockReply::Text(content.into())
    }

    pub fn fail(status: u16, message: impl Into<String>) -> Self {
        MockReply::Fail {
            status,
            message: message.into(),
        }
    }
}

/// Owned copy of the last request, for prompt assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// In-memory provider that replays queued replies and counts calls.
/// An exhausted queue behaves like a provider returning no content.
pub struct MockChatProvider {
    replies: Mutex<VecDeque<MockReply>>,
    calls: AtomicUsize,
    last_request: Mutex<Option<RecordedRequest>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_reply(reply: MockReply) -> Self {
        let mock = Self::new();
        mock.add_reply(reply);
        mock
    }

    pub fn add_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn chat_complete(&self, request: ChatRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(RecordedRequest {
            system: request.system.to_string(),
            user: request.user.to_string(),
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(content)) => Ok(content),
            Some(MockReply::Fail { status, message }) => Err(LlmError::Api { status, message }),
            None => Err(LlmError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ChatRequest<'static> {
        ChatRequest {
            system: "system",
            user: "user",
            temperature: 0.0,
            max_output_tokens: 16,
        }
    }

    #[tokio::test]
    async fn test_replays_in_order_and_counts() {
        let mock = MockChatProvider::new();
        mock.add_reply(MockReply::text("first"));
        mock.add_reply(MockReply::fail(500, "boom"));

        assert_eq!(mock.chat_complete(request()).await.unwrap(), "first");
        assert!(matches!(
            mock.chat_complete(request()).await,
            Err(LlmError::Api { status: 500, .. })
        ));
        assert!(matches!(
            mock.chat_complete(request()).await,
            Err(LlmError::EmptyContent)
        ));
        assert_eq!(mock.calls(), 3);
        assert_eq!(mock.last_request().unwrap().user, "user");
    }
}
