use async_trait::async_trait;
use groq_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient, ResponseMessage},
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A call observed by [`MockLlmClient`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: ChatCompletionRequest,
}

/// Mock LLM client that replays queued outcomes and records every call.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    outcomes: Mutex<VecDeque<Result<ChatCompletionResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: ChatCompletionResponse) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues a response whose first choice carries `content`.
    pub fn with_content(self, content: &str) -> Self {
        self.with_response(create_mock_chat_response(content))
    }

    pub fn with_error(self, error: Error) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            request,
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::internal("No more mock responses available")))
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("chatcmpl-mock".to_string()),
        model: Some("llama3.1-70b-versatile".to_string()),
        choices: vec![Some(Choice {
            index: 0,
            message: Some(ResponseMessage {
                role: Some("assistant".to_string()),
                content: Some(content.to_string()),
            }),
            finish_reason: Some("stop".to_string()),
        })],
        usage: None,
    }
}
