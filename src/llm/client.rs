use super::types::*;
use crate::{Error, Result, config::GroqConfig};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Body actually sent upstream: the request parameters plus the model.
#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    #[serde(flatten)]
    request: &'a ChatCompletionRequest,
}

pub struct GroqClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &GroqConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.completions_url(),
            model: config.model.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages using model {}",
            request.messages.len(),
            self.model
        );

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&CompletionBody {
                model: &self.model,
                request: &request,
            })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Upstream { status, body: text });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
