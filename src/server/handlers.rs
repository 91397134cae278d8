use super::types::{ErrorResponse, GenerateRequest};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, LlmClient},
};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    /// Bearer credential for the Groq API. `None` when not provisioned.
    pub api_key: Option<String>,
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(api_key: Option<String>, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            llm,
        }
    }
}

pub async fn generate(
    State(state): State<AppState>,
    method: Method,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match process(&state, &method, body).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn process(
    state: &AppState,
    method: &Method,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Value> {
    if method != Method::POST {
        return Err(Error::MethodNotAllowed(method.clone()));
    }

    let api_key = state.api_key.as_deref().ok_or(Error::MissingApiKey)?;

    let body = body.map_err(Error::BodyRejected)?;
    let request = GenerateRequest::parse(&body)?;
    info!(
        "Received {} generation request ({} chars)",
        request.kind,
        request.prompt.len()
    );

    let completion = state
        .llm
        .create_chat_completion(api_key, ChatCompletionRequest::json_object(request.prompt))
        .await?;

    let content = completion
        .first_content()
        .ok_or(Error::InvalidUpstreamResponse)?;

    serde_json::from_str(content).map_err(Error::UpstreamContentNotJson)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_unexpected() {
            error!("Internal Server Error: {}", self);
        } else if let Error::Upstream { status, body } = &self {
            error!("Groq API Error ({}): {}", status, body);
        } else {
            warn!("Request rejected with {}: {}", status, self);
        }

        match self {
            Error::MethodNotAllowed(_) => (
                status,
                [(header::ALLOW, "POST")],
                self.public_message(),
            )
                .into_response(),
            _ => (status, Json(ErrorResponse::new(self.public_message()))).into_response(),
        }
    }
}
