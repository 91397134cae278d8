use axum::{
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const MISSING_API_KEY_MESSAGE: &str = "API key is not configured.";
pub const INVALID_INPUT_MESSAGE: &str = "Missing type or prompt in request body.";
pub const INVALID_UPSTREAM_RESPONSE_MESSAGE: &str = "Invalid response structure from Groq API.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request body rejected: {0}")]
    BodyRejected(#[source] BytesRejection),

    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error("Groq API returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Invalid response structure from Groq API")]
    InvalidUpstreamResponse,

    #[error("Upstream content is not valid JSON: {0}")]
    UpstreamContentNotJson(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::BodyRejected(rejection) => rejection.status(),
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Anything not explicitly classified collapses to the generic message,
    /// so internal details never reach the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string(),
            Self::InvalidInput(_) => INVALID_INPUT_MESSAGE.to_string(),
            Self::BodyRejected(rejection) => rejection.body_text(),
            Self::MethodNotAllowed(method) => format!("Method {} Not Allowed", method),
            Self::Upstream { body, .. } => format!("Groq API error: {}", body),
            Self::InvalidUpstreamResponse => INVALID_UPSTREAM_RESPONSE_MESSAGE.to_string(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// True for failures that fall through to the catch-all response.
    pub fn is_unexpected(&self) -> bool {
        !matches!(
            self,
            Self::MissingApiKey
                | Self::InvalidInput(_)
                | Self::BodyRejected(_)
                | Self::MethodNotAllowed(_)
                | Self::Upstream { .. }
                | Self::InvalidUpstreamResponse
        )
    }
}
