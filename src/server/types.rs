use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated inbound body: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Caller-supplied tag such as "feedback" or "news". Not interpreted.
    pub kind: String,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
struct RawGenerateRequest {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
}

impl GenerateRequest {
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::invalid_input(format!("body is not JSON: {}", e)))?;

        if !value.is_object() {
            return Err(Error::invalid_input("body is not a JSON object"));
        }

        let raw: RawGenerateRequest = serde_json::from_value(value)
            .map_err(|e| Error::invalid_input(format!("malformed fields: {}", e)))?;

        match (non_empty(raw.kind), non_empty(raw.prompt)) {
            (Some(kind), Some(prompt)) => Ok(Self { kind, prompt }),
            _ => Err(Error::invalid_input("type and prompt are required")),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
