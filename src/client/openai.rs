//! Blocking client for OpenAI-compatible `chat/completions` endpoints.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{Completion, CompletionBackend, CompletionRequest};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiClient {
    /// Create a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// `timeout` bounds a whole request, including reading the reply.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl CompletionBackend for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        debug!(
            "POST {} (model={}, max_tokens={})",
            self.endpoint(),
            request.model,
            request.max_tokens
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<Completion> {
    let completion: ChatCompletionResponse = serde_json::from_str(body)?;

    let text = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("no choices in response"))?
        .message
        .content
        .ok_or_else(|| Error::invalid_response("first choice has no message content"))?;

    let total_tokens = completion
        .usage
        .ok_or_else(|| Error::invalid_response("no usage in response"))?
        .total_tokens;

    Ok(Completion { text, total_tokens })
}

/// Upstream `error.message` when the body is an OpenAI error envelope,
/// otherwise a short preview of the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
    }
}
