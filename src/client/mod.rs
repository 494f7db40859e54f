//! Chat-completion transport.
//!
//! [`CompletionBackend`] is the seam between the fetcher and the network:
//! [`OpenAiClient`] talks to an OpenAI-compatible endpoint, tests plug in
//! in-memory backends.
pub mod openai;

pub use openai::OpenAiClient;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Persona and formatting rules sent as the system turn of every request.
pub const DEFAULT_SYSTEM_PROMPT: &str = include_str!("system_prompt.md");

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One chat-completion call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

/// Generated text and the total tokens billed for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: u64,
}

pub trait CompletionBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}
