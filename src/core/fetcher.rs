//! One prompt in, one [`GenerationResult`] out.
//!
//! The fetcher owns everything a request needs (backend, model, token cap,
//! system instruction, whether to animate) so callers only pass the prompt.
use std::time::Instant;

use tracing::{error, info};

use crate::client::{CompletionBackend, CompletionRequest, DEFAULT_SYSTEM_PROMPT, Message};
use crate::core::params::GenerationParams;
use crate::progress::Spinner;
use crate::types::GenerationResult;

pub struct ResponseFetcher<B> {
    backend: B,
    model: String,
    max_tokens: u32,
    system_prompt: String,
    progress: bool,
}

impl<B: CompletionBackend> ResponseFetcher<B> {
    /// Fetcher using the bundled system instruction, with the spinner off.
    pub fn new(backend: B, params: &GenerationParams) -> Self {
        Self {
            backend,
            model: params.model.clone(),
            max_tokens: params.max_tokens,
            system_prompt: DEFAULT_SYSTEM_PROMPT.trim().to_string(),
            progress: false,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Show the terminal spinner on stdout while a request is in flight.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn request_for(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(self.system_prompt.clone()),
                Message::user(prompt),
            ],
            max_tokens: self.max_tokens,
        }
    }

    /// Send `prompt` once and wait for the reply.
    ///
    /// Any failure is logged and yields `None`; callers skip the prompt.
    pub fn fetch(&self, prompt: &str) -> Option<GenerationResult> {
        let request = self.request_for(prompt);
        info!("Sending prompt: {}", prompt);

        let spinner = if self.progress {
            Spinner::stdout()
        } else {
            Spinner::disabled()
        };

        let start = Instant::now();
        let outcome = self.backend.complete(&request);
        let elapsed = start.elapsed();
        spinner.finish(outcome.is_ok());

        match outcome {
            Ok(completion) => {
                let result = GenerationResult {
                    text: completion.text,
                    elapsed,
                    total_tokens: completion.total_tokens,
                };
                info!(
                    "Received response in {:.2} seconds using {} tokens.",
                    result.elapsed_secs(),
                    result.total_tokens
                );
                info!("Response content: {}", result.text);
                Some(result)
            }
            Err(e) => {
                error!("Error during API call: {}", e);
                None
            }
        }
    }
}
