//! Shared fixtures for unit tests: an in-memory writer, a log capture and a
//! scripted completion backend.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;

use crate::client::{Completion, CompletionBackend, CompletionRequest};
use crate::error::{Error, Result};
use crate::logging::LineFormat;

/// Cloneable in-memory writer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's log lines into a buffer until the guard is dropped.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, SharedBuf) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(move || writer.clone()),
    );
    (tracing::subscriber::set_default(subscriber), buf)
}

/// Replies with canned texts in order; `None` entries fail with a 500.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// User turns of every request received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r.messages.last().map(|m| m.content.clone()))
            .collect()
    }
}

impl CompletionBackend for ScriptedBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(text) => Ok(Completion {
                total_tokens: text.len() as u64,
                text,
            }),
            None => Err(Error::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }),
        }
    }
}
