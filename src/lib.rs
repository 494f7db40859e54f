#![doc = r##"
promptpress: turn prompts into titled Markdown documents.

This crate sends prompts to an OpenAI-compatible chat-completions API, makes
sure each reply starts with an H1 heading, derives a file name from that
heading and writes the result as `<slug>.md`. It powers the `promptpress`
CLI (one interactive prompt, or a JSON batch file) and can be embedded in
your own Rust applications.

Quick start: one prompt to one file
-----------------------------------
```rust,no_run
use std::time::Duration;
use promptpress::{
    generate_document, CollisionPolicy, GenerationParams, MarkdownWriter, OpenAiClient,
    ResponseFetcher,
};

fn main() -> promptpress::Result<()> {
    let params = GenerationParams::default();
    let client = OpenAiClient::new("sk-...", "https://api.openai.com/v1", Duration::from_secs(600))?;
    let fetcher = ResponseFetcher::new(client, &params);
    let writer = MarkdownWriter::new(&params.output_dir, CollisionPolicy::Overwrite);

    if let Some(path) = generate_document("Write about HTTP caching", &fetcher, &writer) {
        println!("wrote {}", path.display());
    }
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use std::time::Duration;
use promptpress::{run_batch, GenerationParams, MarkdownWriter, OpenAiClient, ResponseFetcher};

fn main() -> promptpress::Result<()> {
    let params = GenerationParams::default();
    let client = OpenAiClient::new("sk-...", "https://api.openai.com/v1", Duration::from_secs(600))?;
    let fetcher = ResponseFetcher::new(client, &params);
    let writer = MarkdownWriter::new(&params.output_dir, params.collision);

    let report = run_batch(Path::new("prompts.json"), &fetcher, &writer)?;
    println!("processed={} skipped={} failed={:?}", report.processed, report.skipped, report.failed);
    Ok(())
}
```

Formatting only
---------------
```rust
use promptpress::format_document;

let doc = format_document("**Hello World**\nSome body");
assert_eq!(doc.body, "# Hello World\nSome body");
assert_eq!(doc.slug, "hello-world");
```

Error handling
--------------
Fallible public functions return `promptpress::Result<T>`. Per-prompt
failures (network, API, disk) are logged through `tracing` and surface as
`None` instead, so a batch never stops on one bad prompt.

Useful modules
--------------
- [`api`]: high-level, ergonomic entry points.
- [`core`]: parameters, the response fetcher and title formatting.
- [`client`]: the `CompletionBackend` seam and the OpenAI client.
- [`io`]: batch file loading and Markdown output.
- [`logging`]: stdout + size-rotated file logging.
- [`error`]: crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod client;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod progress;
pub mod types;

#[cfg(test)]
mod test_support;

// Curated public API surface
pub use crate::core::format::{FormattedDocument, format_document, slugify};
pub use crate::core::params::GenerationParams;
pub use error::{Error, Result};
pub use types::{CollisionPolicy, GenerationResult};

pub use client::{Completion, CompletionBackend, CompletionRequest, Message, OpenAiClient, Role};
pub use crate::core::fetcher::ResponseFetcher;
pub use io::{MarkdownWriter, load_prompts};

pub use api::{BatchReport, generate_document, run_batch};
