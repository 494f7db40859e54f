//! File I/O: loading batch prompt files and writing Markdown output.
pub mod prompts;
pub use prompts::load_prompts;

pub mod writer;
pub use writer::MarkdownWriter;
