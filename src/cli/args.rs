use clap::Parser;
use std::path::PathBuf;

use promptpress::client::openai::DEFAULT_BASE_URL;
use promptpress::core::params::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
use promptpress::logging::DEFAULT_LOG_FILE;
use promptpress::CollisionPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "promptpress",
    version,
    about = "Generate Markdown files from an OpenAI-compatible chat API"
)]
pub struct CliArgs {
    /// Path to a JSON file containing an array of prompts (batch mode).
    /// Without it, a single prompt is read from standard input.
    #[arg(long)]
    pub prompts: Option<PathBuf>,

    /// Chat model to use
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum number of tokens in each reply
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Directory receiving the generated `<slug>.md` files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// What to do when two documents derive the same file name
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Overwrite)]
    pub on_collision: CollisionPolicy,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 600)]
    pub timeout: u64,

    /// Log file (rotated at 5 MB, 3 backups kept)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable the terminal spinner shown while waiting for a reply
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
