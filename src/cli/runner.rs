use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use tracing::{error, info};

use promptpress::client::OpenAiClient;
use promptpress::core::fetcher::ResponseFetcher;
use promptpress::core::params::GenerationParams;
use promptpress::io::MarkdownWriter;
use promptpress::logging::{self, LoggingConfig};
use promptpress::api;

use super::args::CliArgs;
use super::errors::AppError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

fn api_key() -> Result<String, AppError> {
    env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(AppError::MissingApiKey { var: API_KEY_VAR })
}

fn read_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "Enter your prompt: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    // checked before anything touches the disk or the network
    let api_key = api_key()?;

    let _log_guard = logging::init(&LoggingConfig {
        file: Some(args.log_file.clone()),
        ..LoggingConfig::default()
    })
    .map_err(AppError::Logging)?;

    info!("promptpress started.");

    let params = GenerationParams {
        model: args.model,
        max_tokens: args.max_tokens,
        output_dir: args.output_dir,
        collision: args.on_collision,
    };

    let client = OpenAiClient::new(api_key, args.base_url, Duration::from_secs(args.timeout))?;
    let progress = !args.no_progress && io::stdout().is_terminal();
    let fetcher = ResponseFetcher::new(client, &params).with_progress(progress);
    let writer = MarkdownWriter::new(&params.output_dir, params.collision);

    match args.prompts {
        Some(path) => {
            info!("Starting batch from: {:?}", path);
            info!("Output directory: {:?}", writer.output_dir());

            if let Err(e) = api::run_batch(&path, &fetcher, &writer) {
                error!("Error processing prompts from file: {}", e);
            }
        }
        None => {
            let prompt = read_prompt(&mut io::stdin().lock(), &mut io::stdout())?;
            if prompt.trim().is_empty() {
                error!("Prompt cannot be empty.");
                return Err(AppError::EmptyPrompt);
            }

            if let Some(path) = api::generate_document(&prompt, &fetcher, &writer) {
                info!("Successfully generated: {:?}", path);
            }
        }
    }

    Ok(())
}
