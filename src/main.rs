//! promptpress CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: load `.env`, parse args, dispatch to
//! interactive or batch generation, and exit with the appropriate status.
//! For programmatic use, prefer the library API (`promptpress::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = cli::CliArgs::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
