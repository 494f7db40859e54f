//! Shared types used across promptpress.
//! Includes `CollisionPolicy` for output naming and `GenerationResult`,
//! the outcome of one successful API call.
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when `<slug>.md` already exists in the output directory.
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the existing file; last write wins.
    #[default]
    Overwrite,
    /// Keep the existing file and write `<slug>-2.md`, `<slug>-3.md`, ...
    Suffix,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Suffix => "suffix",
        };
        write!(f, "{}", s)
    }
}

/// Text returned by one API call together with its cost.
///
/// A failed call has no `GenerationResult` at all; see
/// [`ResponseFetcher::fetch`](crate::core::fetcher::ResponseFetcher::fetch).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub text: String,
    pub elapsed: Duration,
    pub total_tokens: u64,
}

impl GenerationResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
