use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::CollisionPolicy;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 7700;
pub const DEFAULT_OUTPUT_DIR: &str = "content";

/// Generation parameters suitable for config files and CLI defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    /// Upper bound on reply tokens sent with every request
    pub max_tokens: u32,
    /// Directory receiving `<slug>.md` files; created on demand
    pub output_dir: PathBuf,
    pub collision: CollisionPolicy,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            collision: CollisionPolicy::Overwrite,
        }
    }
}
