use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load the ordered prompt list of a batch file.
///
/// The file must be UTF-8 JSON whose top-level value is an array of strings.
pub fn load_prompts(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    let invalid = |reason: String| Error::InvalidPromptFile {
        path: path.display().to_string(),
        reason,
    };

    let items = value
        .as_array()
        .ok_or_else(|| invalid(format!("expected a JSON array, found {}", kind(&value))))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                invalid(format!("element {} is {}, expected a string", i + 1, kind(item)))
            })
        })
        .collect()
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
