use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::types::CollisionPolicy;

/// Writes Markdown files into a single output directory.
#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    output_dir: PathBuf,
    collision: CollisionPolicy,
}

impl MarkdownWriter {
    pub fn new(output_dir: impl Into<PathBuf>, collision: CollisionPolicy) -> Self {
        Self {
            output_dir: output_dir.into(),
            collision,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `content` to `<output_dir>/<filename>`, creating the directory if needed.
    ///
    /// Failures are logged, never returned; the path is `Some` only when the
    /// file was written.
    pub fn save(&self, filename: &str, content: &str) -> Option<PathBuf> {
        if let Err(e) = fs::create_dir_all(&self.output_dir) {
            error!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            );
            return None;
        }

        let path = self.target_path(filename);
        match fs::write(&path, content) {
            Ok(()) => {
                info!("File saved: {}", path.display());
                Some(path)
            }
            Err(e) => {
                error!("Failed to save file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn target_path(&self, filename: &str) -> PathBuf {
        let path = self.output_dir.join(filename);
        if self.collision == CollisionPolicy::Overwrite || !path.exists() {
            return path;
        }

        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{ext}")),
            None => (filename, String::new()),
        };
        (2..)
            .map(|n| self.output_dir.join(format!("{stem}-{n}{ext}")))
            .find(|candidate| !candidate.exists())
            .unwrap_or(path)
    }
}
