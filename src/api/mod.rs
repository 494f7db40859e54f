//! High-level entry points: turn one prompt into a Markdown file, or run a
//! whole batch file prompt by prompt. Prefer these over wiring the fetcher,
//! formatter and writer by hand.
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::client::CompletionBackend;
use crate::core::fetcher::ResponseFetcher;
use crate::core::format::format_document;
use crate::error::Result;
use crate::io::{MarkdownWriter, load_prompts};

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    /// Prompts whose document was written
    pub processed: usize,
    /// Blank prompts that were never sent
    pub skipped: usize,
    /// 1-based indices of prompts that produced no file
    pub failed: Vec<usize>,
}

/// Fetch a response for `prompt`, format it and save it as `<slug>.md`.
///
/// Returns the written path, or `None` if the fetch or the write failed
/// (both logged).
pub fn generate_document<B: CompletionBackend>(
    prompt: &str,
    fetcher: &ResponseFetcher<B>,
    writer: &MarkdownWriter,
) -> Option<PathBuf> {
    let Some(result) = fetcher.fetch(prompt) else {
        error!("Failed to fetch a response.");
        return None;
    };
    let document = format_document(&result.text);
    writer.save(&document.file_name(), &document.body)
}

/// Process every prompt of a JSON batch file, in order.
///
/// A prompt that fails is logged and skipped; only an unreadable or
/// malformed batch file is returned as an error, before any request is made.
pub fn run_batch<B: CompletionBackend>(
    path: &Path,
    fetcher: &ResponseFetcher<B>,
    writer: &MarkdownWriter,
) -> Result<BatchReport> {
    let prompts = load_prompts(path)?;
    let total = prompts.len();

    info!("Loaded {} prompts from {}", total, path.display());

    let mut report = BatchReport {
        total,
        ..BatchReport::default()
    };

    for (i, prompt) in prompts.iter().enumerate() {
        let index = i + 1;
        info!("Processing prompt {}/{}...", index, total);

        if prompt.trim().is_empty() {
            warn!("Skipping blank prompt {}.", index);
            report.skipped += 1;
            continue;
        }

        match fetcher.fetch(prompt) {
            Some(result) => {
                let document = format_document(&result.text);
                match writer.save(&document.file_name(), &document.body) {
                    Some(_) => report.processed += 1,
                    None => report.failed.push(index),
                }
            }
            None => {
                error!("Failed to process prompt {}.", index);
                report.failed.push(index);
            }
        }
    }

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Failed: {}", report.failed.len());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::params::GenerationParams;
    use crate::error::Error;
    use crate::test_support::{ScriptedBackend, capture_logs};
    use crate::types::CollisionPolicy;

    fn batch_file(dir: &Path, prompts: &str) -> PathBuf {
        let path = dir.join("prompts.json");
        fs::write(&path, prompts).unwrap();
        path
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_two_prompt_batch_writes_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = batch_file(dir.path(), r#"["Write about caching", "Write about TLS"]"#);
        let out = dir.path().join("content");

        let fetcher = ResponseFetcher::new(
            ScriptedBackend::new([
                Some("**Caching Done Right**\nUse TTLs."),
                Some("TLS in Practice\nCertificates."),
            ]),
            &GenerationParams::default(),
        );
        let writer = MarkdownWriter::new(&out, CollisionPolicy::Overwrite);

        let report = run_batch(&path, &fetcher, &writer).unwrap();

        assert_eq!(
            report,
            BatchReport {
                total: 2,
                processed: 2,
                skipped: 0,
                failed: vec![],
            }
        );
        assert_eq!(file_names(&out), vec!["caching-done-right.md", "tls-in-practice.md"]);
        assert_eq!(
            fs::read_to_string(out.join("caching-done-right.md")).unwrap(),
            "# Caching Done Right\nUse TTLs."
        );
        assert_eq!(
            fetcher.backend().prompts(),
            vec!["Write about caching", "Write about TLS"]
        );
    }

    #[test]
    fn test_failed_prompt_does_not_abort_batch() {
        let (_guard, logs) = capture_logs();
        let dir = tempfile::tempdir().unwrap();
        let path = batch_file(dir.path(), r#"["one", "two", "three"]"#);
        let out = dir.path().join("content");

        let fetcher = ResponseFetcher::new(
            ScriptedBackend::new([Some("First Post\nbody"), None, Some("Third Post\nbody")]),
            &GenerationParams::default(),
        );
        let writer = MarkdownWriter::new(&out, CollisionPolicy::Overwrite);

        let report = run_batch(&path, &fetcher, &writer).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.failed, vec![2]);
        assert_eq!(file_names(&out), vec!["first-post.md", "third-post.md"]);

        let logs = logs.contents();
        assert!(logs.contains("[INFO] Processing prompt 1/3..."));
        assert!(logs.contains("[INFO] Processing prompt 3/3..."));
        assert!(logs.contains("[ERROR] Failed to process prompt 2."));
        assert_eq!(fetcher.backend().prompts(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_malformed_batch_file_makes_no_requests() {
        let dir = tempfile::tempdir().unwrap();
        let path = batch_file(dir.path(), r#"["fine", {"not": "a string"}]"#);
        let out = dir.path().join("content");

        let fetcher = ResponseFetcher::new(
            ScriptedBackend::new([Some("Never Sent")]),
            &GenerationParams::default(),
        );
        let writer = MarkdownWriter::new(&out, CollisionPolicy::Overwrite);

        let err = run_batch(&path, &fetcher, &writer).unwrap_err();
        assert!(matches!(err, Error::InvalidPromptFile { .. }));
        assert!(fetcher.backend().requests().is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_batch_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ResponseFetcher::new(ScriptedBackend::new([Some("x")]), &GenerationParams::default());
        let writer = MarkdownWriter::new(dir.path().join("content"), CollisionPolicy::Overwrite);

        let err = run_batch(&dir.path().join("missing.json"), &fetcher, &writer).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(fetcher.backend().requests().is_empty());
    }

    #[test]
    fn test_blank_prompts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = batch_file(dir.path(), r#"["  ", "Real prompt", ""]"#);
        let out = dir.path().join("content");

        let fetcher = ResponseFetcher::new(
            ScriptedBackend::new([Some("Real Answer\nbody")]),
            &GenerationParams::default(),
        );
        let writer = MarkdownWriter::new(&out, CollisionPolicy::Overwrite);

        let report = run_batch(&path, &fetcher, &writer).unwrap();
        assert_eq!(report.skipped, 2);
        assert_eq!(report.processed, 1);
        assert_eq!(fetcher.backend().prompts(), vec!["Real prompt"]);
    }

    #[test]
    fn test_colliding_slugs_follow_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = batch_file(dir.path(), r#"["a", "b"]"#);
        let replies = [Some("Same Title\nfirst"), Some("Same Title\nsecond")];

        let overwrite_out = dir.path().join("overwrite");
        let fetcher = ResponseFetcher::new(ScriptedBackend::new(replies), &GenerationParams::default());
        run_batch(&path, &fetcher, &MarkdownWriter::new(&overwrite_out, CollisionPolicy::Overwrite)).unwrap();
        assert_eq!(file_names(&overwrite_out), vec!["same-title.md"]);
        assert_eq!(
            fs::read_to_string(overwrite_out.join("same-title.md")).unwrap(),
            "# Same Title\nsecond"
        );

        let suffix_out = dir.path().join("suffix");
        let fetcher = ResponseFetcher::new(ScriptedBackend::new(replies), &GenerationParams::default());
        run_batch(&path, &fetcher, &MarkdownWriter::new(&suffix_out, CollisionPolicy::Suffix)).unwrap();
        assert_eq!(file_names(&suffix_out), vec!["same-title-2.md", "same-title.md"]);
    }

    #[test]
    fn test_generate_document_single_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MarkdownWriter::new(dir.path(), CollisionPolicy::Overwrite);

        let ok = ResponseFetcher::new(
            ScriptedBackend::new([Some("**Hello World**\nSome body")]),
            &GenerationParams::default(),
        );
        let path = generate_document("hello", &ok, &writer).unwrap();
        assert_eq!(path, dir.path().join("hello-world.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "# Hello World\nSome body");

        let failing = ResponseFetcher::new(ScriptedBackend::new([None::<String>]), &GenerationParams::default());
        assert!(generate_document("hello", &failing, &writer).is_none());
    }
}
