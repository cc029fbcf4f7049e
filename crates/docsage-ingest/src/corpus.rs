//! Corpus assembly — folder enumeration, per-file statistics, summary.

use std::path::Path;

use tracing::warn;

use docsage_core::{Error, Result};

use crate::file;

/// Sentinel corpus used when no file yields any text.
pub const NO_READABLE_FILES: &str = "No readable files found.";

/// Per-file statistics gathered while loading.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: String,
    pub char_count: usize,
    pub word_count: usize,
}

/// Aggregated text of every readable file in the target folder.
///
/// Built once at startup and read-only for the rest of the session. Each
/// file's text is prefixed with a `--- <file name> ---` delimiter line.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub text: String,
    pub files: Vec<FileRecord>,
}

impl Corpus {
    /// Total character count of the aggregated text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Print the load summary and per-file statistics to stdout.
    ///
    /// Prints nothing for the sentinel corpus; the loader already warned.
    pub fn print_summary(&self) {
        if self.files.is_empty() {
            return;
        }
        println!(
            "Loaded {} characters from {} files",
            self.char_count(),
            self.files.len()
        );
        println!("\nFile Statistics:");
        for record in &self.files {
            println!(
                "{}: {} characters, {} words",
                record.name, record.char_count, record.word_count
            );
        }
    }
}

/// Load every readable file in `dir` into a single corpus.
///
/// Immediate children only, processed in file-name order. A file that fails
/// to parse is logged and skipped; it never aborts the load. Returns the
/// sentinel corpus when nothing yields text.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "documents folder does not exist or is not a directory: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut blocks = Vec::new();
    let mut files = Vec::new();

    for path in &paths {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let text = match file::extract_text(path) {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => continue,
            Err(e) => {
                warn!("Error reading {}: {}", name, e);
                continue;
            }
        };

        files.push(FileRecord {
            name: name.clone(),
            char_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
        });
        blocks.push(format!("\n\n--- {} ---\n{}", name, text));
    }

    if blocks.is_empty() {
        warn!("No readable content found in {}", dir.display());
        return Ok(Corpus {
            text: NO_READABLE_FILES.to_string(),
            files,
        });
    }

    Ok(Corpus {
        text: blocks.join("\n"),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_content_lands_in_the_corpus_with_stats() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "one two three").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        assert!(corpus.text.contains("--- notes.txt ---"));
        assert!(corpus.text.contains("one two three"));
        assert_eq!(corpus.files.len(), 1);
        assert_eq!(corpus.files[0].name, "notes.txt");
        assert_eq!(corpus.files[0].char_count, 13);
        assert_eq!(corpus.files[0].word_count, 3);
    }

    #[test]
    fn unsupported_files_contribute_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("keep.txt"), "kept").unwrap();
        std::fs::write(dir.path().join("skip.bin"), "skipped").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        assert_eq!(corpus.files.len(), 1);
        assert!(!corpus.text.contains("skipped"));
        assert!(!corpus.text.contains("skip.bin"));
    }

    #[test]
    fn empty_folder_yields_the_sentinel_corpus() {
        let dir = tempfile::tempdir().unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        assert_eq!(corpus.text, NO_READABLE_FILES);
        assert!(corpus.files.is_empty());
    }

    #[test]
    fn missing_folder_is_a_config_error() {
        let err = load_corpus(Path::new("/nonexistent/docsage-test")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn corrupt_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.txt"), "still here").unwrap();
        std::fs::write(dir.path().join("broken.docx"), b"not a zip").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        assert_eq!(corpus.files.len(), 1);
        assert!(corpus.text.contains("still here"));
    }

    #[test]
    fn files_appear_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "second").unwrap();
        std::fs::write(dir.path().join("a.txt"), "first").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        let a = corpus.text.find("--- a.txt ---").unwrap();
        let b = corpus.text.find("--- b.txt ---").unwrap();
        assert!(a < b);
    }

    #[test]
    fn whitespace_only_files_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blank.txt"), "   \n\t\n").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();

        assert_eq!(corpus.text, NO_READABLE_FILES);
        assert!(corpus.files.is_empty());
    }
}
