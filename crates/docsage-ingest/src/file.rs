//! File text extraction keyed by extension.

use std::path::Path;

use docsage_core::Result;

use crate::{docx, pdf, tabular};

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Word,
    Spreadsheet,
    Csv,
    Pdf,
    Unknown,
}

impl FileType {
    /// Detect file type from an extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => Self::PlainText,
            "docx" => Self::Word,
            "xlsx" => Self::Spreadsheet,
            "csv" => Self::Csv,
            "pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }
}

/// Extract text content from a file.
///
/// Returns `None` for unsupported extensions; those files are skipped
/// without being treated as an error.
pub fn extract_text(path: &Path) -> Result<Option<String>> {
    match FileType::from_path(path) {
        FileType::PlainText => Ok(Some(std::fs::read_to_string(path)?)),
        FileType::Word => docx::extract(path).map(Some),
        FileType::Spreadsheet => tabular::extract_xlsx(path).map(Some),
        FileType::Csv => tabular::extract_csv(path).map(Some),
        FileType::Pdf => pdf::extract(path).map(Some),
        FileType::Unknown => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions_case_insensitively() {
        assert_eq!(FileType::from_extension("txt"), FileType::PlainText);
        assert_eq!(FileType::from_extension("DOCX"), FileType::Word);
        assert_eq!(FileType::from_extension("Xlsx"), FileType::Spreadsheet);
        assert_eq!(FileType::from_extension("csv"), FileType::Csv);
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
    }

    #[test]
    fn other_extensions_are_unknown() {
        assert_eq!(FileType::from_extension("exe"), FileType::Unknown);
        assert_eq!(FileType::from_extension("md"), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("no_extension")), FileType::Unknown);
    }

    #[test]
    fn unsupported_files_extract_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "ignored").unwrap();

        assert!(extract_text(&path).unwrap().is_none());
    }
}
