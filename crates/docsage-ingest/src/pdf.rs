//! PDF text extraction via lopdf.

use std::path::Path;

use docsage_core::{Error, Result};
use lopdf::Document;

/// Extract text from a PDF, page by page.
///
/// A page that yields no text contributes an empty string; pages are
/// joined with newlines in page order.
pub fn extract(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .map_err(|e| Error::Extract(format!("cannot load PDF: {}", e)))?;

    let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();

    let pages: Vec<String> = page_numbers
        .iter()
        .map(|n| doc.extract_text(&[*n]).unwrap_or_default())
        .collect();

    Ok(pages.join("\n"))
}
