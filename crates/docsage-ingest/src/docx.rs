//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP archive whose document body lives in
//! `word/document.xml` (WordprocessingML). Body paragraphs are joined with
//! newlines; tables follow afterwards, one line per row with cell texts
//! joined by `" | "`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use docsage_core::{Error, Result};

/// Extract text from a `.docx` file.
pub fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| Error::Extract(format!("not a DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extract(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)?;

    Ok(document_text(&xml))
}

/// Walk the document body: collect paragraph texts, then table rows.
///
/// Nested tables are flattened into the enclosing cell's text.
fn document_text(xml: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut rows: Vec<String> = Vec::new();

    let mut table_depth = 0usize;
    let mut in_para = false;
    let mut para = String::new();
    let mut in_cell = false;
    let mut cell = String::new();
    let mut cells: Vec<String> = Vec::new();

    let mut scanner = TagScanner::new(xml);
    while let Some(event) = scanner.next_event() {
        match event {
            Event::Open("w:tbl") => table_depth += 1,
            Event::Close("w:tbl") => table_depth = table_depth.saturating_sub(1),
            Event::Open("w:tr") if table_depth == 1 => cells.clear(),
            Event::Close("w:tr") if table_depth == 1 => rows.push(cells.join(" | ")),
            Event::Open("w:tc") if table_depth == 1 => {
                in_cell = true;
                cell.clear();
            }
            Event::Close("w:tc") if table_depth == 1 => {
                in_cell = false;
                cells.push(cell.trim().to_string());
            }
            Event::Open("w:p") => {
                if table_depth == 0 {
                    in_para = true;
                    para.clear();
                } else if in_cell && !cell.is_empty() {
                    // paragraph break inside a cell
                    cell.push(' ');
                }
            }
            Event::Close("w:p") if table_depth == 0 && in_para => {
                in_para = false;
                paragraphs.push(para.clone());
            }
            Event::Text(run) => {
                if table_depth == 0 && in_para {
                    para.push_str(&run);
                } else if in_cell {
                    cell.push_str(&run);
                }
            }
            _ => {}
        }
    }

    let mut text = paragraphs.join("\n");
    for row in &rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

/// Minimal WordprocessingML scanner.
///
/// Surfaces tag open/close events and `<w:t>` run text; declarations,
/// comments, and attributes are skipped. Self-closing tags produce an
/// open event followed by a close event.
enum Event<'a> {
    Open(&'a str),
    Close(&'a str),
    Text(String),
}

struct TagScanner<'a> {
    xml: &'a str,
    pos: usize,
    pending_close: Option<&'a str>,
}

impl<'a> TagScanner<'a> {
    fn new(xml: &'a str) -> Self {
        Self {
            xml,
            pos: 0,
            pending_close: None,
        }
    }

    fn next_event(&mut self) -> Option<Event<'a>> {
        if let Some(name) = self.pending_close.take() {
            return Some(Event::Close(name));
        }

        loop {
            let open = self.xml[self.pos..].find('<')? + self.pos;
            let close = self.xml[open..].find('>')? + open;
            let tag = &self.xml[open + 1..close];
            self.pos = close + 1;

            if let Some(name) = tag.strip_prefix('/') {
                return Some(Event::Close(name.trim_end()));
            }
            if tag.starts_with('?') || tag.starts_with('!') {
                continue;
            }

            let self_closing = tag.ends_with('/');
            let name = tag
                .trim_end_matches('/')
                .split_whitespace()
                .next()
                .unwrap_or("");
            if name.is_empty() {
                continue;
            }

            if name == "w:t" && !self_closing {
                let end = self.xml[self.pos..]
                    .find("</w:t>")
                    .map(|i| i + self.pos)
                    .unwrap_or(self.xml.len());
                let run = decode_entities(&self.xml[self.pos..end]);
                self.pos = end;
                return Some(Event::Text(run));
            }

            if self_closing {
                self.pending_close = Some(name);
            }
            return Some(Event::Open(name));
        }
    }
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
