//! Spreadsheet and CSV rendering.
//!
//! Rows are rendered one per line with cells joined by `" | "`. The exact
//! layout only needs to stay readable for the model.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use docsage_core::{Error, Result};

/// Render the first worksheet of an `.xlsx` file as text.
pub fn extract_xlsx(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Extract(format!("cannot open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Extract("workbook has no sheets".into()))?
        .map_err(|e| Error::Extract(format!("cannot read sheet: {}", e)))?;

    let lines: Vec<String> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Render a `.csv` file as text.
pub fn extract_csv(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Extract(format!("cannot open CSV: {}", e)))?;

    let mut lines = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::Extract(format!("malformed CSV record: {}", e)))?;
        lines.push(record.iter().collect::<Vec<_>>().join(" | "));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_render_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(&path, "id,item\n1,widget\n2,gadget\n").unwrap();

        let text = extract_csv(&path).unwrap();
        assert_eq!(text, "id | item\n1 | widget\n2 | gadget");
    }

    #[test]
    fn ragged_csv_rows_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\nd\n").unwrap();

        let text = extract_csv(&path).unwrap();
        assert_eq!(text, "a | b | c\nd");
    }
}
