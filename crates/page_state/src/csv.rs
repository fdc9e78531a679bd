use serde::Serialize;

/// Number of data rows the upload page previews by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// A truncated client-side view of an uploaded CSV file, enough to render a
/// "first N rows" table before the server sees the upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvPreview {
    /// Splits the first line into headers and up to `max_rows` following
    /// non-blank lines into trimmed cells. Returns `None` when there is no
    /// data row to show.
    pub fn parse(text: &str, max_rows: usize) -> Option<Self> {
        let mut lines = text.lines();
        let headers = split_cells(lines.next()?);
        let rows: Vec<Vec<String>> = lines
            .filter(|line| !line.trim().is_empty())
            .take(max_rows)
            .map(split_cells)
            .collect();
        if rows.is_empty() {
            return None;
        }
        Some(Self { headers, rows })
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}
