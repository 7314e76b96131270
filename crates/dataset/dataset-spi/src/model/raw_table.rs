//! Raw rectangular table as read from CSV or a workbook.

/// An ordered table of raw cell text, consumed entirely during ingestion.
///
/// Cells hold text exactly as read; numeric and date interpretation happens
/// later, in detection and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from headers and row-major cells. Rows are padded or
    /// truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Column headers in original order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows (header row excluded).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate one column's cells, by header name.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }
}
