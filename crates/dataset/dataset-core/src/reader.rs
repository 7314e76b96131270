//! Raw bytes to table parsing.
//!
//! UTF-8 input is treated as CSV; anything else is tried as a spreadsheet
//! workbook (XLSX, then legacy XLS). Both paths produce the same
//! [`RawTable`] of raw cell text.

use std::io::Cursor;

use calamine::{Data, Reader, Xls, Xlsx};
use dataset_spi::{DatasetError, RawTable, Result};

/// Parse uploaded file bytes into a raw table.
pub fn parse_table(bytes: &[u8]) -> Result<RawTable> {
    if bytes.is_empty() {
        return Err(DatasetError::InvalidFileFormat(
            "input is empty".to_string(),
        ));
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => parse_csv(text),
        Err(_) => parse_workbook(bytes),
    }
}

fn parse_csv(text: &str) -> Result<RawTable> {
    // Excel-produced CSVs often carry a UTF-8 BOM on the first header
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetError::InvalidFileFormat(format!("failed to read CSV headers: {e}")))?
        .iter()
        .map(String::from)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DatasetError::InvalidFileFormat(
            "input has no header row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| DatasetError::InvalidFileFormat(format!("CSV parse error: {e}")))?;
        rows.push(record.iter().map(String::from).collect());
    }
    if rows.is_empty() {
        return Err(DatasetError::InvalidFileFormat(
            "no data rows found".to_string(),
        ));
    }

    Ok(RawTable::new(headers, rows))
}

fn parse_workbook(bytes: &[u8]) -> Result<RawTable> {
    if let Ok(workbook) = Xlsx::new(Cursor::new(bytes.to_vec())) {
        return table_from_workbook(workbook);
    }
    match Xls::new(Cursor::new(bytes.to_vec())) {
        Ok(workbook) => table_from_workbook(workbook),
        Err(e) => Err(DatasetError::InvalidFileFormat(format!(
            "input is neither parseable CSV text nor a supported spreadsheet: {e}"
        ))),
    }
}

fn table_from_workbook<R>(mut workbook: R) -> Result<RawTable>
where
    R: Reader<Cursor<Vec<u8>>>,
    R::Error: std::fmt::Display,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            DatasetError::InvalidFileFormat("workbook contains no worksheets".to_string())
        })?
        .map_err(|e| DatasetError::InvalidFileFormat(format!("failed to read worksheet: {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| DatasetError::InvalidFileFormat("worksheet is empty".to_string()))?
        .iter()
        .map(render_cell)
        .collect();

    let data_rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(render_cell).collect())
        .collect();
    if data_rows.is_empty() {
        return Err(DatasetError::InvalidFileFormat(
            "no data rows found".to_string(),
        ));
    }

    Ok(RawTable::new(headers, data_rows))
}

/// Render a workbook cell to the raw text the rest of the pipeline expects.
/// Date cells become ISO dates so the general date parser picks them up.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.date().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(_) | Data::Error(_) | Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_table() {
        let csv = "Date,North,South\n2021-01-01,10,20\n2021-02-01,11,21\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["Date", "North", "South"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][1], "10");
    }

    #[test]
    fn test_parse_csv_trims_cells() {
        let csv = "Date, Load\n2021-01-01 , 10 \n";
        let table = parse_table(csv.as_bytes()).unwrap();
        assert_eq!(table.headers(), &["Date", "Load"]);
        assert_eq!(table.rows()[0], vec!["2021-01-01", "10"]);
    }

    #[test]
    fn test_parse_csv_strips_bom() {
        let csv = "\u{feff}Date,Load\n2021-01-01,10\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        assert_eq!(table.headers()[0], "Date");
    }

    #[test]
    fn test_parse_csv_ragged_rows() {
        let csv = "Date,a,b\n2021-01-01,1\n2021-02-01,2,3\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        assert_eq!(table.rows()[0], vec!["2021-01-01", "1", ""]);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_table(b""),
            Err(DatasetError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn test_header_only_csv_rejected() {
        assert!(matches!(
            parse_table(b"Date,Load\n"),
            Err(DatasetError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn test_binary_garbage_rejected() {
        let bytes = [0xff, 0xfe, 0x00, 0x01, 0x80, 0x99, 0xab, 0xcd];
        assert!(matches!(
            parse_table(&bytes),
            Err(DatasetError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn test_render_cell_variants() {
        assert_eq!(render_cell(&Data::String(" x ".to_string())), "x");
        assert_eq!(render_cell(&Data::Float(3.0)), "3");
        assert_eq!(render_cell(&Data::Float(2.5)), "2.5");
        assert_eq!(render_cell(&Data::Int(42)), "42");
        assert_eq!(render_cell(&Data::Empty), "");
    }
}
