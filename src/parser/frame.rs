//! Tabular frame builder
//!
//! Turns comma-separated text into a [`Frame`]. The first record is the
//! header; every following record is a data row of floating-point cells.
//! Any cell that fails to parse aborts the whole build.

use crate::error::{CsvKmlError, Result};
use crate::types::Frame;
use std::io::Read;
use tracing::debug;

/// Build a frame from any CSV byte source
pub fn parse_frame<R: Read>(reader: R) -> Result<Frame> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        // Row length is checked by Frame::from_rows so the error names the data row
        .flexible(true)
        .from_reader(reader);

    let column_names: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    if column_names.is_empty() {
        return Err(CsvKmlError::MissingHeader);
    }
    debug!("Header has {} columns: {:?}", column_names.len(), column_names);

    let mut rows = Vec::new();
    for (row_index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col_index, cell)| parse_cell(cell, row_index + 1, col_index, &column_names))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    debug!("Parsed {} data rows", rows.len());

    Frame::from_rows(column_names, rows)
}

/// Build a frame from in-memory CSV text
pub fn parse_frame_str(content: &str) -> Result<Frame> {
    parse_frame(content.as_bytes())
}

fn parse_cell(cell: &str, row: usize, col_index: usize, column_names: &[String]) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| CsvKmlError::InvalidNumber {
        row,
        column: column_names
            .get(col_index)
            .cloned()
            .unwrap_or_else(|| format!("#{}", col_index + 1)),
        value: cell.to_string(),
    })
}
