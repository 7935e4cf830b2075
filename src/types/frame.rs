use crate::error::{CsvKmlError, Result};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named-column numeric table built from a CSV file
///
/// Column order follows the header, value order follows the data rows.
/// Every column holds exactly `row_count()` values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    column_names: Vec<String>,
    columns: HashMap<String, Vec<f64>>,
    row_count: usize,
}

impl Frame {
    /// Build a frame from a header and row-major data.
    ///
    /// Fails on duplicate column names or on a row whose length differs from the header.
    pub fn from_rows(column_names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let mut columns: HashMap<String, Vec<f64>> = HashMap::with_capacity(column_names.len());
        for (index, name) in column_names.iter().enumerate() {
            if columns.contains_key(name) {
                let first = column_names
                    .iter()
                    .position(|n| n == name)
                    .map_or(0, |p| p + 1);
                return Err(CsvKmlError::DuplicateColumn {
                    name: name.clone(),
                    first,
                    second: index + 1,
                });
            }
            columns.insert(name.clone(), Vec::with_capacity(rows.len()));
        }

        let row_count = rows.len();
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != column_names.len() {
                return Err(CsvKmlError::RowLength {
                    row: row_index + 1,
                    expected: column_names.len(),
                    found: row.len(),
                });
            }
            for (name, value) in column_names.iter().zip(row) {
                if let Some(values) = columns.get_mut(name) {
                    values.push(value);
                }
            }
        }

        Ok(Self {
            column_names,
            columns,
            row_count,
        })
    }

    /// Header names in file order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of columns (length of the header row)
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Values of a column in row order
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Column name for a 1-based index, `None` outside `[1, column_count]`
    pub fn name_at(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.column_names.get(i))
            .map(String::as_str)
    }

    /// Length of the longest column name
    pub fn max_name_len(&self) -> usize {
        self.column_names.iter().map(|n| n.len()).max().unwrap_or(0)
    }
}
