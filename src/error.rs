use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading telemetry, selecting columns or writing KML
#[derive(Debug, Error)]
pub enum CsvKmlError {
    /// I/O failure on a specific file
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on the interactive console
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// Structural CSV error (unequal row lengths, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row
    #[error("input has no header row")]
    MissingHeader,

    /// Two header cells carry the same name
    #[error("duplicate column name {name:?} at columns {first} and {second}")]
    DuplicateColumn {
        name: String,
        first: usize,
        second: usize,
    },

    /// A data row does not have one value per column
    #[error("data row {row} has {found} values, header has {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A data cell is not a floating-point number
    #[error("data row {row}, column {column:?}: cannot parse {value:?} as a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// A column name that is not part of the frame
    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    /// Terminal width could not be determined
    #[error("terminal width is unavailable; pass --width or set COLUMNS")]
    TerminalWidth,

    /// Input ended while a prompt was waiting for an answer
    #[error("input ended while waiting for {0}")]
    UnexpectedEof(String),

    /// No coordinates to render
    #[error("coordinate sequence is empty; the input has no data rows")]
    EmptySequence,

    /// Template substitution failed
    #[error("render error: {0}")]
    Render(String),
}

impl CsvKmlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CsvKmlError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvKmlError>;
