use crate::error::{CsvKmlError, Result};
use crate::parser::parse_frame;
use crate::types::Frame;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV telemetry file into a frame
///
/// The file is read fully and closed before returning, on success or error.
pub fn read_frame(file_path: &Path) -> Result<Frame> {
    let file = File::open(file_path).map_err(|e| CsvKmlError::io(file_path, e))?;
    if let Ok(metadata) = file.metadata() {
        debug!("Reading {:?} ({} bytes)", file_path, metadata.len());
    }

    let frame = parse_frame(BufReader::new(file))?;
    info!(
        "Loaded {:?}: {} columns, {} data rows",
        file_path,
        frame.column_count(),
        frame.row_count()
    );
    Ok(frame)
}
