//! Coordinate sequence assembly
//!
//! Walks every data row of a [`Frame`] once, first to last, and formats the
//! selected longitude/latitude/altitude values as `lon,lat,alt` tuples.

use crate::error::{CsvKmlError, Result};
use crate::types::{format_coordinate, ColumnSelection, CoordinateSequence, Frame, Role};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Progress bar sized to the frame's data rows
pub fn assembly_progress_bar(frame: &Frame) -> ProgressBar {
    let pb = ProgressBar::new(frame.row_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Progress = {percent:>3}% [{bar:40.cyan/blue}] {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Build the coordinate sequence, ticking `progress` once per row
pub fn assemble_coordinates(
    frame: &Frame,
    selection: &ColumnSelection,
    progress: &ProgressBar,
) -> Result<CoordinateSequence> {
    let column = |role: Role| {
        let name = selection.column(role);
        frame
            .column(name)
            .ok_or_else(|| CsvKmlError::UnknownColumn(name.to_string()))
    };
    let longitudes = column(Role::Longitude)?;
    let latitudes = column(Role::Latitude)?;
    let altitudes = column(Role::Altitude)?;

    let mut sequence = CoordinateSequence::with_capacity(frame.row_count());
    for ((lon, lat), alt) in longitudes.iter().zip(latitudes).zip(altitudes) {
        sequence.push(format_coordinate(*lon, *lat, *alt));
        progress.inc(1);
    }
    progress.finish_and_clear();

    debug!("Assembled {} coordinate tuples", sequence.len());
    Ok(sequence)
}
