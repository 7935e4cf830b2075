//! CSV to KML trajectory converter
//!
//! Reads a CSV file of recorded telemetry (named columns, numeric cells),
//! lets the user pick the longitude, latitude and altitude columns, and
//! writes a KML document with the flight path plus start/end markers.
//!
//! # Features
//!
//! - **`cli`** (default): Build the interactive command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use csvkml::{assemble_coordinates, export_to_kml, read_frame, ColumnSelection, ExportOptions};
//! use indicatif::ProgressBar;
//! use std::path::Path;
//!
//! let input = Path::new("flight.csv");
//! let frame = read_frame(input).unwrap();
//! let selection = ColumnSelection {
//!     longitude: "lon".to_string(),
//!     latitude: "lat".to_string(),
//!     altitude: "alt".to_string(),
//! };
//! let sequence = assemble_coordinates(&frame, &selection, &ProgressBar::hidden()).unwrap();
//! let written = export_to_kml(input, &sequence, &ExportOptions::default()).unwrap();
//! println!("Exported to: {}", written.display());
//! ```
//!
//! # Public API
//!
//! - [`read_frame`] / [`parse_frame`] - Build a [`Frame`] from CSV
//! - [`ColumnSelector`] - Interactive role-to-column binding
//! - [`assemble_coordinates`] - Build the [`CoordinateSequence`]
//! - [`render_kml`] / [`export_to_kml`] - Produce the KML document

pub mod assemble;
pub mod error;
pub mod export;
pub mod parser;
pub mod select;
pub mod types;

// Flat re-exports; the `frame` submodule names collide, the items do not
pub use assemble::*;
pub use error::*;
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
pub use select::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
