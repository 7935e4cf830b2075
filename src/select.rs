//! Interactive column selection
//!
//! Lists the frame's columns with 1-based indices and asks for one index per
//! [`Role`]. Out-of-range or non-numeric answers print a red warning and the
//! prompt repeats until a valid index arrives.

use crate::error::{CsvKmlError, Result};
use crate::types::{ColumnSelection, Frame, Role};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Output file used when the user accepts the default
pub const DEFAULT_OUTPUT_NAME: &str = "output.kml";

/// Display configuration for the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Terminal width in characters used to wrap the column listing
    pub width: usize,
}

impl SelectorConfig {
    /// Pick the explicit width if given, else the detected one.
    ///
    /// Fails when neither is available (or both are zero).
    pub fn resolve(explicit: Option<usize>, detected: Option<usize>) -> Result<Self> {
        explicit
            .or(detected)
            .filter(|&width| width > 0)
            .map(|width| Self { width })
            .ok_or(CsvKmlError::TerminalWidth)
    }
}

/// Format `index = "name", ` entries into lines no wider than `width`.
///
/// An entry longer than `width` gets a line of its own.
pub fn format_column_listing(names: &[String], width: usize) -> Vec<String> {
    let index_width = names.len().to_string().len();
    let name_width = names.iter().map(|n| n.len()).max().unwrap_or(0) + 4;

    let mut lines = Vec::new();
    let mut line = String::new();
    for (i, name) in names.iter().enumerate() {
        let quoted = format!("{name:?}");
        let item = format!("{:>index_width$} = {quoted:>name_width$}, ", i + 1);
        if !line.is_empty() && line.len() + item.len() >= width {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        line.push_str(&item);
    }
    if !line.is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Prompt loop over a line-oriented input and an output sink
pub struct ColumnSelector<R, W> {
    input: R,
    output: W,
    config: SelectorConfig,
}

impl<R: BufRead, W: Write> ColumnSelector<R, W> {
    pub fn new(input: R, output: W, config: SelectorConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Print the wrapped column listing
    pub fn show_columns(&mut self, frame: &Frame) -> Result<()> {
        writeln!(self.output, "\nShow keys:")?;
        for line in format_column_listing(frame.column_names(), self.config.width) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Bind longitude, latitude and altitude, in that order
    pub fn select_columns(&mut self, frame: &Frame) -> Result<ColumnSelection> {
        writeln!(
            self.output,
            "\nSelect the key index of longitude/latitude/altitude"
        )?;
        let longitude = self.select_role(frame, Role::Longitude)?;
        let latitude = self.select_role(frame, Role::Latitude)?;
        let altitude = self.select_role(frame, Role::Altitude)?;
        Ok(ColumnSelection {
            longitude,
            latitude,
            altitude,
        })
    }

    /// Show the listing, then prompt until a valid 1-based index is entered
    pub fn select_role(&mut self, frame: &Frame, role: Role) -> Result<String> {
        self.show_columns(frame)?;
        loop {
            write!(self.output, "Select the {:<9} index: ", role.label())?;
            self.output.flush()?;

            let answer = self
                .read_answer()?
                .ok_or_else(|| CsvKmlError::UnexpectedEof(format!("the {role} index")))?;

            match answer.parse::<usize>().ok().and_then(|i| frame.name_at(i)) {
                Some(name) => {
                    debug!("{} bound to column {:?}", role, name);
                    return Ok(name.to_string());
                }
                None => {
                    let warning = format!(
                        "Index {:?} is out of range 1..={}, please select again...",
                        answer,
                        frame.column_count()
                    );
                    writeln!(self.output, "{}", warning.red())?;
                }
            }
        }
    }

    /// Ask for the output file name; blank input or end of input selects the default
    pub fn prompt_output_name(&mut self) -> Result<PathBuf> {
        writeln!(self.output, "Select output filename (default: {DEFAULT_OUTPUT_NAME})")?;
        write!(self.output, "(enter key -> default / custom): ")?;
        self.output.flush()?;

        let name = match self.read_answer()? {
            Some(answer) if !answer.is_empty() => answer,
            _ => DEFAULT_OUTPUT_NAME.to_string(),
        };
        Ok(PathBuf::from(name))
    }

    /// Trimmed next line, `None` at end of input
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
