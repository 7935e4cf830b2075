//! KML document rendering and export
//!
//! The document is a fixed skeleton with `{{NAME}}` placeholders: one folder
//! named after the input file, a red trajectory `LineString` through every
//! coordinate tuple, and `start`/`end` point placemarks on the first and last
//! tuple. Output is fully deterministic for identical inputs.

use crate::error::{CsvKmlError, Result};
use crate::select::DEFAULT_OUTPUT_NAME;
use crate::types::CoordinateSequence;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const KML_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document id="root_doc">
<Folder>
    <name>
        {{FILE}}
    </name>
    <Placemark>
    <name>trajectory</name>
    <description>record trajectory path</description>
    <Style><LineStyle>
        <color>ff0000ff</color></LineStyle><PolyStyle><fill>0</fill>
    </PolyStyle></Style>
        <LineString>
        <coordinates>
        {{PATH}}
        </coordinates>
        </LineString>
    </Placemark>
    <Placemark>
    <name>start</name>
    <description>start record</description>
        <Point>
        <coordinates>
        {{START}}
        </coordinates>
        </Point>
    </Placemark>
    <Placemark>
    <name>end</name>
    <description>end record</description>
        <Point>
        <coordinates>
        {{END}}
        </coordinates>
        </Point>
    </Placemark>
</Folder>
</Document></kml>
"#;

/// Export options for the KML writer
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Destination file; `output.kml` in the working directory when unset
    pub output_path: Option<PathBuf>,
}

impl ExportOptions {
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME))
    }
}

/// Escape the five XML special characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replace every `{{KEY}}` in `template` with its value in a single pass.
///
/// Substituted text is never rescanned. An unknown or unterminated
/// placeholder is a render error.
fn fill_template(template: &str, values: &[(&str, &str)]) -> Result<String> {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut rendered = String::with_capacity(template.len() + extra);
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or_else(|| CsvKmlError::Render("unterminated placeholder".to_string()))?;
        let key = &after[..close];
        let value = values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| CsvKmlError::Render(format!("no value for placeholder {key:?}")))?;
        rendered.push_str(value);
        rest = &after[close + 2..];
    }
    rendered.push_str(rest);
    Ok(rendered)
}

/// Base name of the input file as shown in the KML folder
pub fn document_name(input_path: &Path) -> String {
    input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.to_string_lossy().into_owned())
}

/// Render the KML document for a coordinate sequence
pub fn render_kml(name: &str, sequence: &CoordinateSequence) -> Result<String> {
    let (start, end) = match (sequence.first(), sequence.last()) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(CsvKmlError::EmptySequence),
    };
    let file = escape_xml(name);
    let path = sequence.joined();

    fill_template(
        KML_TEMPLATE,
        &[
            ("FILE", file.as_str()),
            ("PATH", path.as_str()),
            ("START", start),
            ("END", end),
        ],
    )
}

/// Render and write the KML document, returning the path written.
///
/// The document is rendered before the file is created, so a render failure
/// leaves nothing on disk. Missing parent directories are created.
pub fn export_to_kml(
    input_path: &Path,
    sequence: &CoordinateSequence,
    export_options: &ExportOptions,
) -> Result<PathBuf> {
    let document = render_kml(&document_name(input_path), sequence)?;
    let output_path = export_options.resolved_output_path();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| CsvKmlError::io(parent, e))?;
            debug!("Created output directory: {:?}", parent);
        }
    }

    let file = File::create(&output_path).map_err(|e| CsvKmlError::io(&output_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| CsvKmlError::io(&output_path, e))?;

    info!(
        "Exported {} coordinates to: {}",
        sequence.len(),
        output_path.display()
    );
    Ok(output_path)
}
