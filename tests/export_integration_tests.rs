//! Integration tests for the load -> select -> assemble -> export pipeline
//!
//! Interactive answers are scripted through an in-memory cursor and every
//! output file lands in a temporary directory.

use csvkml::*;
use indicatif::ProgressBar;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

/// Contents of every `<coordinates>` element, trimmed, in document order
fn coordinate_blocks(kml: &str) -> Vec<String> {
    kml.split("<coordinates>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</coordinates>").next())
        .map(|body| body.trim().to_string())
        .collect()
}

/// Run the whole pipeline with scripted console input
fn convert(csv: &str, answers: &str, dir: &TempDir) -> (std::path::PathBuf, String) {
    let input_path = dir.path().join("flight.csv");
    fs::write(&input_path, csv).expect("Failed to write input CSV");

    let frame = read_frame(&input_path).expect("Failed to load frame");
    let mut selector = ColumnSelector::new(
        Cursor::new(answers.as_bytes().to_vec()),
        Vec::new(),
        SelectorConfig { width: 80 },
    );
    let selection = selector.select_columns(&frame).expect("Selection failed");
    let output_name = selector.prompt_output_name().expect("Output prompt failed");

    let sequence = assemble_coordinates(&frame, &selection, &ProgressBar::hidden())
        .expect("Assembly failed");
    let options = ExportOptions {
        output_path: Some(dir.path().join(output_name)),
    };
    let written = export_to_kml(&input_path, &sequence, &options).expect("Export failed");
    let kml = fs::read_to_string(&written).expect("Failed to read KML");
    (written, kml)
}

#[test]
fn test_round_trip_default_output_name() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (written, kml) = convert(
        "time,lon,lat,alt\n0,10.0,20.0,5.0\n1,10.1,20.1,5.5\n",
        "2\n3\n4\n\n",
        &dir,
    );

    assert_eq!(written, dir.path().join("output.kml"));
    let blocks = coordinate_blocks(&kml);
    assert_eq!(blocks.len(), 3, "path plus start and end points");
    assert_eq!(
        blocks[0],
        "10.000000,20.000000,5.000000 10.100000,20.100000,5.500000"
    );
    assert_eq!(blocks[1], "10.000000,20.000000,5.000000");
    assert_eq!(blocks[2], "10.100000,20.100000,5.500000");
    assert!(kml.contains("flight.csv"));
    assert!(!kml.contains(dir.path().to_str().unwrap()), "folder name is the base name only");
}

#[test]
fn test_single_row_start_equals_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (_, kml) = convert("lon,lat,alt\n121.5,25.03,12.5\n", "1\n2\n3\nsingle.kml\n", &dir);

    let blocks = coordinate_blocks(&kml);
    assert_eq!(blocks[0], "121.500000,25.030000,12.500000");
    assert_eq!(blocks[1], blocks[2]);
    assert_eq!(blocks[1], blocks[0]);
    assert!(dir.path().join("single.kml").exists());
}

#[test]
fn test_invalid_selection_reprompts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = dir.path().join("four.csv");
    fs::write(&input_path, "a,b,c,d\n1,2,3,4\n").unwrap();
    let frame = read_frame(&input_path).unwrap();
    assert_eq!(frame.column_count(), 4);

    let mut selector = ColumnSelector::new(
        Cursor::new(b"0\n5\n2\n".to_vec()),
        Vec::new(),
        SelectorConfig { width: 80 },
    );
    let name = selector.select_role(&frame, Role::Longitude).unwrap();
    assert_eq!(name, "b");

    let console = String::from_utf8(selector.into_output()).unwrap();
    assert_eq!(console.matches("out of range").count(), 2);
}

#[test]
fn test_every_column_holds_every_row() {
    let rows: String = (0..50).map(|i| format!("{i},{},{}\n", i as f64 * 0.5, -i)).collect();
    let frame = parse_frame_str(&format!("t,x,y\n{rows}")).unwrap();

    assert_eq!(frame.column_count(), 3);
    assert_eq!(frame.row_count(), 50);
    for name in frame.column_names() {
        assert_eq!(frame.column(name).unwrap().len(), 50);
    }
    assert_eq!(frame.column("x").unwrap()[49], 24.5);
    assert_eq!(frame.column("y").unwrap()[10], -10.0);
}

#[test]
fn test_malformed_cell_stops_before_export() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = dir.path().join("bad.csv");
    fs::write(&input_path, "lon,lat,alt\n1,2,3\n4,five,6\n").unwrap();

    let result = read_frame(&input_path);
    assert!(matches!(result, Err(CsvKmlError::InvalidNumber { row: 2, .. })));
    assert!(!dir.path().join("output.kml").exists());
}

#[test]
fn test_empty_sequence_creates_no_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.kml");
    let options = ExportOptions {
        output_path: Some(output_path.clone()),
    };

    let result = export_to_kml(Path::new("empty.csv"), &CoordinateSequence::new(), &options);
    assert!(matches!(result, Err(CsvKmlError::EmptySequence)));
    assert!(!output_path.exists(), "no partial output on render failure");
}

#[test]
fn test_export_creates_output_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let nested = dir.path().join("nonexistent").join("output");
    let options = ExportOptions {
        output_path: Some(nested.join("track.kml")),
    };
    let sequence: CoordinateSequence = vec!["1.000000,2.000000,3.000000".to_string()].into();

    let written = export_to_kml(Path::new("/logs/track.csv"), &sequence, &options).unwrap();
    assert!(nested.exists(), "Output directory should be created");
    assert_eq!(written, nested.join("track.kml"));
}

#[test]
fn test_export_is_byte_identical_across_runs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let sequence: CoordinateSequence = vec![
        "10.000000,20.000000,5.000000".to_string(),
        "10.100000,20.100000,5.500000".to_string(),
    ]
    .into();

    let first = dir.path().join("first.kml");
    let second = dir.path().join("second.kml");
    for path in [&first, &second] {
        let options = ExportOptions {
            output_path: Some(path.clone()),
        };
        export_to_kml(Path::new("data/flight.csv"), &sequence, &options).unwrap();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
