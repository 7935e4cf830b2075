//! CLI binary for csvkml
//!
//! Sequential pipeline: load CSV, select columns, assemble coordinates, write KML.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use csvkml::{
    assemble_coordinates, assembly_progress_bar, export_to_kml, read_frame, ColumnSelector,
    ExportOptions, SelectorConfig,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({sha})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_command() -> Command {
    Command::new("csvkml")
        .version(version())
        .about("Convert a CSV telemetry file into a KML trajectory (path plus start/end markers)")
        .disable_help_flag(true)
        .arg(
            Arg::new("file")
                .help("CSV file: header row of column names, numeric data rows")
                .value_name("CSV_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Print usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output KML file; skips the output filename prompt")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Terminal width used to wrap the column listing (default: detected)")
                .value_name("COLS")
                .env("COLUMNS")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(input: PathBuf, output: Option<PathBuf>, width: Option<usize>) -> Result<()> {
    let detected = console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize);
    let config = SelectorConfig::resolve(width, detected)?;

    eprintln!("Start");

    let frame =
        read_frame(&input).with_context(|| format!("Failed to load {}", input.display()))?;

    let stdin = io::stdin();
    let mut selector = ColumnSelector::new(stdin.lock(), io::stdout(), config);
    let selection = selector.select_columns(&frame)?;
    let output_path = match output {
        Some(path) => path,
        None => selector.prompt_output_name()?,
    };
    println!(
        "Longitude: {:?}, latitude: {:?}, altitude: {:?}",
        selection.longitude, selection.latitude, selection.altitude
    );

    let progress = assembly_progress_bar(&frame);
    let sequence = assemble_coordinates(&frame, &selection, &progress)?;

    let export_options = ExportOptions {
        output_path: Some(output_path),
    };
    let written = export_to_kml(&input, &sequence, &export_options)
        .with_context(|| format!("Failed to export KML for {}", input.display()))?;
    println!("Exported KML to: {}", written.display());

    eprintln!("End");
    Ok(())
}

/// `-h`/`--help` anywhere, or as the first argument where the file
/// positional swallows it as a hyphenated value
fn wants_help(matches: &clap::ArgMatches) -> bool {
    matches.get_flag("help")
        || matches
            .get_one::<PathBuf>("file")
            .is_some_and(|p| p.as_path() == Path::new("-h") || p.as_path() == Path::new("--help"))
}

fn main() {
    let matches = build_command().get_matches();

    let input = match matches.get_one::<PathBuf>("file") {
        Some(path) if !wants_help(&matches) => path.clone(),
        _ => {
            // No file or a help request: one-line usage and a clean exit
            println!("{}", build_command().render_usage());
            return;
        }
    };

    init_logging(matches.get_flag("debug"));

    let output = matches.get_one::<PathBuf>("output").cloned();
    let width = matches.get_one::<usize>("width").copied();

    if let Err(e) = run(input, output, width) {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}
