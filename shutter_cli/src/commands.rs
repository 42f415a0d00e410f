//! Command implementations

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use shutter_core::export::{default_file_name, save_export, ExportDocument};
use shutter_core::report::render_text_report;
use shutter_core::{calculate_with, CalcError, CalcResult, EstimatorSettings, ShutteringResult};

use crate::cli::{Cli, Commands, EstimateArgs, OutputFormat};

/// Area used when the prompt is left empty
const DEFAULT_AREA: f64 = 1000.0;

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> CalcResult<()> {
    let settings = resolve_settings(cli.settings.as_deref())?;
    match cli.command {
        Some(Commands::ShowSettings) => show_settings(&settings),
        None => run_estimate(&cli.estimate, &settings),
    }
}

/// Pick the settings in effect: explicit file, then the user config file, then the standard tables.
pub fn resolve_settings(explicit: Option<&Path>) -> CalcResult<EstimatorSettings> {
    if let Some(path) = explicit {
        return EstimatorSettings::load(path);
    }
    if let Some(path) = EstimatorSettings::default_path() {
        if path.exists() {
            tracing::debug!(path = %path.display(), "using settings from config dir");
            return EstimatorSettings::load(&path);
        }
    }
    Ok(EstimatorSettings::standard().clone())
}

fn show_settings(settings: &EstimatorSettings) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

fn run_estimate(args: &EstimateArgs, settings: &EstimatorSettings) -> CalcResult<()> {
    let area = match args.area {
        Some(area) => area,
        None => prompt_area("Enter total construction area [1000]: ", DEFAULT_AREA)?,
    };

    let input = args.to_input(area);
    let result = calculate_with(&input, settings)?;

    match args.format {
        OutputFormat::Table => print!("{}", render_text_report(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(target) = &args.export {
        let path = export_path(target, &result);
        save_export(&ExportDocument::from_result(&result), &path)?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

/// Export target: a directory gets the default file name appended.
pub fn export_path(target: &Path, result: &ShutteringResult) -> PathBuf {
    if target.is_dir() {
        target.join(default_file_name(result))
    } else {
        target.to_path_buf()
    }
}

fn prompt_area(prompt: &str, default: f64) -> CalcResult<f64> {
    eprint!("{}", prompt);
    if io::stderr().flush().is_err() {
        return Ok(default);
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return Ok(default);
    }

    parse_area(&input, default)
}

/// Empty input takes the default; anything else must be a number.
fn parse_area(input: &str, default: f64) -> CalcResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| {
        tracing::warn!(input = trimmed, "could not parse area");
        CalcError::InvalidArea {
            value: trimmed.to_string(),
            reason: "Area must be a number".to_string(),
        }
    })
}
