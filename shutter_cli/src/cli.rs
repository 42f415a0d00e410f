//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shutter_core::units::AreaUnit;
use shutter_core::CalculationInput;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Printable report with summary and per-category tables
    #[default]
    Table,
    /// The raw result as JSON
    Json,
}

/// Unit the area is entered in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    #[default]
    Sqft,
    Sqm,
}

impl From<UnitArg> for AreaUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Sqft => AreaUnit::Sqft,
            UnitArg::Sqm => AreaUnit::Sqm,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shutter_cli")]
#[command(version)]
#[command(about = "Estimate shuttering (formwork) materials from a total construction area")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Settings file with custom distribution / factor tables
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the settings tables in effect as JSON
    ShowSettings,
}

/// Arguments for a single estimate
#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Total construction area. Prompted for when omitted.
    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub area: Option<f64>,

    /// Unit of the area
    #[arg(long, short = 'u', value_enum, default_value_t = UnitArg::Sqft)]
    pub unit: UnitArg,

    /// Slab height in feet (reserved)
    #[arg(long)]
    pub slab_height: Option<f64>,

    /// Beam height in inches (reserved)
    #[arg(long)]
    pub beam_height: Option<f64>,

    /// Column height in feet (reserved)
    #[arg(long)]
    pub column_height: Option<f64>,

    /// Slab thickness in inches (reserved)
    #[arg(long)]
    pub slab_thickness: Option<f64>,

    /// Prefer steel shuttering over wood where applicable (reserved)
    #[arg(long)]
    pub steel: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the JSON export to this file or directory
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl EstimateArgs {
    /// Build the engine input for the given area
    pub fn to_input(&self, total_area: f64) -> CalculationInput {
        CalculationInput {
            total_area,
            unit: self.unit.into(),
            slab_height: self.slab_height,
            beam_height: self.beam_height,
            column_height: self.column_height,
            slab_thickness: self.slab_thickness,
            use_steel_shuttering: Some(self.steel),
        }
    }
}
