//! # Shuttering Calculator CLI
//!
//! Terminal front end for `shutter_core`: collects the area (from flags or
//! an interactive prompt), runs the estimate, and prints a report or JSON.
//! `--export` writes the downloadable JSON document.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
