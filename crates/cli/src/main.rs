// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod display;
mod error;
mod prompt;

use crate::error::CliError;
use bikeshare::{DEFAULT_PAGE_SIZE, DatasetLoader, paginate};
use bikeshare_domain::{FilterCriteria, TripRecord};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Bikeshare Explorer - interactive statistics over US bikeshare trip data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the per-city CSV data files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Print the statistic reports as one JSON document instead of text
    #[arg(long)]
    json: bool,
}

/// Walks the sample pages, stopping when the user declines.
fn browse_samples(records: &[TripRecord]) -> Result<(), CliError> {
    for page in paginate(records, DEFAULT_PAGE_SIZE) {
        display::show_page(page);
        if !prompt::confirm_next_page()? {
            break;
        }
    }
    Ok(())
}

/// Runs one analysis session: prompt, load, report, browse.
fn run_session(loader: &DatasetLoader, json: bool) -> Result<(), CliError> {
    let criteria: FilterCriteria = prompt::gather_criteria()?;
    let records: Vec<TripRecord> = loader.load(&criteria)?;

    display::show_selection(&criteria);
    if json {
        display::show_reports_json(&records)?;
    } else {
        display::show_reports(&records);
    }

    if prompt::confirm("\nWould you like to view sample data? Enter yes or no: ")? {
        browse_samples(&records)?;
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let loader: DatasetLoader = DatasetLoader::new(&args.data_dir);

    loop {
        run_session(&loader, args.json)?;

        if !prompt::confirm("\nWould you like to restart? Enter yes or no: ")? {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(data_dir = %args.data_dir.display(), "Initializing Bikeshare Explorer");

    if let Err(e) = run(&args) {
        error!(error = %e, "Session ended with an error");
        return Err(e.into());
    }

    Ok(())
}
