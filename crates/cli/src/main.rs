//! # loadcast
//!
//! Command-line interface for monthly dataset forecasting: load a CSV or
//! spreadsheet, inspect the detected places, and produce ARIMA forecasts.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dataset_facade::{load_dataset, SeriesStore};
use forecast_facade::forecast_monthly;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "loadcast")]
#[command(about = "Monthly time series forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a place from a tabular dataset
    Forecast {
        /// Input file (CSV or XLSX)
        #[arg(short, long)]
        input: PathBuf,

        /// Place to forecast (defaults to the aggregate)
        #[arg(short, long)]
        place: Option<String>,

        /// Forecast through December of this year (defaults to 12 months)
        #[arg(short, long)]
        target_year: Option<i32>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the places detected in a tabular dataset
    Places {
        /// Input file (CSV or XLSX)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Load and ingest a dataset file.
fn load_file(path: &PathBuf) -> CliResult<(SeriesStore, Vec<String>)> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
    let (store, summary) = load_dataset(&bytes).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} rows spanning {} from {:?}",
        summary.rows,
        summary.date_range,
        path.file_name().unwrap_or_default()
    );
    Ok((store, summary.places))
}

fn run_forecast(
    input: PathBuf,
    place: Option<String>,
    target_year: Option<i32>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let (store, _) = load_file(&input)?;

    let place = match place {
        Some(place) => place,
        None => store
            .default_place()
            .ok_or_else(|| "No places detected".to_string())?
            .to_string(),
    };
    let series = store
        .get(&place)
        .ok_or_else(|| format!("Place '{}' not found in dataset", place))?;
    let last_date = series
        .last_date()
        .ok_or_else(|| format!("Place '{}' has no observations", place))?;

    let forecast =
        forecast_monthly(&series.values(), last_date, target_year).map_err(|e| e.to_string())?;

    println!("Forecast for {} ({} steps):", place, forecast.len());
    for point in &forecast {
        println!("  {}: {:.4}", point.date, point.value);
    }

    let json = serde_json::json!({
        "place": place,
        "history": series.points(),
        "forecast": forecast,
    });
    if let Some(path) = output {
        let mut file =
            fs::File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("\nResults written to {:?}", path);
    }

    Ok(())
}

fn run_places(input: PathBuf) -> CliResult<()> {
    let (_, places) = load_file(&input)?;
    println!("Places:");
    for place in places {
        println!("  {}", place);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Forecast {
            input,
            place,
            target_year,
            output,
        } => run_forecast(input, place, target_year, output),

        Commands::Places { input } => run_places(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
