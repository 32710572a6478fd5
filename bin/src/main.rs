//! FRED CLI binary.
//!
//! Fetches series observations from the FRED API and prints them.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::observations::OutputFormat;
use fred_api::{AggregationMethod, MAX_LIMIT};
use std::process;

#[derive(Parser)]
#[command(name = "fred")]
#[command(about = "Fetch economic time series from FRED", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch observations for a series
    Observations {
        /// Series ID (e.g. GDP, UNRATE)
        series_id: String,

        /// API key (defaults to FRED_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Maximum number of observations (1-100000)
        #[arg(short, long, default_value_t = MAX_LIMIT)]
        limit: u32,

        /// Units transformation (lin, chg, ch1, pch, pc1, pca, cch, cca, log);
        /// an empty value leaves it to the API
        #[arg(short, long, default_value = "lin")]
        units: String,

        /// Frequency to aggregate to (d, w, bw, m, q, sa, a, ...)
        #[arg(short, long)]
        frequency: Option<String>,

        /// Aggregation method (avg, sum, eop)
        #[arg(short, long, default_value = "avg")]
        aggregation_method: AggregationMethod,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List units transformations
    Units,
}

fn main() {
    fred_api::logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Observations {
            series_id,
            api_key,
            start,
            end,
            limit,
            units,
            frequency,
            aggregation_method,
            format,
        } => {
            let args = cmd::observations::ObservationsArgs {
                series_id,
                api_key,
                start,
                end,
                limit,
                units: cmd::observations::parse_units(&units)?,
                frequency,
                aggregation_method,
                format,
            };
            cmd::observations::fetch(args)?;
        }
        Commands::Units => {
            cmd::units::list_units();
        }
    }

    Ok(())
}
