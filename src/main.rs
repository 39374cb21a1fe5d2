//! Command-line interface for sales-report
//!
//! # Usage Examples
//!
//! ## Generation
//! ```bash
//! # One hundred thousand records with the default seed
//! sales-report generate --record-count 100000 --batch-size 1000
//!
//! # A different store path and seed
//! sales-report generate --output /tmp/sales.csv --seed 7
//! ```
//!
//! ## Aggregation
//! ```bash
//! sales-report process \
//!   --input data/sales_records.csv \
//!   --output data/monthly_report.csv \
//!   --emit-summary summary.json
//! ```
//!
//! ## Full pipeline
//! ```bash
//! sales-report run --record-count 1000000
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sales_report::{DEFAULT_RECORDS_PATH, DEFAULT_REPORT_PATH};
use sales_report_aggregator::SalesAggregator;
use sales_report_generator::SalesPopulator;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "sales-report")]
#[command(about = "Generate synthetic sales records and aggregate them into monthly reports")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic sales record store
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Aggregate a record store into a monthly report
    Process {
        #[command(flatten)]
        args: ProcessArgs,
    },

    /// Generate a record store, then aggregate it
    Run {
        /// Record store path shared by both stages
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: PathBuf,

        /// Output report path
        #[arg(long, default_value = DEFAULT_REPORT_PATH)]
        report: PathBuf,

        /// Number of records to generate
        #[arg(long, default_value = "100000")]
        record_count: u64,

        /// Records per write batch
        #[arg(long, default_value = "1000")]
        batch_size: u64,

        /// Random seed for deterministic generation (same seed = same data)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Optional path to write the run summary as JSON
        #[arg(long)]
        emit_summary: Option<PathBuf>,
    },
}

/// Arguments for the generate subcommand.
#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Output path for the record store
    #[arg(long, short = 'o', default_value = DEFAULT_RECORDS_PATH)]
    output: PathBuf,

    /// Number of records to generate
    #[arg(long, default_value = "100000")]
    record_count: u64,

    /// Records per write batch
    #[arg(long, default_value = "1000")]
    batch_size: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Arguments for the process subcommand.
#[derive(Args, Clone, Debug)]
struct ProcessArgs {
    /// Input record store path
    #[arg(long, short = 'i', default_value = DEFAULT_RECORDS_PATH)]
    input: PathBuf,

    /// Output report path
    #[arg(long, short = 'o', default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Optional path to write the run summary as JSON
    #[arg(long)]
    emit_summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(&args.output, args.record_count, args.batch_size, args.seed)?;
        }
        Commands::Process { args } => {
            run_process(&args.input, &args.output, args.emit_summary.as_deref())?;
        }
        Commands::Run {
            records,
            report,
            record_count,
            batch_size,
            seed,
            emit_summary,
        } => {
            run_generate(&records, record_count, batch_size, seed)?;
            run_process(&records, &report, emit_summary.as_deref())?;
        }
    }

    Ok(())
}

fn run_generate(output: &Path, record_count: u64, batch_size: u64, seed: u64) -> anyhow::Result<()> {
    let mut populator = SalesPopulator::new(seed);
    let metrics = populator
        .populate(output, record_count, batch_size)
        .with_context(|| format!("Failed to generate record store '{}'", output.display()))?;

    info!(
        "Generated {} records ({} bytes) in {:?}, {:.2} rows/sec",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );
    Ok(())
}

fn run_process(
    input: &Path,
    output: &Path,
    emit_summary: Option<&Path>,
) -> anyhow::Result<()> {
    let mut aggregator = SalesAggregator::new();
    aggregator
        .process(input, output)
        .with_context(|| format!("Failed to aggregate record store '{}'", input.display()))?;

    let summary = aggregator.summary();
    info!(
        "Wrote report '{}': {} monthly buckets over {} ({} records, {} skipped)",
        output.display(),
        summary.total_buckets,
        summary.year_range,
        summary.total_records_processed,
        summary.skipped_records
    );

    if let Some(path) = emit_summary {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary '{}'", path.display()))?;
    }

    Ok(())
}
