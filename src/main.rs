use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{Config, LoggingSettings};
use loader::{RetryPolicy, read_csv_with_retry, write_transformed};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use transform::{QualityReport, QualityValidator, SalesTransformer, TransformedSales};

/// The main entry point for the Zenith ETL application.
fn main() -> anyhow::Result<()> {
    // Load ZENITH_ETL__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    run(Cli::parse())
}

/// Executes a parsed command line.
///
/// `hello` needs neither configuration nor logging, so it runs before either is set up.
fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Transform(args) => {
            let (config, _log_guard) = setup(cli.config.as_deref())?;
            handle_transform(args, &config)
        }
        Commands::Validate(args) => {
            let (config, _log_guard) = setup(cli.config.as_deref())?;
            handle_validate(args, &config)
        }
        Commands::Hello => {
            println!("Hello from etl_pipeline!");
            Ok(())
        }
    }
}

/// Loads the configuration and installs logging from it.
///
/// The returned guard must be kept alive so buffered file logs are flushed on exit.
fn setup(path: Option<&Path>) -> anyhow::Result<(Config, Option<WorkerGuard>)> {
    let config = configuration::load_config(path).context("Failed to load configuration")?;
    let guard = init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded.");
    Ok((config, guard))
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Extract, transform and load e-commerce sales data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read an orders CSV, transform it and write the result.
    Transform(TransformArgs),
    /// Read an orders CSV, transform it and run the data-quality checks.
    Validate(ValidateArgs),
    /// Print a greeting and exit.
    Hello,
}

#[derive(Parser)]
struct TransformArgs {
    /// The orders CSV to read.
    #[arg(long, short)]
    input: PathBuf,

    /// Where to write the transformed CSV (defaults to `output.transformed_path`).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ValidateArgs {
    /// The orders CSV to read.
    #[arg(long, short)]
    input: PathBuf,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global subscriber: stderr always, plus a daily-rolling file when
/// `logging.directory` is set. `RUST_LOG` takes precedence over `logging.level`.
fn init_tracing(settings: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("Invalid log filter")?;

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "zenith-etl.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Extracts the input with retries and runs the sales transformation over it.
fn extract_and_transform(input: &Path, config: &Config) -> anyhow::Result<TransformedSales> {
    let policy = RetryPolicy::from(&config.loader);
    let Some(raw) = read_csv_with_retry(input, &policy) else {
        bail!(
            "Input '{}' is unavailable after {} attempt(s)",
            input.display(),
            policy.max_attempts
        );
    };

    SalesTransformer::new()
        .transform(&raw)
        .with_context(|| format!("Failed to transform '{}'", input.display()))
}

/// Handles the `transform` command.
fn handle_transform(args: TransformArgs, config: &Config) -> anyhow::Result<()> {
    let sales = extract_and_transform(&args.input, config)?;

    let output = args
        .output
        .unwrap_or_else(|| config.output.transformed_path.clone());
    write_transformed(&sales, &output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Retained rows".to_string(), sales.len().to_string()]);
    table.add_row(vec!["Columns".to_string(), sales.columns().join(", ")]);
    table.add_row(vec!["Total sales".to_string(), sales.total_sales.to_string()]);
    table.add_row(vec!["Output".to_string(), output.display().to_string()]);
    println!("{table}");

    Ok(())
}

/// Handles the `validate` command. Fails when any data-quality check fails.
fn handle_validate(args: ValidateArgs, config: &Config) -> anyhow::Result<()> {
    let sales = extract_and_transform(&args.input, config)?;
    let report = QualityValidator::new(config.quality.max_quantity).validate(&sales);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    let failed = report.failed_checks().count();
    if failed > 0 {
        bail!("{failed} data-quality check(s) failed");
    }
    Ok(())
}

fn render_report(report: &QualityReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Check", "Passed", "Total", "Pass rate (%)", "Status"]);

    for check in &report.checks {
        table.add_row(vec![
            check.description.clone(),
            check.passed.to_string(),
            check.total.to_string(),
            check
                .pass_rate_pct
                .map(|p| p.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            if check.success { "PASS" } else { "FAIL" }.to_string(),
        ]);
    }
    table
}
