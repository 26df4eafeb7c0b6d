use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use salary_calculator::calculation::SalaryBreakdownCalculator;
use salary_calculator::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use salary_calculator::display::render_breakdown;
use salary_calculator::error::CalculatorError;
use salary_calculator::input::parse_gross_package;
use salary_calculator::models::{PayFrequency, SalaryBreakdown};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary breakdown calculator.
///
/// Splits a gross salary package (superannuation included) into
/// superannuation, income tax, Medicare levy, budget repair levy, net income
/// and the amount of each pay packet. Values not given as options are
/// prompted for.
#[derive(Debug, Parser)]
#[command(name = "salary-calculator", version, about)]
struct Cli {
    /// Gross salary package, e.g. `65000` or `$65,000`.
    #[arg(long)]
    gross: Option<String>,

    /// Pay frequency: W (weekly), F (fortnightly) or M (monthly).
    #[arg(long)]
    frequency: Option<String>,

    /// Path to the bracket and rate configuration file.
    #[arg(long, env = "SALARY_CALCULATOR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log calculation steps to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn`, or `debug` with `--verbose`.
/// * Writes to stderr so the breakdown on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── input ───────────────────────────────────────────────────────────────────

fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}

fn read_gross_package(arg: Option<String>) -> anyhow::Result<Decimal> {
    let text = match arg {
        Some(text) => text,
        None => prompt("Enter your gross salary package: ")?,
    };
    Ok(parse_gross_package(&text)?)
}

fn read_pay_frequency(arg: Option<String>) -> anyhow::Result<PayFrequency> {
    let text = match arg {
        Some(text) => text,
        None => prompt(
            "Enter your pay frequency (W for weekly, F for fortnightly, M for monthly): ",
        )?,
    };
    Ok(text.parse::<PayFrequency>()?)
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_breakdown(breakdown: &SalaryBreakdown, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("\n{}", render_breakdown(breakdown)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(breakdown)?),
    }
    Ok(())
}

/// Maps an error to the message shown to the user.
fn describe_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<CalculatorError>() {
        Some(err @ CalculatorError::InvalidFormat { .. }) => format!("Input format error: {err}"),
        Some(err) if err.is_input_error() => format!("Input error: {err}"),
        _ => format!("Unexpected error: {error:#}"),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<()> {
    debug!(path = %cli.config.display(), "loading configuration");
    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    let calculator = SalaryBreakdownCalculator::from_config(loader.config())?;

    let gross_package = read_gross_package(cli.gross)?;
    let pay_frequency = read_pay_frequency(cli.frequency)?;

    let breakdown = calculator.calculate_breakdown(gross_package, pay_frequency)?;
    print_breakdown(&breakdown, cli.format)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", describe_error(&error));
            ExitCode::FAILURE
        }
    }
}
