//! CLI entry point for the bikeshare statistics tool.
//!
//! Runs an interactive session by default. Passing `--city` analyzes one
//! selection non-interactively and exits.

mod prompt;

use anyhow::{Context, Result};
use bikeshare_stats::analyzers::analyzer::report_for;
use bikeshare_stats::config::{City, CityConfig};
use bikeshare_stats::filter::{DayFilter, FilterCriteria, MonthFilter, filter};
use bikeshare_stats::loader::load_city;
use bikeshare_stats::output::{print_json, print_pretty, render_report, render_rows};
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// City to analyze; skips the interactive prompts when given
    #[arg(short, long, value_enum, ignore_case = true)]
    city: Option<City>,

    /// Month filter (january..june or all)
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = MonthFilter::All)]
    month: MonthFilter,

    /// Weekday filter (monday..sunday or all)
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = DayFilter::All)]
    day: DayFilter,

    /// Directory holding the city CSV files
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// JSON file overriding the CSV file name per city
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Number of raw rows to print before the report (non-interactive only)
    #[arg(long, default_value_t = 0)]
    raw_rows: usize,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut config = CityConfig::new(&cli.data_dir);
    if let Some(path) = &cli.config {
        config = config
            .load_overrides(path)
            .with_context(|| format!("loading city config {}", path.display()))?;
    }
    info!(data_dir = %config.data_dir().display(), "Data directory");
    for (city, file) in config.iter() {
        info!(city = %city, file, "City source configured");
    }

    let result = match cli.city {
        Some(city) => run_once(
            &config,
            city,
            FilterCriteria::new(cli.month, cli.day),
            cli.json,
            cli.raw_rows,
        ),
        None => run_interactive(&config, cli.json),
    };

    if let Err(e) = &result {
        error!(error = %e, "Run aborted");
    }
    result
}

/// Loads, filters and reports on one selection.
#[tracing::instrument(skip(config, json, raw_rows), fields(city = %city))]
fn run_once(
    config: &CityConfig,
    city: City,
    criteria: FilterCriteria,
    json: bool,
    raw_rows: usize,
) -> Result<()> {
    let dataset = load_city(config, city)?;
    let selected = filter(&dataset, &criteria);

    if raw_rows > 0 {
        render_rows(&mut std::io::stdout().lock(), &selected, 0, raw_rows)?;
    }

    let report = report_for(&selected, criteria)?;
    print_pretty(&report);
    if json {
        print_json(&report)
    } else {
        render_report(&mut std::io::stdout().lock(), &report)
    }
}

/// Prompt → load/filter → raw rows → report, until the user stops.
fn run_interactive(config: &CityConfig, json: bool) -> Result<()> {
    loop {
        let (city, criteria) = prompt::get_filters()?;
        info!(city = %city, month = %criteria.month, day = %criteria.day, "Selection made");

        let dataset = load_city(config, city)?;
        let selected = filter(&dataset, &criteria);

        prompt::display_raw_data(&selected)?;

        let report = report_for(&selected, criteria)?;
        print_pretty(&report);
        if json {
            print_json(&report)?;
        } else {
            render_report(&mut std::io::stdout().lock(), &report)?;
        }

        if !prompt::restart()? {
            break;
        }
    }

    Ok(())
}
