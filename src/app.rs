//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; this module:
//! - parses CLI arguments and environment into a `RunConfig`
//! - sets up logging
//! - runs the query pipeline against the live rate page
//! - prints the report and writes optional exports

use clap::Parser;
use log::LevelFilter;

use crate::cli::Cli;
use crate::data::{BotRatePage, DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT};
use crate::debug::LogDiagnostics;
use crate::domain::{OutputFormat, RunConfig, SeriesOrder};
use crate::error::AppError;

pub mod pipeline;

const ENV_SOURCE_URL: &str = "FX_SOURCE_URL";
const ENV_USER_AGENT: &str = "FX_USER_AGENT";

/// Entry point for the `fx` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dotenvy::dotenv().ok();

    let config = config_from_args(&cli, |key| std::env::var(key).ok());
    execute(&config)
}

fn execute(config: &RunConfig) -> Result<(), AppError> {
    let source = BotRatePage::new(&config.source_url, &config.user_agent);
    let run = pipeline::run_query(&config.query, config.as_of, config.order, &source, &LogDiagnostics);

    match config.output {
        OutputFormat::Text => print!("{}", crate::report::format_run(&run, config.tail)),
        OutputFormat::Json => {
            let json = crate::report::to_json_string(&run)
                .map_err(|e| AppError::config(format!("Failed to render JSON: {e}")))?;
            println!("{json}");
        }
    }

    if let Some(path) = &config.export_json {
        crate::io::write_run_json(path, &run)?;
    }
    if let Some(path) = &config.export_csv {
        if !crate::io::write_series_csv(path, &run)? {
            log::warn!("no series to export, skipped {}", path.display());
        }
    }

    match run.result {
        Ok(_) => Ok(()),
        Err(_) => Err(AppError::reported()),
    }
}

/// Resolve settings: CLI flags first, then `env`, then defaults.
pub fn config_from_args(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> RunConfig {
    let source_url = cli
        .url
        .clone()
        .or_else(|| env(ENV_SOURCE_URL))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
    let user_agent = env(ENV_USER_AGENT)
        .filter(|ua| !ua.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    RunConfig {
        query: cli.query.clone(),
        source_url,
        user_agent,
        as_of: cli.as_of.unwrap_or_else(|| chrono::Local::now().date_naive()),
        order: if cli.sort_by_date {
            SeriesOrder::Chronological
        } else {
            SeriesOrder::AsListed
        },
        tail: cli.tail,
        output: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        export_json: cli.export.clone(),
        export_csv: cli.export_csv.clone(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
