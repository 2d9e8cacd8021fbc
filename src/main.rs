//! Emit a single structured record from the command line.
//!
//! ```text
//! kvlog [--config PATH] [--level LVL] <MESSAGE> [KEY=VALUE]...
//! ```
//!
//! Records are bridged into `tracing` and printed by the fmt subscriber.
//! The subscriber's default filter is widened to the emitted level, so an
//! invalid `--level` (which falls back to `dbug`) is still printed.

use std::path::PathBuf;

use clap::Parser;
use kvlog::config::{load_config, LoggingConfig};
use kvlog::{Fields, Level, Logger, TracingHandler, Value};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kvlog")]
#[command(about = "Emit a structured log record", long_about = None)]
struct Cli {
    /// TOML file with `level` and a `[context]` table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level of the emitted record (crit, eror, warn, info, dbug).
    #[arg(short, long, default_value = "info")]
    level: String,

    /// Message text.
    message: String,

    /// Context pairs as KEY=VALUE.
    #[arg(value_parser = parse_pair)]
    pairs: Vec<(String, String)>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggingConfig::default(),
    };

    let (level, err) = Level::decode_or_default(&cli.level);
    let max_level = LevelFilter::from_level(config.level_for(level).to_tracing());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(max_level.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(err) = err {
        tracing::warn!(error = %err, fallback = %level, "Invalid level, using fallback");
    }

    let log = Logger::from_config(&config, TracingHandler::new());
    let fields: Vec<Value> = cli
        .pairs
        .into_iter()
        .flat_map(|(k, v)| [Value::from(k), Value::from(v)])
        .collect();
    log.log(level, cli.message, Fields::List(fields));

    Ok(())
}
