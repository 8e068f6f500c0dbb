//! Batch placement runner (default binary).
//!
//! Reads shape sequences (`Q0,T1,I4`, one game per line) from a file or
//! stdin and prints the resulting stack height of every line.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use tetris_grid::batch::{run_batch, BatchOptions, OutputFormat};
use tetris_grid::engine::{Engine, LogObserver};
use tetris_grid::types::{GridConfig, DEFAULT_COLS, DEFAULT_ROWS};

/// Raises the default log level to `debug` when set.
const DEBUG_ENV: &str = "TETRIS_ENGINE_DEBUG";

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file with one comma-separated shape sequence per line ("-" or absent for stdin)
    input: Option<PathBuf>,
    /// Number of rows in the grid
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of columns in the grid
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Include the final grid of every line in the output
    #[arg(long)]
    grid: bool,
    /// Log filter, e.g. "info", "debug" (overrides TETRIS_ENGINE_DEBUG)
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(filter: Option<&str>) {
    let default = if std::env::var_os(DEBUG_ENV).is_some() {
        "debug"
    } else {
        "warn"
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let config = GridConfig::new(args.rows, args.cols);
    let mut engine = Engine::with_observer(config, LogObserver);
    let options = BatchOptions {
        format: args.format,
        include_grid: args.grid,
    };
    let stdout = io::stdout().lock();

    let summary = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_batch(&mut engine, BufReader::new(file), stdout, options)?
        }
        _ => run_batch(&mut engine, io::stdin().lock(), stdout, options)?,
    };

    info!(
        "Processed {} lines ({} shapes)",
        summary.lines, summary.shapes
    );
    Ok(())
}
