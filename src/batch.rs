//! Batch runner: replays lines of shape requests on a fresh grid each.
//!
//! Each input line (`Q0,T1,I4`) is an independent game: the engine is
//! re-initialized, every shape is placed in order, and one result is written
//! per line. Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::Serialize;

use crate::engine::{Engine, EngineObserver, GridSnapshot};
use crate::input::parse_line;
use crate::types::Shape;

/// How line results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The final height, one number per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    pub format: OutputFormat,
    /// Also emit the grid after each line
    pub include_grid: bool,
}

/// Where one shape of a line came to rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    pub shape: String,
    pub row: i32,
    pub col: i32,
}

/// Result of replaying one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// 1-based line number in the input
    pub line: usize,
    pub height: usize,
    pub placements: Vec<PlacementRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Lines replayed (skipped lines not counted)
    pub lines: usize,
    pub shapes: usize,
}

/// Reset the engine and place `shapes` in order.
pub fn run_line<O: EngineObserver>(
    engine: &mut Engine<O>,
    line: usize,
    shapes: &[Shape],
    include_grid: bool,
) -> Result<LineOutcome> {
    engine.initialize();

    let mut placements = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let at = engine
            .place(shape)
            .with_context(|| format!("line {}: cannot place {}", line, shape))?;
        placements.push(PlacementRecord {
            shape: shape.to_string(),
            row: at.row,
            col: at.col,
        });
    }

    Ok(LineOutcome {
        line,
        height: engine.height(),
        placements,
        grid: include_grid.then(|| engine.snapshot()),
    })
}

/// Replay every line of `input`, writing one result per line to `out`.
pub fn run_batch<O, R, W>(
    engine: &mut Engine<O>,
    input: R,
    mut out: W,
    options: BatchOptions,
) -> Result<BatchSummary>
where
    O: EngineObserver,
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let text = line.with_context(|| format!("failed to read line {}", line_no))?;
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let shapes = parse_line(text).with_context(|| format!("line {}: bad input", line_no))?;
        debug!("line {}: replaying {} shapes", line_no, shapes.len());

        let outcome = run_line(engine, line_no, &shapes, options.include_grid)?;
        write_outcome(&mut out, &outcome, options.format)?;

        summary.lines += 1;
        summary.shapes += shapes.len();
    }

    out.flush()?;
    Ok(summary)
}

fn write_outcome<W: Write>(out: &mut W, outcome: &LineOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", outcome.height)?;
            if let Some(grid) = &outcome.grid {
                for row in grid.to_lines() {
                    writeln!(out, "{}", row)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
