//! Instrumentation hooks for engine events.
//!
//! The engine reports what it does through an [`EngineObserver`] it owns.
//! Every hook has an empty default body, so implementors only override the
//! events they care about.

use std::fmt;

use log::{info, warn};

use crate::error::PlacementError;
use crate::types::Coordinate;

pub trait EngineObserver {
    /// The grid was (re)allocated.
    fn initialized(&mut self, _rows: usize, _cols: usize) {}

    /// A shape settled with its reference cell at `anchor`.
    fn placed(&mut self, _shape: &dyn fmt::Display, _anchor: Coordinate) {}

    /// A full row was removed. `row` is its index at removal time.
    fn row_removed(&mut self, _row: usize) {}

    /// A placement request failed.
    fn rejected(&mut self, _shape: &dyn fmt::Display, _err: &PlacementError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

/// Observer that forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl EngineObserver for LogObserver {
    fn initialized(&mut self, rows: usize, cols: usize) {
        info!("Initializing engine with a {}x{} grid", rows, cols);
    }

    fn placed(&mut self, shape: &dyn fmt::Display, anchor: Coordinate) {
        info!("Placed {} at {}", shape, anchor);
    }

    fn row_removed(&mut self, row: usize) {
        info!("Row {} removed", row);
    }

    fn rejected(&mut self, shape: &dyn fmt::Display, err: &PlacementError) {
        warn!("{} rejected: {}", shape, err);
    }
}
