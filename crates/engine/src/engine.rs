//! Engine module - placement, height tracking and row clearing
//!
//! The engine owns the grid and resolves each placement request to a final
//! resting position:
//!
//! 1. Seed the search with the lowest unoccupied cell of the target column.
//!    The shape can never rest below it, because everything under it in that
//!    column is already taken.
//! 2. Scan upward from the seed until the whole footprint fits.
//! 3. Commit the footprint, sealing every free cell underneath it as
//!    [`CellState::Blocked`].
//! 4. Raise the height if needed and remove rows that became fully occupied.
//!
//! Height is kept as the highest occupied row index (`-1` when empty) and
//! reported as that index plus one.

use std::fmt;

use crate::core::{get_coordinates, Footprint, Grid};
use crate::error::PlacementError;
use crate::observer::{EngineObserver, NoopObserver};
use crate::snapshot::GridSnapshot;
use crate::types::{CellState, Coordinate, GridConfig, Shape};

/// Highest occupied row index of an empty grid
const EMPTY_TOP_ROW: i32 = -1;

/// A single-player placement engine over a fixed-size grid
#[derive(Debug, Clone)]
pub struct Engine<O: EngineObserver = NoopObserver> {
    config: GridConfig,
    /// None until `initialize` is called
    grid: Option<Grid>,
    top_row: i32,
    observer: O,
}

impl Engine {
    /// Create an engine with an uninitialized grid of the given dimensions
    pub fn new(config: GridConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<O: EngineObserver> Engine<O> {
    /// Create an engine that reports its events to `observer`
    pub fn with_observer(config: GridConfig, observer: O) -> Self {
        Self {
            config,
            grid: None,
            top_row: EMPTY_TOP_ROW,
            observer,
        }
    }

    /// Allocate (or reset) the grid to all-unoccupied cells and the height to 0
    pub fn initialize(&mut self) {
        let GridConfig { rows, cols } = self.config;
        match self.grid.as_mut() {
            Some(grid) => grid.clear(),
            None => self.grid = Some(Grid::new(rows, cols)),
        }
        self.top_row = EMPTY_TOP_ROW;
        self.observer.initialized(rows, cols);
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Current stack height: 0 for an empty grid, otherwise one more than
    /// the highest occupied row index
    pub fn height(&self) -> usize {
        (self.top_row + 1) as usize
    }

    /// Get the state of a cell, or None if out of bounds or uninitialized
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.as_ref().and_then(|grid| grid.get(coord))
    }

    /// Check if a coordinate lies outside the configured dimensions
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.row < 0
            || coord.row as usize >= self.config.rows
            || coord.col < 0
            || coord.col as usize >= self.config.cols
    }

    /// Check if every coordinate is inside the grid and unoccupied
    ///
    /// Blocked cells count as taken. Always false before `initialize`.
    pub fn is_unoccupied(&self, coords: &[Coordinate]) -> bool {
        let Some(grid) = self.grid.as_ref() else {
            return false;
        };
        coords.iter().all(|&coord| {
            !self.is_out_of_bounds(coord)
                && grid.get(coord).is_some_and(|state| state.is_unoccupied())
        })
    }

    /// Find the lowest unoccupied row in a column, scanning up from row 0
    pub fn highest_unoccupied_row(&self, col: usize) -> Result<usize, PlacementError> {
        if self.grid.is_none() {
            return Err(PlacementError::Uninitialized);
        }
        let col_idx = col as i32;
        (0..self.config.rows)
            .find(|&row| self.is_unoccupied(&[Coordinate::new(row as i32, col_idx)]))
            .ok_or(PlacementError::ColumnFull { column: col })
    }

    /// Drop a shape into its target column and return where its reference
    /// cell settled
    ///
    /// On error the grid and height are left untouched.
    pub fn place(&mut self, shape: &Shape) -> Result<Coordinate, PlacementError> {
        let result = self.try_place(shape);
        if let Err(err) = &result {
            self.observer.rejected(shape, err);
        }
        result
    }

    fn try_place(&mut self, shape: &Shape) -> Result<Coordinate, PlacementError> {
        if self.grid.is_none() {
            return Err(PlacementError::Uninitialized);
        }
        if shape.column >= self.config.cols {
            return Err(PlacementError::InvalidColumn {
                column: shape.column,
                cols: self.config.cols,
            });
        }

        let start_row = self.highest_unoccupied_row(shape.column)?;
        let kind = shape.kind;
        self.settle(shape, shape.column, start_row, |anchor| {
            get_coordinates(kind, anchor)
        })
    }

    /// Scan upward from `start_row` for the first row where `footprint` fits,
    /// then commit it
    fn settle<F>(
        &mut self,
        shape: &dyn fmt::Display,
        start_col: usize,
        start_row: usize,
        footprint: F,
    ) -> Result<Coordinate, PlacementError>
    where
        F: Fn(Coordinate) -> Footprint,
    {
        let col = start_col as i32;
        let (anchor, cells) = (start_row..self.config.rows)
            .map(|row| {
                let anchor = Coordinate::new(row as i32, col);
                (anchor, footprint(anchor))
            })
            .find(|(_, cells)| self.is_unoccupied(cells))
            .ok_or(PlacementError::NoRestingRow { column: start_col })?;

        self.mark_occupied(&cells);
        self.observer.placed(shape, anchor);
        self.update_height(anchor);
        self.clear_filled_rows();
        Ok(anchor)
    }

    /// Mark cells occupied, sealing every non-occupied cell below each of
    /// them (down to row 0) as blocked
    ///
    /// Out-of-bounds coordinates are skipped.
    pub fn mark_occupied(&mut self, coords: &[Coordinate]) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        for &coord in coords {
            if grid.is_out_of_bounds(coord) {
                continue;
            }
            for row in (0..=coord.row).rev() {
                let below = Coordinate::new(row, coord.col);
                if grid.get(below) != Some(CellState::Occupied) {
                    grid.set(below, CellState::Blocked);
                }
            }
            // Occupied overrides the blocked mark set by the walk above.
            grid.set(coord, CellState::Occupied);
        }
    }

    /// Raise the height to cover `coord` if it sits above the current top
    pub fn update_height(&mut self, coord: Coordinate) {
        let max_row = self.config.rows as i32 - 1;
        let row = coord.row.min(max_row);
        if row > self.top_row {
            self.top_row = row;
        }
    }

    /// Remove every fully occupied row below the current height
    ///
    /// Full rows are collected before anything moves, then removed bottom to
    /// top; each removal shifts the remaining rows down by one, so later
    /// indices are adjusted by the number of rows already removed. Returns the
    /// indices as they were before the pass.
    pub fn clear_filled_rows(&mut self) -> Vec<usize> {
        let Some(grid) = self.grid.as_ref() else {
            return Vec::new();
        };

        let full: Vec<usize> = (0..self.height())
            .filter(|&row| grid.is_row_full(row))
            .collect();

        for (removed, &row) in full.iter().enumerate() {
            self.remove_row(row - removed);
        }
        full
    }

    /// Remove `row`, shift every row above it down to the current top, and
    /// lower the height by one
    ///
    /// Does nothing if `row` is above the current top or the grid is empty.
    pub fn remove_row(&mut self, row: usize) {
        if self.top_row < 0 {
            return;
        }
        let top = self.top_row as usize;
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        if !grid.remove_row(row, top) {
            return;
        }
        self.top_row -= 1;
        self.observer.row_removed(row);
    }

    /// Copy the grid state out for inspection or serialization
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.config.rows,
            cols: self.config.cols,
            height: self.height(),
            cells: self.grid.as_ref().map(Grid::to_rows).unwrap_or_default(),
        }
    }
}
