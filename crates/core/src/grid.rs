//! Grid module - flat storage for cell occupancy
//!
//! The grid is `rows x cols` cells stored row-major in a single vector.
//! Row 0 is the bottom of the playfield and row indices grow upward, so
//! "shifting rows down" means copying a higher row index onto a lower one.

use crate::types::{CellState, Coordinate};

/// The playfield - `rows x cols` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell unoccupied
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Unoccupied; rows * cols],
        }
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(coord.row as usize * self.cols + coord.col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a coordinate falls outside the grid
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.row < 0
            || coord.row as usize >= self.rows
            || coord.col < 0
            || coord.col as usize >= self.cols
    }

    /// Get the cell at `coord`, or None if out of bounds
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at `coord`
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Cells of a single row, left to right
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if every cell in a row is occupied
    ///
    /// Blocked cells do not count as filled.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(CellState::is_occupied)
    }

    /// Remove `row` by shifting rows `row + 1..=top` down one position and
    /// resetting row `top` to unoccupied. Rows above `top` are untouched.
    ///
    /// Returns false (and does nothing) if `row > top` or `top` is out of range.
    pub fn remove_row(&mut self, row: usize, top: usize) -> bool {
        if row > top || top >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells
            .copy_within((row + 1) * width..(top + 1) * width, row * width);

        let top_start = top * width;
        self.cells[top_start..top_start + width].fill(CellState::Unoccupied);
        true
    }

    /// Reset every cell to unoccupied
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Unoccupied);
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy out as one vector per row, row 0 first
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(<[CellState]>::to_vec)
            .collect()
    }
}
