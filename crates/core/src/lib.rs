//! Core grid logic - pure, deterministic, and testable
//!
//! This crate holds the two leaf pieces of the engine:
//!
//! - [`shapes`]: the shape catalog, mapping a variant and a reference
//!   coordinate to the four cells it covers
//! - [`grid`]: flat `rows x cols` occupancy storage with bounds checks and
//!   row removal
//!
//! Neither knows about placement rules or height tracking; those live in the
//! engine crate.
//!
//! # Example
//!
//! ```
//! use tetris_grid_core::{get_coordinates, Grid};
//! use tetris_grid_core::types::{CellState, Coordinate, ShapeKind};
//!
//! let mut grid = Grid::new(3, 3);
//! for cell in get_coordinates(ShapeKind::Q, Coordinate::new(1, 0)) {
//!     grid.set(cell, CellState::Occupied);
//! }
//! assert_eq!(grid.get(Coordinate::new(0, 1)), Some(CellState::Occupied));
//! ```

pub mod grid;
pub mod shapes;

pub use tetris_grid_types as types;

pub use grid::Grid;
pub use shapes::{get_coordinates, offsets, Footprint};
