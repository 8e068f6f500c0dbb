//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! They are plain data structures with no behaviour beyond parsing and
//! formatting, usable by the shape catalog, the grid engine and the batch runner.
//!
//! # Grid Orientation
//!
//! - Row index 0 is the bottom of the grid; a higher row index is physically higher.
//! - Column index 0 is the left edge.
//! - Default dimensions are 10 rows by 10 columns.
//!
//! # Examples
//!
//! ```
//! use tetris_grid_types::{Coordinate, Shape, ShapeKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse a shape letter (case-insensitive)
//! let kind = ShapeKind::from_str("q").unwrap();
//! assert_eq!(kind, ShapeKind::Q);
//!
//! // A shape request targets a column
//! let shape = Shape::new(ShapeKind::T, 3);
//! assert_eq!(shape.to_string(), "T3");
//!
//! // Coordinates may go negative while footprints are computed
//! let below = Coordinate::new(0, 1).offset(-1, 0);
//! assert_eq!(below, Coordinate::new(-1, 1));
//!
//! assert_eq!(DEFAULT_ROWS, 10);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default grid height in rows
pub const DEFAULT_ROWS: usize = 10;

/// Default grid width in columns
pub const DEFAULT_COLS: usize = 10;

/// Number of cells in every shape footprint
pub const FOOTPRINT_CELLS: usize = 4;

/// A cell position on the grid: (row, column)
///
/// Both components are signed because footprint generation can produce
/// positions below row 0 or left of column 0 before bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return this coordinate shifted by (`d_row`, `d_col`)
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Occupancy state of a single grid cell
///
/// - **Unoccupied**: free for any shape
/// - **Occupied**: holds part of a placed shape
/// - **Blocked**: empty but unusable, sealed under a shape resting above it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Unoccupied,
    Occupied,
    Blocked,
}

impl CellState {
    pub fn is_unoccupied(&self) -> bool {
        matches!(self, CellState::Unoccupied)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, CellState::Occupied)
    }

    /// Single-character form used in compact dumps
    ///
    /// ```
    /// use tetris_grid_types::CellState;
    ///
    /// assert_eq!(CellState::Unoccupied.as_char(), '.');
    /// assert_eq!(CellState::Occupied.as_char(), '#');
    /// assert_eq!(CellState::Blocked.as_char(), 'x');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            CellState::Unoccupied => '.',
            CellState::Occupied => '#',
            CellState::Blocked => 'x',
        }
    }
}

/// The shape variants accepted by the engine
///
/// Shapes never rotate; each variant has exactly one footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

impl ShapeKind {
    /// Every variant, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Q,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse a shape kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Q"), Some(ShapeKind::Q));
    /// assert_eq!(ShapeKind::from_str("j"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("O"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse a shape kind from a single character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'Q' => Some(ShapeKind::Q),
            'Z' => Some(ShapeKind::Z),
            'S' => Some(ShapeKind::S),
            'T' => Some(ShapeKind::T),
            'I' => Some(ShapeKind::I),
            'L' => Some(ShapeKind::L),
            'J' => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Uppercase letter of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Q => "Q",
            ShapeKind::Z => "Z",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::I => "I",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placement request: a shape variant dropped at a target (left) column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub column: usize,
}

impl Shape {
    pub const fn new(kind: ShapeKind, column: usize) -> Self {
        Self { kind, column }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.column)
    }
}

/// Grid dimensions, fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl GridConfig {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
