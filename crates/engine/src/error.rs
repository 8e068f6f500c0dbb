use thiserror::Error;

/// Why a shape could not be placed
///
/// Every variant leaves the grid exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The target column has no unoccupied cell left.
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    /// No row up to the top of the grid admits the shape's footprint.
    #[error("shape cannot be placed at column {column}")]
    NoRestingRow { column: usize },
    /// The target column lies outside the grid.
    #[error("column {column} is outside a grid of {cols} columns")]
    InvalidColumn { column: usize, cols: usize },
    /// `initialize` has not been called yet.
    #[error("engine grid is not initialized")]
    Uninitialized,
}
