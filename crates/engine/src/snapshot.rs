use serde::{Deserialize, Serialize};

use crate::types::CellState;

/// Point-in-time copy of the engine's grid.
///
/// `cells` lists rows bottom first (index 0 is row 0). It is empty when the
/// engine has not been initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub height: usize,
    pub cells: Vec<Vec<CellState>>,
}

impl GridSnapshot {
    /// Render one string per row, top row first, using [`CellState::as_char`].
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .rev()
            .map(|row| row.iter().map(CellState::as_char).collect())
            .collect()
    }
}
