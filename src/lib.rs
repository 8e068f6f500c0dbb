//! Tetris grid (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names and hosts the
//! batch runner used by the `tetris-grid` binary.

pub mod batch;

pub use tetris_grid_core as core;
pub use tetris_grid_engine as engine;
pub use tetris_grid_input as input;
pub use tetris_grid_types as types;
