//! Grid engine - owns the board and resolves shape placements
//!
//! [`Engine`] is the single operational entry point:
//!
//! - [`Engine::initialize`] allocates or resets the grid
//! - [`Engine::place`] drops a shape and returns where it settled
//! - [`Engine::height`] reports the current stack height
//!
//! Events (initialization, placements, row removals, rejections) are reported
//! to an injectable [`EngineObserver`]; [`LogObserver`] forwards them to the
//! `log` facade.
//!
//! # Example
//!
//! ```
//! use tetris_grid_engine::Engine;
//! use tetris_grid_engine::types::{Coordinate, GridConfig, Shape, ShapeKind};
//!
//! let mut engine = Engine::new(GridConfig::default());
//! engine.initialize();
//!
//! let at = engine.place(&Shape::new(ShapeKind::Q, 0)).unwrap();
//! assert_eq!(at, Coordinate::new(1, 0));
//! assert_eq!(engine.height(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod snapshot;

pub use tetris_grid_core as core;
pub use tetris_grid_types as types;

pub use engine::Engine;
pub use error::PlacementError;
pub use observer::{EngineObserver, LogObserver, NoopObserver};
pub use snapshot::GridSnapshot;
