//! Shape request input module.
//!
//! Turns text such as `Q0,T1,I4` into [`crate::types::Shape`] values for the
//! engine. Independent of where the text comes from (file, stdin, tests).

pub mod parse;

pub use tetris_grid_types as types;

pub use parse::{parse_line, parse_shape, ParseError};
