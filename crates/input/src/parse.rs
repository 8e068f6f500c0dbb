//! Text parsing of shape requests.
//!
//! A token is a shape letter followed by a decimal target column (`Q0`,
//! `t12`). A line is a comma-separated list of tokens.

use thiserror::Error;

use crate::types::{Shape, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty shape token")]
    Empty,
    #[error("unknown shape '{0}'")]
    UnknownShape(char),
    #[error("missing column in '{0}'")]
    MissingColumn(String),
    #[error("invalid column in '{0}'")]
    InvalidColumn(String),
}

/// Parse a single token such as `Q0` or `j 4`.
pub fn parse_shape(token: &str) -> Result<Shape, ParseError> {
    let token = token.trim();
    let mut chars = token.chars();
    let letter = chars.next().ok_or(ParseError::Empty)?;
    let kind = ShapeKind::from_char(letter).ok_or(ParseError::UnknownShape(letter))?;

    let digits = chars.as_str().trim();
    if digits.is_empty() {
        return Err(ParseError::MissingColumn(token.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidColumn(token.to_string()));
    }
    let column = digits
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidColumn(token.to_string()))?;

    Ok(Shape::new(kind, column))
}

/// Parse a comma-separated line of tokens. A blank line yields no shapes.
pub fn parse_line(line: &str) -> Result<Vec<Shape>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    line.split(',').map(parse_shape).collect()
}
