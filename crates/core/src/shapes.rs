//! Shapes module - the fixed footprint of every shape variant
//!
//! A footprint is four cells expressed as (Δrow, Δcol) offsets from a reference
//! coordinate, the shape's top-left-most anchor. Offsets only point down
//! (Δrow <= 0) or right (Δcol >= 0), so the anchor row is always the highest
//! row a shape covers.
//!
//! No bounds checking happens here: a footprint may contain negative or
//! out-of-range coordinates, and rejecting them is up to the caller.

use arrayvec::ArrayVec;

use crate::types::{Coordinate, ShapeKind, FOOTPRINT_CELLS};

/// Offset of a single cell relative to the reference coordinate: (Δrow, Δcol)
pub type CellOffset = (i32, i32);

/// Offsets of all cells in a shape
pub type ShapeOffsets = [CellOffset; FOOTPRINT_CELLS];

/// Concrete cells covered by a shape at some reference coordinate
pub type Footprint = ArrayVec<Coordinate, FOOTPRINT_CELLS>;

const Q_OFFSETS: ShapeOffsets = [(0, 0), (0, 1), (-1, 0), (-1, 1)];
const Z_OFFSETS: ShapeOffsets = [(0, 0), (0, 1), (-1, 1), (-1, 2)];
const S_OFFSETS: ShapeOffsets = [(0, 1), (0, 2), (-1, 0), (-1, 1)];
const T_OFFSETS: ShapeOffsets = [(0, 0), (0, 1), (0, 2), (-1, 1)];
const I_OFFSETS: ShapeOffsets = [(0, 0), (0, 1), (0, 2), (0, 3)];
const L_OFFSETS: ShapeOffsets = [(0, 0), (-1, 0), (-2, 0), (-2, 1)];
const J_OFFSETS: ShapeOffsets = [(0, 1), (-1, 1), (-2, 0), (-2, 1)];

/// Get the offset table for a shape kind
pub fn offsets(kind: ShapeKind) -> &'static ShapeOffsets {
    match kind {
        ShapeKind::Q => &Q_OFFSETS,
        ShapeKind::Z => &Z_OFFSETS,
        ShapeKind::S => &S_OFFSETS,
        ShapeKind::T => &T_OFFSETS,
        ShapeKind::I => &I_OFFSETS,
        ShapeKind::L => &L_OFFSETS,
        ShapeKind::J => &J_OFFSETS,
    }
}

/// Get the cells a shape occupies when its reference coordinate is `anchor`
///
/// Cells are returned in offset-table order.
pub fn get_coordinates(kind: ShapeKind, anchor: Coordinate) -> Footprint {
    offsets(kind)
        .iter()
        .map(|&(d_row, d_col)| anchor.offset(d_row, d_col))
        .collect()
}
