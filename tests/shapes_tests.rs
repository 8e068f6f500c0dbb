//! Shape catalog tests - footprints at a fixed reference coordinate

use tetris_grid::core::shapes::{get_coordinates, offsets};
use tetris_grid::types::{Coordinate, ShapeKind};

fn coords(cells: &[(i32, i32)]) -> Vec<Coordinate> {
    cells.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
}

fn footprint_at_1_0(kind: ShapeKind) -> Vec<Coordinate> {
    get_coordinates(kind, Coordinate::new(1, 0)).to_vec()
}

#[test]
fn test_q_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::Q),
        coords(&[(1, 0), (1, 1), (0, 0), (0, 1)])
    );
}

#[test]
fn test_z_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::Z),
        coords(&[(1, 0), (1, 1), (0, 1), (0, 2)])
    );
}

#[test]
fn test_s_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::S),
        coords(&[(1, 1), (1, 2), (0, 0), (0, 1)])
    );
}

#[test]
fn test_t_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::T),
        coords(&[(1, 0), (1, 1), (1, 2), (0, 1)])
    );
}

#[test]
fn test_i_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::I),
        coords(&[(1, 0), (1, 1), (1, 2), (1, 3)])
    );
}

#[test]
fn test_l_shape_coordinates() {
    // Reaches below row 0 from this anchor; no bounds checking here.
    assert_eq!(
        footprint_at_1_0(ShapeKind::L),
        coords(&[(1, 0), (0, 0), (-1, 0), (-1, 1)])
    );
}

#[test]
fn test_j_shape_coordinates() {
    assert_eq!(
        footprint_at_1_0(ShapeKind::J),
        coords(&[(1, 1), (0, 1), (-1, 0), (-1, 1)])
    );
}

#[test]
fn test_footprint_is_offsets_plus_anchor() {
    let anchor = Coordinate::new(7, 3);
    for kind in ShapeKind::ALL {
        let expected: Vec<Coordinate> = offsets(kind)
            .iter()
            .map(|&(dr, dc)| Coordinate::new(7 + dr, 3 + dc))
            .collect();
        assert_eq!(get_coordinates(kind, anchor).to_vec(), expected, "{}", kind);
    }
}

#[test]
fn test_coordinate_fields() {
    let coord = Coordinate::new(1, 0);
    assert_eq!(coord.row, 1);
    assert_eq!(coord.col, 0);
}
