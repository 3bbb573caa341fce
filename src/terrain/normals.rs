//! Per-vertex normal estimation on a height grid.
//!
//! Each vertex looks at up to three neighbors: up-left `(col-1, row+1)`, up
//! `(col, row+1)` and left `(col-1, row)`. Neighbors that fall off the grid
//! contribute a zero edge, so vertices in the first column or the last row end
//! up with a zero normal. That is the boundary policy, not an error.

use cgmath::{InnerSpace, Vector3, Zero};

use crate::data_structures::height_grid::HeightGrid;

/// Divide by the length, or return zero when the length is exactly zero.
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let length = v.magnitude();
    if length != 0.0 {
        v / length
    } else {
        Vector3::zero()
    }
}

/// Estimate the surface normal at `(col, row)`.
///
/// The three cross products of the available edges are normalized one by one,
/// summed and normalized again. No state is kept between calls.
///
/// # Panics
///
/// If `(col, row)` lies outside the grid.
pub fn estimate_normal(grid: &HeightGrid, col: u32, row: u32) -> Vector3<f32> {
    let origin = grid.position(col, row);
    let has_left = col > 0;
    let has_up = !grid.is_last_row(row);

    let up_left = if has_left && has_up {
        grid.position(col - 1, row + 1) - origin
    } else {
        Vector3::zero()
    };
    let up = if has_up {
        grid.position(col, row + 1) - origin
    } else {
        Vector3::zero()
    };
    let left = if has_left {
        grid.position(col - 1, row) - origin
    } else {
        Vector3::zero()
    };

    let sum = normalize_or_zero(up_left.cross(up))
        + normalize_or_zero(up.cross(left))
        + normalize_or_zero(left.cross(up_left));
    normalize_or_zero(sum)
}

/// Normals of every vertex, row-major.
pub fn estimate_normals(grid: &HeightGrid) -> Vec<Vector3<f32>> {
    grid.coords()
        .map(|(col, row)| estimate_normal(grid, col, row))
        .collect()
}
