#![allow(dead_code)]

use std::io::Cursor;

use cgmath::{InnerSpace, Vector3};
use image::{GrayImage, ImageFormat};
use treasure_terrain::{HeightGrid, HeightMapMesh};

pub(crate) const EPSILON: f32 = 1e-4;

/// Encode a grayscale PNG whose pixel `(col, row)` is `value(col, row)`.
pub(crate) fn encode_png(width: u32, height: u32, value: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |col, row| image::Luma([value(col, row)]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding of an in-memory image");
    bytes
}

/// A grid on the XZ plane with unit spacing and `y = height(col, row)`.
pub(crate) fn grid_from_fn(width: u32, height: u32, y: impl Fn(u32, u32) -> f32) -> HeightGrid {
    let mut positions = Vec::new();
    for row in 0..height {
        for col in 0..width {
            positions.push(Vector3::new(col as f32, y(col, row), row as f32));
        }
    }
    let colors = vec![[1.0; 4]; positions.len()];
    HeightGrid::from_positions(width, height, positions, colors).expect("valid test grid")
}

pub(crate) fn assert_vec3_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert!(
        (actual - expected).magnitude() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub(crate) fn is_unit_or_zero(v: Vector3<f32>) -> bool {
    let length = v.magnitude();
    length < EPSILON || (length - 1.0).abs() < EPSILON
}

/// Normal of the vertex at `(col, row)` in a built mesh.
pub(crate) fn mesh_normal(mesh: &HeightMapMesh, col: u32, row: u32) -> Vector3<f32> {
    let vertex = mesh.vertices()[(row * mesh.width() + col) as usize];
    vertex.normal.into()
}
