//! The sampled terrain surface.
//!
//! A [`HeightGrid`] is a `width x height` lattice of world-space positions and
//! vertex colors, stored row-major with linear index `row * width + col`. It is
//! built once from one of the two sources and never changes afterwards.

use cgmath::Vector3;
use image::DynamicImage;

use crate::{
    config::{ImageLayout, ParametricLayout},
    error::{HeightMapError, Result},
};

/// Largest vertex count a `u16` index buffer can address.
pub const MAX_VERTICES: u64 = u16::MAX as u64 + 1;

/// Immutable grid of terrain samples indexed by `(col, row)`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    width: u32,
    height: u32,
    positions: Vec<Vector3<f32>>,
    colors: Vec<[f32; 4]>,
}

/// Fails with `SampleCount` unless `actual` matches the grid's cell count.
pub(crate) fn check_sample_count(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(HeightMapError::SampleCount {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Rejects grids that are empty or too large for 16-bit indices.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(HeightMapError::EmptyGrid { width, height });
    }
    if width as u64 * height as u64 > MAX_VERTICES {
        return Err(HeightMapError::TooManyVertices { width, height });
    }
    Ok(())
}

impl HeightGrid {
    /// Build a grid from row-major positions and colors, one of each per cell.
    pub fn from_positions(
        width: u32,
        height: u32,
        positions: Vec<Vector3<f32>>,
        colors: Vec<[f32; 4]>,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        check_sample_count("positions", len, positions.len())?;
        check_sample_count("colors", len, colors.len())?;
        Ok(Self {
            width,
            height,
            positions,
            colors,
        })
    }

    /// Sample a grayscale image: the red channel becomes the height, the pixel
    /// lattice is stretched over the layout's world extent and centered on the origin.
    pub fn from_image(img: &DynamicImage, layout: &ImageLayout) -> Result<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        check_dimensions(width, height)?;

        // enumerate_pixels walks rows top to bottom, i.e. `row * width + col`
        let positions = rgba
            .enumerate_pixels()
            .map(|(col, row, pixel)| {
                Vector3::new(
                    layout.x(col, width),
                    layout.y(pixel[0]),
                    layout.z(row, height),
                )
            })
            .collect::<Vec<_>>();
        let colors = vec![layout.color; positions.len()];

        log::debug!("Sampled {}x{} heightmap image", width, height);
        Self::from_positions(width, height, positions, colors)
    }

    /// Sample an analytic height function over a square grid.
    ///
    /// X grows with the column and Z with the row so that both sources share the
    /// same winding. The color encodes the grid ratios, with the row ratio inverted.
    pub fn from_parametric(layout: &ParametricLayout) -> Result<Self> {
        let n = layout.size_per_side;
        check_dimensions(n, n)?;

        let len = n as usize * n as usize;
        let mut positions = Vec::with_capacity(len);
        let mut colors = Vec::with_capacity(len);
        for row in 0..n {
            let z = layout.position(row);
            for col in 0..n {
                let x = layout.position(col);
                positions.push(Vector3::new(x, (layout.height_fn)(x, z), z));
                colors.push([layout.ratio(col), 1.0 - layout.ratio(row), 0.5, 1.0]);
            }
        }

        log::debug!("Sampled {}x{} parametric heightmap", n, n);
        Self::from_positions(n, n, positions, colors)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples, `width * height`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Linear row-major index of `(col, row)`.
    pub fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn is_last_row(&self, row: u32) -> bool {
        row + 1 == self.height
    }

    /// # Panics
    ///
    /// If `(col, row)` lies outside the grid.
    pub fn position(&self, col: u32, row: u32) -> Vector3<f32> {
        assert!(col < self.width && row < self.height, "({col}, {row}) outside grid");
        self.positions[self.index(col, row)]
    }

    /// Row-major positions.
    pub fn positions(&self) -> &[Vector3<f32>] {
        &self.positions
    }

    /// Row-major colors.
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// `(col, row)` of every sample in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (col, row)))
    }
}
