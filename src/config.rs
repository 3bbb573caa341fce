//! Layout parameters for both ways of sourcing a heightmap.
//!
//! The defaults reproduce the treasure-hunt scene: a 400x400 world-unit image
//! terrain sunk below the viewer, or a 32x32 paraboloid over `[-10, 10]`.

use std::fmt;

/// Analytic height function `y = f(x, z)`.
pub type HeightFn = Box<dyn Fn(f32, f32) -> f32>;

/// How grayscale pixels are mapped into world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    /// Extent of the terrain along X, centered on the origin.
    pub world_width: f32,
    /// Extent of the terrain along Z, centered on the origin.
    pub world_depth: f32,
    /// Multiplier applied to the normalized red channel.
    pub height_scale: f32,
    /// Added after scaling.
    pub height_offset: f32,
    /// Constant vertex color.
    pub color: [f32; 4],
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_depth: 400.0,
            // bright pixels are valleys, the sample's terrain is carved downwards
            height_scale: -150.0,
            height_offset: 30.0,
            color: [0.2, 0.4, 0.3, 1.0],
        }
    }
}

impl ImageLayout {
    /// World-space X of a pixel column for an image `width` pixels wide.
    pub fn x(&self, col: u32, width: u32) -> f32 {
        let x_scale = self.world_width / width as f32;
        x_scale * col as f32 - self.world_width / 2.0
    }

    /// World-space Z of a pixel row for an image `height` pixels tall.
    pub fn z(&self, row: u32, height: u32) -> f32 {
        let z_scale = self.world_depth / height as f32;
        z_scale * row as f32 - self.world_depth / 2.0
    }

    /// World-space Y for a red channel intensity.
    pub fn y(&self, red: u8) -> f32 {
        (red as f32 / 255.0) * self.height_scale + self.height_offset
    }
}

/// A square grid sampled from an analytic height function.
pub struct ParametricLayout {
    /// Vertices along each side.
    pub size_per_side: u32,
    /// Lowest X and Z coordinate.
    pub min_position: f32,
    /// Extent along X and Z.
    pub position_range: f32,
    pub height_fn: HeightFn,
}

impl ParametricLayout {
    pub const SIZE_PER_SIDE: u32 = 32;
    pub const MIN_POSITION: f32 = -10.0;
    pub const POSITION_RANGE: f32 = 20.0;

    pub fn new(size_per_side: u32, min_position: f32, position_range: f32) -> Self {
        Self {
            size_per_side,
            min_position,
            position_range,
            height_fn: Box::new(paraboloid),
        }
    }

    /// Replace the height function, keeping the grid.
    pub fn with_height_fn(mut self, height_fn: impl Fn(f32, f32) -> f32 + 'static) -> Self {
        self.height_fn = Box::new(height_fn);
        self
    }

    /// Ratio in `[0, 1]` of a grid coordinate along one side.
    pub fn ratio(&self, i: u32) -> f32 {
        if self.size_per_side < 2 {
            return 0.0;
        }
        i as f32 / (self.size_per_side - 1) as f32
    }

    /// World-space coordinate of a grid coordinate along one side.
    pub fn position(&self, i: u32) -> f32 {
        self.min_position + self.ratio(i) * self.position_range
    }
}

impl Default for ParametricLayout {
    fn default() -> Self {
        Self::new(
            Self::SIZE_PER_SIDE,
            Self::MIN_POSITION,
            Self::POSITION_RANGE,
        )
    }
}

impl fmt::Debug for ParametricLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricLayout")
            .field("size_per_side", &self.size_per_side)
            .field("min_position", &self.min_position)
            .field("position_range", &self.position_range)
            .finish_non_exhaustive()
    }
}

/// `(x² + z²) / 10`
pub fn paraboloid(x: f32, z: f32) -> f32 {
    (x * x + z * z) / 10.0
}
