//! Heightmap mesh synthesis.
//!
//! [`build_mesh`] is the single entry point: it samples a [`HeightMapSource`]
//! into a [`HeightGrid`], estimates a normal per vertex, packs the interleaved
//! vertex records and builds the strip indices. Generation either completes or
//! fails as a whole; no partial mesh is ever returned.

use image::{DynamicImage, ImageFormat};

use crate::{
    config::{ImageLayout, ParametricLayout},
    data_structures::{
        height_grid::{HeightGrid, check_sample_count},
        mesh::HeightMapMesh,
        vertex::TerrainVertex,
    },
    error::{HeightMapError, Result},
};

pub mod normals;
pub mod strip;

/// Where the heights come from.
#[derive(Debug)]
pub enum HeightMapSource<'a> {
    /// An encoded grayscale image. `format` skips format detection when known.
    Image {
        bytes: &'a [u8],
        format: Option<ImageFormat>,
        layout: ImageLayout,
    },
    /// An image the caller already decoded.
    Decoded {
        image: &'a DynamicImage,
        layout: ImageLayout,
    },
    /// An analytic height function over a square grid.
    Parametric(ParametricLayout),
}

impl<'a> HeightMapSource<'a> {
    /// Encoded image bytes with the default layout and format detection.
    pub fn image(bytes: &'a [u8]) -> Self {
        HeightMapSource::Image {
            bytes,
            format: None,
            layout: ImageLayout::default(),
        }
    }

    /// The default paraboloid.
    pub fn parametric() -> Self {
        HeightMapSource::Parametric(ParametricLayout::default())
    }

    /// Sample the source. Decoding failures surface as `ResourceLoad`.
    pub fn to_grid(&self) -> Result<HeightGrid> {
        match self {
            HeightMapSource::Image {
                bytes,
                format,
                layout,
            } => {
                let img = match format {
                    None => image::load_from_memory(bytes)?,
                    Some(fmt) => image::load_from_memory_with_format(bytes, *fmt)?,
                };
                HeightGrid::from_image(&img, layout)
            }
            HeightMapSource::Decoded { image, layout } => HeightGrid::from_image(image, layout),
            HeightMapSource::Parametric(layout) => HeightGrid::from_parametric(layout),
        }
    }
}

/// Build the terrain mesh for `source`.
pub fn build_mesh(source: &HeightMapSource) -> Result<HeightMapMesh> {
    let grid = source.to_grid()?;
    build_mesh_from_grid(&grid)
}

/// Build the terrain mesh for an already sampled grid.
pub fn build_mesh_from_grid(grid: &HeightGrid) -> Result<HeightMapMesh> {
    let normals = normals::estimate_normals(grid);
    let vertices = pack_vertices(grid, &normals)?;
    let indices = strip::build_strip_indices(grid.width(), grid.height())?;

    log::info!(
        "Built {}x{} heightmap mesh: {} vertices, {} indices",
        grid.width(),
        grid.height(),
        vertices.len(),
        indices.len()
    );
    Ok(HeightMapMesh::new(
        grid.width(),
        grid.height(),
        vertices,
        indices,
    ))
}

/// Interleave positions, normals and colors, row-major.
///
/// `normals` must hold one entry per grid sample.
pub fn pack_vertices(
    grid: &HeightGrid,
    normals: &[cgmath::Vector3<f32>],
) -> Result<Vec<TerrainVertex>> {
    check_sample_count("normals", grid.len(), normals.len())?;

    let mut vertices = Vec::new();
    vertices
        .try_reserve_exact(grid.len())
        .map_err(|_| HeightMapError::BufferAllocation {
            bytes: (grid.len() * std::mem::size_of::<TerrainVertex>()) as u64,
        })?;
    vertices.extend(
        grid.positions()
            .iter()
            .zip(normals)
            .zip(grid.colors())
            .map(|((position, normal), color)| TerrainVertex {
                position: (*position).into(),
                normal: (*normal).into(),
                color: *color,
            }),
    );
    Ok(vertices)
}
