//! Host-side terrain mesh: the interleaved vertex buffer and the strip indices.

use crate::data_structures::vertex::{FLOATS_PER_VERTEX, TerrainVertex};

/// A built heightmap mesh.
///
/// Owns both buffers exclusively. Vertices are row-major, matching the order
/// the strip indices assume, and are never mutated after the build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeightMapMesh {
    width: u32,
    height: u32,
    vertices: Vec<TerrainVertex>,
    indices: Vec<u16>,
}

impl HeightMapMesh {
    pub(crate) fn new(width: u32, height: u32, vertices: Vec<TerrainVertex>, indices: Vec<u16>) -> Self {
        debug_assert_eq!(vertices.len(), width as usize * height as usize);
        Self {
            width,
            height,
            vertices,
            indices,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of indices the renderer passes to its indexed draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// The interleaved buffer as flat floats, `FLOATS_PER_VERTEX` per vertex.
    pub fn vertex_data(&self) -> &[f32] {
        let data: &[f32] = bytemuck::cast_slice(&self.vertices);
        debug_assert_eq!(data.len(), self.vertices.len() * FLOATS_PER_VERTEX);
        data
    }

    /// Raw bytes of the vertex buffer, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn is_released(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Free both buffers. Calling it on a released mesh does nothing.
    pub fn release(&mut self) {
        if self.is_released() {
            log::debug!("Heightmap mesh already released");
            return;
        }
        self.vertices = Vec::new();
        self.indices = Vec::new();
        self.width = 0;
        self.height = 0;
    }
}
