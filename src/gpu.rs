//! GPU residency of a built heightmap mesh.
//!
//! [`GpuMesh`] uploads the interleaved vertex buffer and the `u16` strip
//! indices once, draws them with a single indexed call and releases them
//! explicitly when the terrain is torn down.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{mesh::HeightMapMesh, vertex::{TerrainVertex, Vertex}},
    error::{HeightMapError, Result},
};

/// Index format of every terrain index buffer.
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

/// Primitive state a terrain pipeline has to use for the strip to come out right.
pub const TERRAIN_PRIMITIVE: wgpu::PrimitiveState = wgpu::PrimitiveState {
    topology: wgpu::PrimitiveTopology::TriangleStrip,
    strip_index_format: Some(INDEX_FORMAT),
    front_face: wgpu::FrontFace::Ccw,
    // degenerate joins flip the winding of every other strip
    cull_mode: None,
    polygon_mode: wgpu::PolygonMode::Fill,
    unclipped_depth: false,
    conservative: false,
};

/// Vertex layout of the terrain vertex buffer.
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    TerrainVertex::desc()
}

/// A heightmap mesh resident on the GPU.
///
/// The buffers are `None` once released.
#[derive(Debug)]
pub struct GpuMesh {
    pub name: String,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl GpuMesh {
    /// Create the vertex and index buffers for `mesh`.
    ///
    /// Buffers larger than the device allows fail with `BufferAllocation`
    /// before anything is created.
    pub fn upload(device: &wgpu::Device, mesh: &HeightMapMesh, name: &str) -> Result<Self> {
        let max_buffer_size = device.limits().max_buffer_size;
        for bytes in [mesh.vertex_bytes().len(), mesh.index_bytes().len()] {
            let bytes = bytes as u64;
            if bytes > max_buffer_size {
                log::error!(
                    "{} needs a {} byte buffer but the device allows {}",
                    name,
                    bytes,
                    max_buffer_size
                );
                return Err(HeightMapError::BufferAllocation { bytes });
            }
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "Uploaded {}: {} vertex bytes, {} indices",
            name,
            mesh.vertex_bytes().len(),
            mesh.index_count()
        );
        Ok(Self {
            name: name.to_string(),
            vertex_buffer: Some(vertex_buffer),
            index_buffer: Some(index_buffer),
            index_count: mesh.index_count(),
        })
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_buffer(&self) -> Option<&wgpu::Buffer> {
        self.vertex_buffer.as_ref()
    }

    pub fn index_buffer(&self) -> Option<&wgpu::Buffer> {
        self.index_buffer.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.vertex_buffer.is_none() && self.index_buffer.is_none()
    }

    /// Bind both buffers and issue one indexed draw over the whole strip.
    ///
    /// Draws nothing once released. The pipeline bound on `render_pass` must use
    /// [`TERRAIN_PRIMITIVE`] and [`vertex_layout`].
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };
        if self.index_count == 0 {
            return;
        }
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), INDEX_FORMAT);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    /// Destroy the GPU buffers. Safe to call again, later calls do nothing.
    pub fn release(&mut self) {
        if self.is_released() {
            log::warn!("{} was already released", self.name);
            return;
        }
        if let Some(buffer) = self.vertex_buffer.take() {
            buffer.destroy();
        }
        if let Some(buffer) = self.index_buffer.take() {
            buffer.destroy();
        }
        self.index_count = 0;
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        if !self.is_released() {
            self.release();
        }
    }
}
