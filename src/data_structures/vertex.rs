//! Interleaved terrain vertex records.

use std::mem;

/// Layout description for vertex types stored in GPU memory.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

pub const POS_DATA_ELEMENTS_SIZE: usize = 3;
pub const NORMAL_DATA_ELEMENTS_SIZE: usize = 3;
pub const COLOR_DATA_ELEMENTS_SIZE: usize = 4;
/// Floats per interleaved vertex.
pub const FLOATS_PER_VERTEX: usize =
    POS_DATA_ELEMENTS_SIZE + NORMAL_DATA_ELEMENTS_SIZE + COLOR_DATA_ELEMENTS_SIZE;

/// One grid cell of the terrain: position, unit (or zero) normal and color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/**
 * Stride layout: position (location 0), normal (location 1) and color (location 2),
 * packed back to back with no padding.
 */
impl Vertex for TerrainVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TerrainVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; POS_DATA_ELEMENTS_SIZE]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; POS_DATA_ELEMENTS_SIZE + NORMAL_DATA_ELEMENTS_SIZE]>()
                        as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
