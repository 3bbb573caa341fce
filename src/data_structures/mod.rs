//! Terrain data structures: the sampled grid, vertex records and the built mesh.
//!
//! - `height_grid` holds the immutable lattice of world-space samples
//! - `vertex` is the interleaved position/normal/color record and its GPU layout
//! - `mesh` owns the vertex and index buffers of a built heightmap

pub mod height_grid;
pub mod mesh;
pub mod vertex;
