//! treasure-terrain
//!
//! Procedural terrain for a stereo VR treasure-hunt scene. The crate turns a
//! grayscale heightmap image or an analytic height function into a mesh that a
//! renderer draws with a single indexed call: an interleaved
//! position/normal/color vertex buffer and a triangle strip whose rows are
//! chained with degenerate triangles.
//!
//! High-level modules
//! - `config`: layout parameters for image and parametric sources
//! - `data_structures`: the sampled grid, vertex records and the built mesh
//! - `terrain`: mesh synthesis, normal estimation and strip construction
//! - `resources`: helpers to load heightmap assets
//! - `gpu`: uploading, drawing and releasing a mesh with wgpu
//! - `camera`: per-eye uniforms from head and eye transforms
//! - `error`: the error taxonomy shared by all of the above
//!

pub mod camera;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod gpu;
pub mod resources;
pub mod terrain;

// Re-exports commonly used types for convenience in downstream code.
pub use config::{ImageLayout, ParametricLayout};
pub use data_structures::{height_grid::HeightGrid, mesh::HeightMapMesh, vertex::TerrainVertex};
pub use error::{HeightMapError, Result};
pub use terrain::{HeightMapSource, build_mesh};

/// Route `log` output to stderr natively or to the browser console on the web.
///
/// Initializing twice is reported and otherwise ignored.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            log::warn!("Could not initialize logger: {}", e);
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {}", e);
        }
    }
}
