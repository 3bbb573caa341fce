//! Error taxonomy for terrain generation.
//!
//! Every failure is surfaced to the caller; there is no recover-and-continue
//! path. Generation is deterministic, so a caller may simply retry.

/// Errors produced while sourcing, building or uploading a heightmap mesh.
#[derive(thiserror::Error, Debug)]
pub enum HeightMapError {
    /// The height source could not be decoded.
    #[error("failed to load heightmap resource: {0}")]
    ResourceLoad(#[from] image::ImageError),

    /// The asset backing the height source could not be read.
    #[error("failed to read heightmap asset '{name}': {source}")]
    AssetRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Host or GPU storage for a buffer could not be allocated.
    #[error("could not allocate {bytes} bytes of buffer storage")]
    BufferAllocation { bytes: u64 },

    /// The grid has more vertices than a 16-bit index can address.
    #[error("a {width}x{height} grid exceeds the 65536 vertices addressable by u16 indices")]
    TooManyVertices { width: u32, height: u32 },

    /// A per-sample buffer does not hold one entry per grid cell.
    #[error("expected {expected} {what} for the grid, got {actual}")]
    SampleCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The grid has no columns or no rows.
    #[error("heightmap grid must have at least one row and one column, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
}

impl HeightMapError {
    /// Whether this error came from loading the source rather than building or uploading.
    pub fn is_resource_load(&self) -> bool {
        matches!(
            self,
            HeightMapError::ResourceLoad(_) | HeightMapError::AssetRead { .. }
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HeightMapError>;
