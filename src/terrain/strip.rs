//! Triangle-strip indices covering the whole grid in one draw call.
//!
//! Each pair of rows forms one strip that zig-zags between the current and the
//! next row. Strips are chained with two repeated indices: the last vertex of
//! the finished strip and the first vertex of the next one. The resulting
//! zero-area triangles are never rasterized.

use crate::{
    data_structures::height_grid::check_dimensions,
    error::{HeightMapError, Result},
};

/// Number of indices [`build_strip_indices`] produces:
/// `2 * width * (height - 1) + 2 * (height - 2)`, or zero without a second row.
pub fn strip_index_count(width: u32, height: u32) -> usize {
    if height < 2 {
        return 0;
    }
    let num_strips = (height - 1) as usize;
    let vertices_per_strip = 2 * width as usize;
    let num_degenerate = 2 * (num_strips - 1);
    vertices_per_strip * num_strips + num_degenerate
}

/// Build the degenerate-joined strip for a `width x height` row-major grid.
///
/// Fails instead of wrapping when the grid has more vertices than `u16` can address.
pub fn build_strip_indices(width: u32, height: u32) -> Result<Vec<u16>> {
    check_dimensions(width, height)?;

    let count = strip_index_count(width, height);
    let mut indices = Vec::new();
    indices
        .try_reserve_exact(count)
        .map_err(|_| HeightMapError::BufferAllocation {
            bytes: (count * std::mem::size_of::<u16>()) as u64,
        })?;
    if height < 2 {
        log::warn!("A {}x{} grid has no second row, the strip is empty", width, height);
        return Ok(indices);
    }

    // check_dimensions guarantees every index fits into u16
    let index = |col: u32, row: u32| (row * width + col) as u16;
    let num_strips = height - 1;
    for row in 0..num_strips {
        if row > 0 {
            // repeat the first vertex of the new strip
            indices.push(index(0, row));
        }
        for col in 0..width {
            indices.push(index(col, row));
            indices.push(index(col, row + 1));
        }
        if row + 1 < num_strips {
            // repeat the last vertex of the finished strip
            indices.push(index(width - 1, row + 1));
        }
    }

    debug_assert_eq!(indices.len(), count);
    Ok(indices)
}
