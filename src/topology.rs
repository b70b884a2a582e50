//! Mesh topology: point layout and triangle/edge index generation.
//!
//! A cloth of grid size N is an (N+1)×(N+1) point grid stored row-major:
//! row i runs top to bottom (y from `max_coord` down), column j runs left
//! to right (x from `min_coord` up), so point (i, j) has flat index
//! `i * (N + 1) + j`. All points start on the z = 0 plane.

use crate::float::Float;
use alloc::vec::Vec as AllocVec;

/// Generate the initial point positions as a flat `[x, y, z, ...]` buffer.
///
/// Points are spaced by `(max_coord - min_coord) / size` and clamped to the
/// bounds so the outermost rows and columns land exactly on them.
///
/// Callers validate `size >= 1` up front (see [`ClothConfig::validate`]);
/// this function assumes it.
///
/// [`ClothConfig::validate`]: crate::ClothConfig::validate
pub fn grid_points<F: Float>(size: usize, min_coord: F, max_coord: F) -> AllocVec<F> {
    let side = size + 1;
    let shift = (max_coord - min_coord) / F::from_f32(size as f32);
    let mut points = AllocVec::with_capacity(side * side * 3);

    for i in 0..side {
        for j in 0..side {
            let x = (min_coord + F::from_f32(j as f32) * shift).clamp(min_coord, max_coord);
            let y = (max_coord - F::from_f32(i as f32) * shift).clamp(min_coord, max_coord);
            points.push(x);
            points.push(y);
            points.push(F::zero());
        }
    }

    points
}

/// Generate the triangle index list for shaded rendering.
///
/// Each grid cell emits two triangles: (a, b, c) and (b, d, c), where
/// a/b/c/d are the cell's top-left, top-right, bottom-left and bottom-right
/// corners.
pub fn triangle_indices(size: usize) -> AllocVec<u32> {
    let side = (size + 1) as u32;
    let mut indices = AllocVec::with_capacity(size * size * 6);

    for i in 0..size as u32 {
        for j in 0..size as u32 {
            let a = j + i * side;
            let b = a + 1;
            let c = j + (i + 1) * side;
            let d = c + 1;

            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[b, d, c]);
        }
    }

    indices
}

/// Generate the edge index list shared by the spring network and wireframe
/// rendering, as flat endpoint pairs.
///
/// Each cell emits its top edge (a, b), diagonal (b, c) and left edge
/// (c, a). The bottom edge (c, d) is emitted only in the last row and the
/// right edge (b, d) only in the last column, which closes the outer
/// boundary without duplicating edges between neighboring cells.
pub fn edge_indices(size: usize) -> AllocVec<u32> {
    let side = (size + 1) as u32;
    let last = (size - 1) as u32;
    let mut indices = AllocVec::new();

    for i in 0..size as u32 {
        for j in 0..size as u32 {
            let a = j + i * side;
            let b = a + 1;
            let c = j + (i + 1) * side;
            let d = c + 1;

            indices.extend_from_slice(&[a, b]);
            indices.extend_from_slice(&[b, c]);
            indices.extend_from_slice(&[c, a]);

            if i == last {
                indices.extend_from_slice(&[c, d]);
            }
            if j == last {
                indices.extend_from_slice(&[b, d]);
            }
        }
    }

    indices
}

/// Flat indices of the four grid corners, the permanently pinned set.
pub fn corner_indices(size: usize) -> [usize; 4] {
    let count = (size + 1) * (size + 1);
    [0, size, count - size - 1, count - 1]
}
