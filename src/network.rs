//! Spring network: per-edge rest lengths and point adjacency.
//!
//! Built once at construction and read-only afterward. Adjacency is stored
//! arena-style: one flat neighbor array plus per-point offsets, so looking
//! up a point's springs is a slice index rather than a map lookup.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// One incident spring as seen from a point: the far endpoint and the
/// spring's rest length.
#[derive(Copy, Clone, Debug)]
pub struct Neighbor<F: Float> {
    pub index: u32,
    pub rest_length: F,
}

/// The immutable spring network derived from the edge list.
#[derive(Debug)]
pub struct SpringNetwork<F: Float> {
    rest_lengths: AllocVec<F>,
    offsets: AllocVec<u32>,
    neighbors: AllocVec<Neighbor<F>>,
}

impl<F: Float> SpringNetwork<F> {
    /// Build the network from the edge list and initial point positions.
    ///
    /// Each edge's rest length is its measured length in the initial layout
    /// scaled by `length_coefficient`. Every edge is inserted into both
    /// endpoints' neighbor lists (springs are symmetric). The edge list must
    /// reference valid point indices.
    pub fn new(edges: &[u32], points: &[F], length_coefficient: F) -> Self {
        let point_count = points.len() / 3;
        let edge_count = edges.len() / 2;

        let mut rest_lengths = AllocVec::with_capacity(edge_count);
        for e in 0..edge_count {
            let p1 = edges[e * 2] as usize;
            let p2 = edges[e * 2 + 1] as usize;
            debug_assert!(p1 < point_count && p2 < point_count, "edge endpoint out of bounds");
            let a = Vec3::from_slice(points, p1 * 3);
            let b = Vec3::from_slice(points, p2 * 3);
            rest_lengths.push(a.distance(b) * length_coefficient);
        }

        // Degree count, prefix sum, then fill. Each edge lands in both
        // endpoints' slices.
        let mut degrees = vec![0u32; point_count];
        for e in 0..edge_count {
            degrees[edges[e * 2] as usize] += 1;
            degrees[edges[e * 2 + 1] as usize] += 1;
        }

        let mut offsets = AllocVec::with_capacity(point_count + 1);
        let mut total = 0u32;
        offsets.push(0);
        for &d in &degrees {
            total += d;
            offsets.push(total);
        }

        let mut cursors: AllocVec<u32> = offsets[..point_count].to_vec();
        let mut neighbors = vec![
            Neighbor { index: 0, rest_length: F::zero() };
            total as usize
        ];
        for e in 0..edge_count {
            let p1 = edges[e * 2] as usize;
            let p2 = edges[e * 2 + 1] as usize;
            let rest_length = rest_lengths[e];

            neighbors[cursors[p1] as usize] = Neighbor { index: p2 as u32, rest_length };
            cursors[p1] += 1;
            neighbors[cursors[p2] as usize] = Neighbor { index: p1 as u32, rest_length };
            cursors[p2] += 1;
        }

        SpringNetwork { rest_lengths, offsets, neighbors }
    }

    /// The springs incident to a point.
    pub fn neighbors_of(&self, point: usize) -> &[Neighbor<F>] {
        let start = self.offsets[point] as usize;
        let end = self.offsets[point + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Rest lengths indexed by edge, in edge-list order.
    pub fn rest_lengths(&self) -> &[F] {
        &self.rest_lengths
    }

    /// Number of springs.
    pub fn spring_count(&self) -> usize {
        self.rest_lengths.len()
    }

    /// Number of points the network spans.
    pub fn point_count(&self) -> usize {
        self.offsets.len() - 1
    }
}
