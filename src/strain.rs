//! Strain visualization colors, derived from spring stretch.

use crate::float::Float;
use crate::vec::Vec3;

/// Recompute the per-edge RGBA color buffer from current spring strain.
///
/// For each edge, the strain ratio is current length / rest length. The red
/// channel is `clamp((ratio - 1) * 10, 0, 1)`, saturating at 10% stretch;
/// green and blue are 0 and alpha is 1. Purely a projection of mesh state
/// for rendering; physics never reads it back.
///
/// `colors` holds 4 values per edge, `edges` holds 2 endpoint indices per
/// edge, `rest_lengths` one length per edge.
pub fn update_colors<F: Float>(
    colors: &mut [F],
    edges: &[u32],
    rest_lengths: &[F],
    points: &[F],
) {
    debug_assert_eq!(colors.len() / 4, edges.len() / 2);
    debug_assert_eq!(rest_lengths.len(), edges.len() / 2);

    let ten = F::from_f32(10.0);

    for (edge, &rest_length) in rest_lengths.iter().enumerate() {
        let p1 = edges[edge * 2] as usize;
        let p2 = edges[edge * 2 + 1] as usize;
        let a = Vec3::from_slice(points, p1 * 3);
        let b = Vec3::from_slice(points, p2 * 3);
        let length = a.distance(b);

        let red = ((length / rest_length - F::one()) * ten).clamp(F::zero(), F::one());

        colors[edge * 4] = red;
        colors[edge * 4 + 1] = F::zero();
        colors[edge * 4 + 2] = F::zero();
        colors[edge * 4 + 3] = F::one();
    }
}
