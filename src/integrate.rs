//! Explicit Verlet position integration.

use crate::float::Float;
use crate::vec::Vec3;

/// Advance all free points by one Verlet step:
///
/// ```text
/// new_pos = pos + (1 - damping) * (pos - prev_pos) + force * dt²
/// ```
///
/// Velocity is implicit in the difference between current and previous
/// position. Every update reads the pre-step state: forces were accumulated
/// before this call and each point reads only its own positions, so the
/// step is one consistent transition. Afterward `prev` holds the pre-step
/// positions.
///
/// Pinned points are skipped entirely; their previous position equals their
/// current position at all times, so they carry zero implicit velocity.
///
/// This is explicit integration: stable only for small `dt` and bounded
/// stiffness. The caller picks `dt` (on the order of milliseconds for the
/// default stiffness) to keep the mesh from diverging.
pub fn advance_positions<F: Float>(
    points: &mut [F],
    prev: &mut [F],
    pinned: &[bool],
    forces: &[Vec3<F>],
    dt: F,
    damping: F,
) {
    debug_assert_eq!(points.len(), prev.len());
    debug_assert_eq!(pinned.len() * 3, points.len());

    let retain = F::one() - damping;
    let dt_sq = dt * dt;

    for (point, &force) in forces.iter().enumerate() {
        if pinned[point] {
            continue;
        }
        let offset = point * 3;
        let pos = Vec3::from_slice(points, offset);
        let old = Vec3::from_slice(prev, offset);

        let velocity = (pos - old).scale(retain);
        let new_pos = pos + velocity + force.scale(dt_sq);

        pos.write(prev, offset);
        new_pos.write(points, offset);
    }
}
