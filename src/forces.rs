//! Per-step force accumulation from springs and gravity.

use crate::float::Float;
use crate::network::SpringNetwork;
use crate::vec::Vec3;

/// Accumulate the net force on every point into `out`.
///
/// For each incident spring, the restoring force is
/// `(distance - rest_length) * stiffness` along the unit direction toward
/// the neighbor: it pulls when stretched and pushes when compressed. The
/// gravity contribution `gravity * point_mass` is added once per incident
/// spring, not once per point, so a point's total gravity scales with its
/// spring degree: interior points (degree 6 on this topology) fall faster
/// than boundary ones. Callers that want uniform gravity must normalize by
/// degree themselves.
///
/// Coincident endpoints have no defined direction; the spring term is
/// dropped for that pair (the gravity term still applies) instead of
/// propagating NaN.
pub fn accumulate<F: Float>(
    points: &[F],
    network: &SpringNetwork<F>,
    gravity: Vec3<F>,
    point_mass: F,
    stiffness: F,
    out: &mut [Vec3<F>],
) {
    debug_assert_eq!(out.len() * 3, points.len());

    let gravity_term = gravity.scale(point_mass);

    for (point, slot) in out.iter_mut().enumerate() {
        let pos = Vec3::from_slice(points, point * 3);
        let mut force = Vec3::zero();

        for neighbor in network.neighbors_of(point) {
            let other = Vec3::from_slice(points, neighbor.index as usize * 3);
            let delta = other - pos;
            let dist = delta.length();

            if !dist.is_near_zero(F::from_f32(1e-10)) {
                let direction = delta.scale(F::one() / dist);
                let magnitude = (dist - neighbor.rest_length) * stiffness;
                force = force + direction.scale(magnitude);
            }
            force = force + gravity_term;
        }

        *slot = force;
    }
}
