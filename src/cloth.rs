//! The cloth mesh: simulation state, stepping, and render-facing buffers.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::forces;
use crate::integrate;
use crate::network::SpringNetwork;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::strain;
use crate::topology;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// A cloth mesh: an (N+1)×(N+1) grid of point masses joined by springs,
/// with the four corners pinned in place.
///
/// The mesh owns all simulation state. Topology, springs, adjacency and the
/// pinned set are fixed at construction; only point positions and edge
/// colors change, and only inside [`advance`](ClothMesh::advance). A
/// parameter change means building a new mesh.
///
/// `advance(dt)` is a complete, atomic state transition from the caller's
/// point of view: positions must not be read mid-step. The mesh itself is
/// single-threaded and does no locking; hosts that simulate and render on
/// different threads wrap it in their own synchronization.
#[derive(Debug)]
pub struct ClothMesh<F: Float> {
    size: usize,
    gravity: Vec3<F>,
    point_mass: F,
    stiffness: F,
    damping: F,
    points: AllocVec<F>,
    prev_points: AllocVec<F>,
    triangles: AllocVec<u32>,
    edges: AllocVec<u32>,
    network: SpringNetwork<F>,
    pinned: AllocVec<bool>,
    colors: AllocVec<F>,
    forces: AllocVec<Vec3<F>>,
}

impl<F: Float> ClothMesh<F> {
    /// Build a mesh from a configuration.
    ///
    /// Validates the configuration first and fails without allocating
    /// anything if it is rejected, so an `Err` never leaves a partial mesh
    /// behind. Springs take their rest lengths from the initial layout, so
    /// a freshly built mesh with a length coefficient of 1 is in
    /// equilibrium (every spring at rest, all strain colors at zero red).
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;

        let size = config.grid_size;
        let points = topology::grid_points(size, config.min_coord, config.max_coord);
        let prev_points = points.clone();
        let triangles = topology::triangle_indices(size);
        let edges = topology::edge_indices(size);
        let network = SpringNetwork::new(&edges, &points, config.length_coefficient);

        let point_count = points.len() / 3;
        let mut pinned = vec![false; point_count];
        for corner in topology::corner_indices(size) {
            pinned[corner] = true;
        }

        let mut colors = vec![F::zero(); network.spring_count() * 4];
        strain::update_colors(&mut colors, &edges, network.rest_lengths(), &points);

        Ok(ClothMesh {
            size,
            gravity: config.gravity,
            point_mass: config.point_mass,
            stiffness: config.stiffness,
            damping: config.damping,
            points,
            prev_points,
            triangles,
            edges,
            network,
            pinned,
            colors,
            forces: vec![Vec3::zero(); point_count],
        })
    }

    /// Advance the simulation by one timestep.
    ///
    /// Rejects `dt <= 0` (and non-finite `dt`) before touching any state.
    pub fn advance(&mut self, dt: F) -> Result<(), ClothError> {
        self.advance_observed(dt, &mut NoOpStepObserver)
    }

    /// Advance the simulation, reporting each phase to an observer.
    pub fn advance_observed<O: StepObserver>(
        &mut self,
        dt: F,
        observer: &mut O,
    ) -> Result<(), ClothError> {
        if !dt.is_finite() || dt <= F::zero() {
            return Err(ClothError::InvalidTimestep);
        }

        forces::accumulate(
            &self.points,
            &self.network,
            self.gravity,
            self.point_mass,
            self.stiffness,
            &mut self.forces,
        );
        observer.on_forces_accumulated();

        integrate::advance_positions(
            &mut self.points,
            &mut self.prev_points,
            &self.pinned,
            &self.forces,
            dt,
            self.damping,
        );
        observer.on_integrate();

        strain::update_colors(
            &mut self.colors,
            &self.edges,
            self.network.rest_lengths(),
            &self.points,
        );
        observer.on_colors_updated();

        observer.on_step_complete();
        Ok(())
    }

    /// Replace the gravity vector. A zero vector disables gravity.
    pub fn set_gravity(&mut self, gravity: Vec3<F>) {
        self.gravity = gravity;
    }

    /// The current gravity vector.
    pub fn gravity(&self) -> Vec3<F> {
        self.gravity
    }

    /// Overwrite one point's current z-coordinate, for external drivers
    /// that wiggle the mesh between steps.
    ///
    /// Only the current position changes; the previous position keeps its
    /// value, so the write shows up as implicit velocity on the next step.
    /// Pinned points are left untouched (their previous and current
    /// positions stay equal forever).
    pub fn set_point_z(&mut self, index: usize, z: F) -> Result<(), ClothError> {
        let count = self.point_count();
        if index >= count {
            return Err(ClothError::PointOutOfBounds { index, count });
        }
        if !self.pinned[index] {
            self.points[index * 3 + 2] = z;
        }
        Ok(())
    }

    /// Position of one point.
    pub fn point(&self, index: usize) -> Vec3<F> {
        Vec3::from_slice(&self.points, index * 3)
    }

    /// Flat `[x, y, z, ...]` positions, row-major. Valid until the next
    /// `advance` call.
    pub fn positions(&self) -> &[F] {
        &self.points
    }

    /// Triangle index buffer for shaded rendering.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Edge index buffer for wireframe rendering, as flat endpoint pairs.
    pub fn edge_indices(&self) -> &[u32] {
        &self.edges
    }

    /// Flat RGBA strain colors, one per edge. Valid until the next
    /// `advance` call.
    pub fn edge_colors(&self) -> &[F] {
        &self.colors
    }

    /// Spring rest lengths, in edge order.
    pub fn rest_lengths(&self) -> &[F] {
        self.network.rest_lengths()
    }

    /// Whether the point at `index` is pinned.
    pub fn is_pinned(&self, index: usize) -> bool {
        self.pinned[index]
    }

    /// Grid size N (the mesh has (N+1)² points).
    pub fn grid_size(&self) -> usize {
        self.size
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Number of springs.
    pub fn spring_count(&self) -> usize {
        self.network.spring_count()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Index of the mesh's center point, the usual perturbation target for
    /// external movement drivers.
    pub fn center_index(&self) -> usize {
        self.point_count() / 2
    }
}
