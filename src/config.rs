//! Configuration for a cloth simulation instance.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;

/// Configuration for a cloth mesh.
///
/// Immutable for the lifetime of one simulation instance: changing a
/// parameter means constructing a new [`ClothMesh`](crate::ClothMesh).
/// The one exception is the gravity vector, which the mesh exposes a
/// setter for (a zero vector disables gravity).
///
/// # Builder Pattern
/// ```
/// use drapery::{ClothConfig, Vec3};
///
/// let config: ClothConfig<f32> = ClothConfig::new(16)
///     .with_bounds(-1.0, 1.0)
///     .with_gravity(Vec3::new(0.0, 0.0, -9.8))
///     .with_stiffness(50.0)
///     .with_damping(0.001);
/// ```
pub struct ClothConfig<F: Float> {
    /// Number of grid cells per side. The mesh has (grid_size + 1)² points.
    pub grid_size: usize,
    /// Lower coordinate bound of the initial planar layout.
    pub min_coord: F,
    /// Upper coordinate bound of the initial planar layout.
    pub max_coord: F,
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: Vec3<F>,
    /// Scale applied to measured rest lengths at construction. Default: 1.
    pub length_coefficient: F,
    /// Mass of each point. Default: 5e-5.
    pub point_mass: F,
    /// Spring stiffness coefficient. Default: 50.
    pub stiffness: F,
    /// Velocity damping factor in [0, 1). 0 = no damping. Default: 0.001.
    pub damping: F,
}

impl<F: Float> ClothConfig<F> {
    /// Create a config for a grid of the given size with default parameters.
    pub fn new(grid_size: usize) -> Self {
        ClothConfig {
            grid_size,
            min_coord: F::from_f32(-1.0),
            max_coord: F::from_f32(1.0),
            gravity: Vec3::zero(),
            length_coefficient: F::one(),
            point_mass: F::from_f32(5e-5),
            stiffness: F::from_f32(50.0),
            damping: F::from_f32(1e-3),
        }
    }

    /// Set the coordinate bounds of the initial layout.
    pub fn with_bounds(mut self, min_coord: F, max_coord: F) -> Self {
        self.min_coord = min_coord;
        self.max_coord = max_coord;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the rest-length coefficient.
    pub fn with_length_coefficient(mut self, length_coefficient: F) -> Self {
        self.length_coefficient = length_coefficient;
        self
    }

    /// Set the per-point mass.
    pub fn with_point_mass(mut self, point_mass: F) -> Self {
        self.point_mass = point_mass;
        self
    }

    /// Set the spring stiffness coefficient.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Validate the configuration.
    ///
    /// Fails if the grid size is zero, any coefficient is NaN or infinite,
    /// or damping lies outside [0, 1). Construction calls this before
    /// allocating anything, so a failed config never yields a partial mesh.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.grid_size < 1 {
            return Err(ClothError::InvalidGridSize { size: self.grid_size });
        }
        if !self.min_coord.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "min_coord" });
        }
        if !self.max_coord.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "max_coord" });
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "gravity" });
        }
        if !self.length_coefficient.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "length_coefficient" });
        }
        if !self.point_mass.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "point_mass" });
        }
        if !self.stiffness.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "stiffness" });
        }
        if !self.damping.is_finite() {
            return Err(ClothError::NonFiniteParameter { name: "damping" });
        }
        if self.damping < F::zero() || self.damping >= F::one() {
            return Err(ClothError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new(16)
    }
}
