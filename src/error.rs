//! Error types for cloth construction and stepping.

use core::fmt;

/// Errors that can occur when building or advancing a cloth mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid size must be at least 1.
    InvalidGridSize { size: usize },
    /// A configuration coefficient is NaN or infinite.
    NonFiniteParameter { name: &'static str },
    /// Damping must be in [0, 1).
    InvalidDamping,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridSize { size } => {
                write!(f, "grid size must be at least 1, got {}", size)
            }
            ClothError::NonFiniteParameter { name } => {
                write!(f, "parameter `{}` must be finite", name)
            }
            ClothError::InvalidDamping => write!(f, "damping must be in [0, 1)"),
            ClothError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            ClothError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
