//! Cloth mesh simulation via spring networks and Verlet integration.
//!
//! `drapery` simulates a rectangular grid of point masses joined by
//! structural springs, advanced by explicit Verlet integration under
//! gravity, with the four grid corners pinned in place. It produces flat
//! position/index/color buffers ready for a renderer and consumes only a
//! small configuration record, so rendering, input and scheduling stay in
//! the host application.
//!
//! # Features
//!
//! - **Grid topology**: triangle and edge index lists built per cell, with
//!   boundary-closing edges and no duplicates
//! - **Spring network**: rest lengths from the initial layout, adjacency as
//!   flat per-point slices (no map lookups during simulation)
//! - **Verlet integration**: position-based dynamics with implicit
//!   velocity, damping, and permanently pinned corners
//! - **Strain colors**: per-edge RGBA derived from spring stretch, for
//!   wireframe visualization
//! - **Observable**: monitor step phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use drapery::{ClothConfig, ClothMesh, Vec3};
//!
//! let config: ClothConfig<f32> = ClothConfig::new(16)
//!     .with_gravity(Vec3::new(0.0, 0.0, -9.8));
//! let mut cloth = ClothMesh::new(&config).unwrap();
//!
//! for _ in 0..100 {
//!     cloth.advance(0.001).unwrap();
//! }
//!
//! let positions = cloth.positions(); // flat [x, y, z, ...]
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod config;
pub mod topology;
pub mod network;
pub mod forces;
pub mod integrate;
pub mod strain;
pub mod cloth;
pub mod observer;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use error::ClothError;
pub use config::ClothConfig;
pub use network::{Neighbor, SpringNetwork};
pub use cloth::ClothMesh;
pub use observer::{StepObserver, NoOpStepObserver};
