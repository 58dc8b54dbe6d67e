//! The `attractor_core` crate turns a strange attractor into a renderable tube.
//! It integrates the attractor with a fixed-step explicit Euler scheme, transports an
//! orthonormal frame along the resulting path, and sweeps a cross-section around it.
//!
//! Key components:
//! - **Traits**: `VectorField` (attractor right-hand side), `Steppable` (solvers).
//! - **Attractors**: the closed set of supported systems with their constants.
//! - **Path**: trajectory sampling and normal transport, resumable in batches.
//! - **Normalize**: recentering and rescaling into a canonical bounding volume.
//! - **Mesh**: tube extrusion with end caps into flat vertex/normal/index buffers.
//! - **Tube**: the validated end-to-end build pipeline.

pub mod attractors;
pub mod config;
pub mod error;
pub mod mesh;
pub mod normalize;
pub mod path;
pub mod shape;
pub mod solvers;
pub mod traits;
pub mod tube;

pub use attractors::Attractor;
pub use error::{Result, TubeError};
pub use tube::{build, build_with_progress, AttractorTube, Profile, TubeGeometry, TubeSettings};
