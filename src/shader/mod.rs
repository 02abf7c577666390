//! # Shader Primitives
//!
//! Reusable building blocks for flower rendering.
//!
//! ## Categories
//!
//! - [`noise`]: Hash functions, 3D value noise, the seeded [`NoiseField`]
//! - [`distance`]: Euclidean and point-to-segment distance
//! - [`blend`]: Linear interpolation, smoothstep, source-over compositing

pub mod blend;
pub mod distance;
pub mod noise;

// Re-export all primitives at the top level for convenience
pub use blend::*;
pub use distance::*;
pub use noise::*;
