//! # Blossom - Procedural Flower Images
//!
//! Blossom turns an integer seed into an abstract "flower": concentric,
//! noise-deformed rings painted from the outside in. The seed fixes every
//! shape and color knob, so the same seed and size always produce the same
//! pixels.
//!
//! - **Parameters**: frequency, magnitude, spacing, ring count, and colors drawn from a seeded stream
//! - **Noise**: seeded 3D value noise deforms each ring
//! - **Raster**: anti-aliased fill and stroke onto an RGBA surface
//! - **Encoding**: PNG bytes or a base64 data URL
//!
//! ## Quick Start
//!
//! ```
//! use blossom::{Seed, generate_flower_image, render::encode};
//!
//! let png = generate_flower_image(64, Seed(42))?;
//! let image = encode::decode_png(&png)?;
//! assert_eq!(image.dimensions(), (64, 64));
//!
//! // Same seed, same bytes
//! assert_eq!(png, generate_flower_image(64, Seed(42))?);
//! # Ok::<(), blossom::BlossomError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`flower`] | Parameter generation, rings, composition |
//! | [`rng`] | Seeded random streams |
//! | [`shader`] | Noise, distance, and blending primitives |
//! | [`color`] | RGB types and the random color picker |
//! | [`render`] | Raster surface and PNG encoding |
//! | [`config`] | Persisted generation settings |
//! | [`error`] | Error types |

pub mod color;
pub mod config;
pub mod error;
pub mod flower;
pub mod render;
pub mod rng;
pub mod seed;
pub mod shader;

// Re-exports for convenience
pub use error::BlossomError;
pub use flower::{Flower, Params};
pub use seed::Seed;

use tracing::info;

/// Generate the flower for `seed` as PNG bytes, `size × size` pixels.
///
/// Fails with [`BlossomError::InvalidSize`] when `size <= 0` or the surface
/// for `size` could not be addressed, and with
/// [`BlossomError::Encoding`] if the PNG encoder fails.
pub fn generate_flower_image(size: i64, seed: Seed) -> Result<Vec<u8>, BlossomError> {
    let surface = flower::compose(size, seed)?;
    let png = render::encode::encode_png(&surface)?;
    info!(%seed, size, bytes = png.len(), "New flower was created");
    Ok(png)
}

/// Generate the flower for `seed` as a `data:image/png;base64,` URL.
pub fn generate_flower_data_url(size: i64, seed: Seed) -> Result<String, BlossomError> {
    generate_flower_image(size, seed).map(|png| render::encode::to_data_url(&png))
}
