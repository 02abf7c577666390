//! # Flower Composition
//!
//! Layers shrinking, noise-deformed rings from the outside in.
//!
//! ```text
//! params  = Params::generate(seed)
//! radius  = (size / 3) / (magnitude + 1)
//! for i in 0..count:
//!     ring_seed = first draw of stream(seed + i * independence)
//!     render_ring(radius, ring_seed)
//!     radius *= 1 - spacing
//! ```
//!
//! Rings must be painted in order: each one is composited over the rings
//! before it, so the loop is strictly sequential. Separate flowers share no
//! state and can be generated on as many threads as you like.

pub mod params;
pub mod ring;

use tracing::debug;

use crate::error::BlossomError;
use crate::render::surface::Surface;
use crate::rng::ring_seed;
use crate::seed::Seed;
use crate::shader::NoiseField;

pub use params::{DRAW_ORDER, DrawStep, Params};
pub use ring::{Ring, render_ring, sample_count};

/// A finished flower: its parameters, the radius of every ring, and the raster.
#[derive(Debug, Clone)]
pub struct Flower {
    pub seed: Seed,
    pub size: usize,
    pub params: Params,
    /// Radius each ring was drawn at, outermost first.
    pub radii: Vec<f64>,
    surface: Surface,
}

impl Flower {
    /// Generate the flower for `seed` on a `size × size` surface.
    pub fn grow(size: i64, seed: Seed) -> Result<Self, BlossomError> {
        let side = validate_size(size)?;

        let params = Params::generate(seed);
        debug!(%seed, size = side, params = %params, "Generated flower params");

        let mut surface = Surface::new(side, side);
        let center = side as f64 / 2.0;
        let mut ring = Ring::new(center, center, side as f64 / 3.0 / (params.magnitude + 1.0));
        let noise = NoiseField::new(seed.0);

        let mut radii = Vec::with_capacity(params.count as usize);
        for i in 0..params.count as usize {
            let slice = ring_seed(seed.0, i, params.independence);
            render_ring(&mut surface, &ring, &noise, &params, slice);
            radii.push(ring.radius);
            ring.radius *= params.retention();
        }

        debug!(%seed, rings = radii.len(), "Rendered rings");

        Ok(Self {
            seed,
            size: side,
            params,
            radii,
            surface,
        })
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }
}

/// Render the flower for `seed` into a fresh `size × size` surface.
pub fn compose(size: i64, seed: Seed) -> Result<Surface, BlossomError> {
    Flower::grow(size, seed).map(Flower::into_surface)
}

/// Check a requested side length before anything is allocated.
///
/// The side must fit a PNG header (`u32`) and `side * side` float pixels must
/// stay within `isize::MAX` bytes.
fn validate_size(size: i64) -> Result<usize, BlossomError> {
    let invalid = || BlossomError::InvalidSize { size };
    if size <= 0 {
        return Err(invalid());
    }
    let side = u32::try_from(size).map_err(|_| invalid())?;
    let side = usize::try_from(side).map_err(|_| invalid())?;
    side
        .checked_mul(side)
        .and_then(|pixels| pixels.checked_mul(size_of::<[f32; 4]>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(invalid)?;
    Ok(side)
}
