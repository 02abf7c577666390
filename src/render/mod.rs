//! # Rendering Module
//!
//! Raster output for flowers.
//!
//! ## Modules
//!
//! - [`surface`]: RGBA pixel buffer with polygon fill and stroke
//! - [`encode`]: PNG encoding and base64 data URLs
//!
//! ## Usage Example
//!
//! ```
//! use blossom::color::Rgb;
//! use blossom::render::{encode, surface::Surface};
//!
//! let mut surface = Surface::new(16, 16);
//! let triangle = [(2.0, 2.0), (14.0, 4.0), (8.0, 14.0)];
//! surface.fill_polygon(&triangle, Rgb::new(200, 40, 90), 0.5);
//! surface.stroke_polygon(&triangle, Rgb::new(20, 20, 20), 1.0);
//!
//! let png = encode::encode_png(&surface)?;
//! assert!(encode::to_data_url(&png).starts_with("data:image/png;base64,"));
//! # Ok::<(), blossom::BlossomError>(())
//! ```

pub mod encode;
pub mod surface;
