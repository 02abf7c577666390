//! # Rings
//!
//! A ring is a circle whose radius is pushed outward by noise as it sweeps
//! around its center.
//!
//! ## Formula
//!
//! ```text
//! samples   = floor(4 * radius + 10)
//! angle_i   = 2π * i / samples
//! d         = noise(cos(angle) * frequency, sin(angle) * frequency, ring_seed) + 1
//! r_i       = radius * (1 + magnitude * d)
//! vertex_i  = center + r_i * (cos(angle), sin(angle))
//! ```
//!
//! `d` lies in [0, 2], so deformation mostly enlarges the ring. The outline
//! closes seamlessly because cos/sin are periodic and the noise is continuous.

use std::f64::consts::TAU;

use super::params::Params;
use crate::render::surface::Surface;
use crate::shader::NoiseField;

/// Stroke width for ring outlines, in pixels.
pub const STROKE_WIDTH: f32 = 1.0;

/// One ring of the flower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Ring {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

/// Number of outline vertices for a radius. At least 10 for any radius >= 0.
pub fn sample_count(radius: f64) -> usize {
    (4.0 * radius + 10.0).floor().max(0.0) as usize
}

/// Deformed outline of `ring`, one vertex per sample, in sweep order.
pub fn outline(ring: &Ring, noise: &NoiseField, params: &Params, ring_seed: f64) -> Vec<(f64, f64)> {
    let samples = sample_count(ring.radius);
    (0..samples)
        .map(|i| {
            let angle = TAU * i as f64 / samples as f64;
            let (uy, ux) = angle.sin_cos();

            let deformation =
                noise.sample(ux * params.frequency, uy * params.frequency, ring_seed) + 1.0;
            let radius = ring.radius * (1.0 + params.magnitude * deformation);

            (ring.center_x + radius * ux, ring.center_y + radius * uy)
        })
        .collect()
}

/// Paint one ring: fill with the fill color, then stroke with the stroke color.
pub fn render_ring(
    surface: &mut Surface,
    ring: &Ring,
    noise: &NoiseField,
    params: &Params,
    ring_seed: f64,
) {
    let points = outline(ring, noise, params, ring_seed);
    surface.fill_polygon(&points, params.fill_color.rgb, params.fill_color.alpha);
    surface.stroke_polygon(&points, params.stroke_color, STROKE_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::shader::dist;

    fn params(magnitude: f64) -> Params {
        Params {
            frequency: 3.5,
            magnitude,
            independence: 0.5,
            spacing: 0.1,
            count: 5,
            stroke_color: Rgb::new(10, 10, 10),
            fill_color: Rgb::new(200, 100, 50).with_alpha(1.0),
        }
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0), 10);
        assert_eq!(sample_count(0.2), 10);
        assert_eq!(sample_count(10.0), 50);
        assert_eq!(sample_count(33.3), 143);
        assert_eq!(sample_count(-5.0), 0);
    }

    #[test]
    fn test_sample_count_monotonic() {
        let mut last = 0;
        for i in 0..1000 {
            let n = sample_count(i as f64 * 0.37);
            assert!(n >= last);
            last = n;
        }
    }

    #[test]
    fn test_outline_zero_magnitude_is_circle() {
        let ring = Ring::new(50.0, 50.0, 20.0);
        let noise = NoiseField::new(1);
        let points = outline(&ring, &noise, &params(0.0), 0.3);
        assert_eq!(points.len(), sample_count(20.0));
        for (x, y) in points {
            let r = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
            assert!((r - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outline_only_enlarges() {
        let ring = Ring::new(0.0, 0.0, 30.0);
        let noise = NoiseField::new(42);
        let p = params(0.8);
        for (x, y) in outline(&ring, &noise, &p, 0.77) {
            let r = (x * x + y * y).sqrt();
            assert!(r >= 30.0 - 1e-9, "radius shrank to {}", r);
            assert!(r <= 30.0 * (1.0 + 2.0 * p.magnitude) + 1e-9);
        }
    }

    #[test]
    fn test_outline_first_vertex_on_positive_x() {
        let ring = Ring::new(10.0, 10.0, 5.0);
        let noise = NoiseField::new(7);
        let points = outline(&ring, &noise, &params(0.5), 0.1);
        assert!((points[0].1 - 10.0).abs() < 1e-12);
        assert!(points[0].0 > 10.0);
    }

    #[test]
    fn test_zero_radius_does_not_panic() {
        let mut surface = Surface::new(20, 20);
        let ring = Ring::new(10.0, 10.0, 0.0);
        let noise = NoiseField::new(3);
        render_ring(&mut surface, &ring, &noise, &params(1.0), 0.5);
        assert!(surface.to_rgba8().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_render_paints_center_and_outline() {
        let mut surface = Surface::new(64, 64);
        let ring = Ring::new(32.0, 32.0, 12.0);
        let noise = NoiseField::new(9);
        let p = params(0.0);
        render_ring(&mut surface, &ring, &noise, &p, 0.5);

        // Interior carries the opaque fill
        let center = surface.pixel(32, 32).unwrap();
        assert_eq!(center[3], 1.0);
        assert!((center[0] - 200.0 / 255.0).abs() < 1e-6);

        // A pixel on the circle carries the dark stroke
        let edge = surface.pixel(44, 31).unwrap();
        assert!(dist(44.5, 31.5, 32.0, 32.0) - 12.0 < 1.0);
        assert!(edge[0] < 0.5);

        // Far corner untouched
        assert_eq!(surface.pixel(0, 0).unwrap()[3], 0.0);
    }
}
