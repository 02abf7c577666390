//! # Flower Parameters
//!
//! One flower's geometry and color knobs, derived from its seed.
//!
//! All fields come from a single stream, so the draw order is part of the
//! reproducibility contract. [`DRAW_ORDER`] spells it out:
//!
//! ```text
//! frequency    = round2(r * 10)
//! magnitude    = round3(r)
//! independence = round3(r)
//! spacing      = round4(r * 0.5)
//! count        = floor(r * 200 + 1)
//! stroke       = color (3 draws)
//! fill alpha   = round2(r)
//! fill         = color (3 draws)
//! fill alpha   = r, only if the rounded alpha was 0
//! ```
//!
//! A fill alpha that rounds to zero is redrawn once, unrounded, after the fill
//! color. Every flower therefore has a visible fill.

use std::fmt;

use serde::Serialize;

use crate::color::{self, Rgb, Rgba};
use crate::rng::SeededRng;
use crate::seed::Seed;

/// Upper bound for the noise frequency.
pub const MAX_FREQUENCY: f64 = 10.0;
/// Upper bound for the per-ring shrink fraction.
pub const MAX_SPACING: f64 = 0.5;
/// Upper bound for the number of rings.
pub const MAX_COUNT: u32 = 200;

/// One step of parameter generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStep {
    Frequency,
    Magnitude,
    Independence,
    Spacing,
    Count,
    StrokeColor,
    FillAlpha,
    FillColor,
}

/// The order in which parameter fields consume the stream.
pub const DRAW_ORDER: [DrawStep; 8] = [
    DrawStep::Frequency,
    DrawStep::Magnitude,
    DrawStep::Independence,
    DrawStep::Spacing,
    DrawStep::Count,
    DrawStep::StrokeColor,
    DrawStep::FillAlpha,
    DrawStep::FillColor,
];

/// Parameters for one flower. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Params {
    /// Noise sampling frequency around the ring, [0, 10], 2 decimals.
    pub frequency: f64,
    /// Deformation strength, [0, 1], 3 decimals.
    pub magnitude: f64,
    /// How far apart neighboring rings' noise slices are, [0, 1], 3 decimals.
    pub independence: f64,
    /// Fractional radius shrink per ring, [0, 0.5], 4 decimals.
    pub spacing: f64,
    /// Number of rings, [1, 200].
    pub count: u32,
    pub stroke_color: Rgb,
    pub fill_color: Rgba,
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl Params {
    /// Generate the parameters for `seed`.
    pub fn generate(seed: Seed) -> Self {
        let mut rng = SeededRng::from_seed(seed.0);
        Self::from_rng(&mut rng)
    }

    /// Generate parameters by walking [`DRAW_ORDER`] over `rng`.
    pub fn from_rng(rng: &mut SeededRng) -> Self {
        let mut builder = Builder::default();
        for step in DRAW_ORDER {
            builder.apply(step, rng);
        }
        builder.finish()
    }

    /// Per-ring radius retention factor, in [0.5, 1].
    pub fn retention(&self) -> f64 {
        1.0 - self.spacing
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "freq={:.2} mag={:.3} indep={:.3} spacing={:.4} count={} stroke={} fill={}",
            self.frequency,
            self.magnitude,
            self.independence,
            self.spacing,
            self.count,
            self.stroke_color,
            self.fill_color
        )
    }
}

/// Accumulates fields as the draw steps run.
#[derive(Debug, Default)]
struct Builder {
    frequency: f64,
    magnitude: f64,
    independence: f64,
    spacing: f64,
    count: u32,
    stroke: Option<Rgb>,
    fill_alpha: f64,
    fill: Option<Rgb>,
}

impl Builder {
    fn apply(&mut self, step: DrawStep, rng: &mut SeededRng) {
        match step {
            DrawStep::Frequency => self.frequency = round_to(rng.draw() * MAX_FREQUENCY, 2),
            DrawStep::Magnitude => self.magnitude = round_to(rng.draw(), 3),
            DrawStep::Independence => self.independence = round_to(rng.draw(), 3),
            DrawStep::Spacing => self.spacing = round_to(rng.draw() * MAX_SPACING, 4),
            DrawStep::Count => {
                let raw = (rng.draw() * f64::from(MAX_COUNT) + 1.0).floor();
                self.count = raw.clamp(1.0, f64::from(MAX_COUNT)) as u32;
            }
            DrawStep::StrokeColor => self.stroke = Some(color::random_color(rng)),
            DrawStep::FillAlpha => self.fill_alpha = round_to(rng.draw(), 2),
            DrawStep::FillColor => {
                self.fill = Some(color::random_color(rng));
                if self.fill_alpha == 0.0 {
                    self.fill_alpha = rng.draw();
                }
            }
        }
    }

    fn finish(self) -> Params {
        let black = Rgb::new(0, 0, 0);
        Params {
            frequency: self.frequency,
            magnitude: self.magnitude,
            independence: self.independence,
            spacing: self.spacing,
            count: self.count.max(1),
            stroke_color: self.stroke.unwrap_or(black),
            fill_color: self.fill.unwrap_or(black).with_alpha(self.fill_alpha),
        }
    }
}
