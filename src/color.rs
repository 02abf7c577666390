//! # Colors
//!
//! RGB color types and the seeded random color picker used for ring stroke
//! and fill colors.
//!
//! ## Picking a color
//!
//! ```text
//! hue        = int in [0, 360]
//! saturation = int in the hue's saturation range
//! brightness = int in [min_brightness(hue, saturation), 100]
//! rgb        = hsv_to_rgb(hue, saturation, brightness)
//! ```
//!
//! Each pick consumes exactly three draws, in that order. The hue dictionary
//! keeps colors visually distinct: washed-out yellows need more brightness
//! than deep blues before they read as a color.

use std::fmt;

use serde::Serialize;

use crate::rng::SeededRng;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// CSS `rgb(r, g, b)` notation.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// RGB color with a straight alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    #[serde(flatten)]
    pub rgb: Rgb,
    pub alpha: f64,
}

/// CSS `rgba(r, g, b, a)` notation.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// A named hue family with its (saturation, minimum brightness) lower bounds.
#[derive(Debug)]
struct HueFamily {
    name: &'static str,
    hue_range: (i32, i32),
    lower_bounds: &'static [(f64, f64)],
}

impl HueFamily {
    fn saturation_range(&self) -> (f64, f64) {
        let first = self.lower_bounds[0];
        let last = self.lower_bounds[self.lower_bounds.len() - 1];
        (first.0, last.0)
    }

    /// Minimum brightness for a saturation, interpolated between bounds.
    fn min_brightness(&self, saturation: f64) -> f64 {
        for pair in self.lower_bounds.windows(2) {
            let (s1, v1) = pair[0];
            let (s2, v2) = pair[1];
            if saturation >= s1 && saturation <= s2 {
                let m = (v2 - v1) / (s2 - s1);
                let b = v1 - m * s1;
                return m * saturation + b;
            }
        }
        0.0
    }
}

/// Hue dictionary. Ranges are inclusive and may start below zero (red wraps).
const HUE_FAMILIES: &[HueFamily] = &[
    HueFamily {
        name: "red",
        hue_range: (-26, 18),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 92.0),
            (40.0, 89.0),
            (50.0, 85.0),
            (60.0, 78.0),
            (70.0, 70.0),
            (80.0, 60.0),
            (90.0, 55.0),
            (100.0, 50.0),
        ],
    },
    HueFamily {
        name: "orange",
        hue_range: (18, 46),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 93.0),
            (40.0, 88.0),
            (50.0, 86.0),
            (60.0, 85.0),
            (70.0, 70.0),
            (100.0, 70.0),
        ],
    },
    HueFamily {
        name: "yellow",
        hue_range: (46, 62),
        lower_bounds: &[
            (25.0, 100.0),
            (40.0, 94.0),
            (50.0, 89.0),
            (60.0, 86.0),
            (70.0, 84.0),
            (80.0, 82.0),
            (90.0, 80.0),
            (100.0, 75.0),
        ],
    },
    HueFamily {
        name: "green",
        hue_range: (62, 178),
        lower_bounds: &[
            (30.0, 100.0),
            (40.0, 90.0),
            (50.0, 85.0),
            (60.0, 81.0),
            (70.0, 74.0),
            (80.0, 64.0),
            (90.0, 50.0),
            (100.0, 40.0),
        ],
    },
    HueFamily {
        name: "blue",
        hue_range: (178, 257),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 86.0),
            (40.0, 80.0),
            (50.0, 74.0),
            (60.0, 60.0),
            (70.0, 52.0),
            (80.0, 44.0),
            (90.0, 39.0),
            (100.0, 35.0),
        ],
    },
    HueFamily {
        name: "purple",
        hue_range: (257, 282),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 87.0),
            (40.0, 79.0),
            (50.0, 70.0),
            (60.0, 65.0),
            (70.0, 59.0),
            (80.0, 52.0),
            (90.0, 45.0),
            (100.0, 42.0),
        ],
    },
    HueFamily {
        name: "pink",
        hue_range: (282, 334),
        lower_bounds: &[
            (20.0, 100.0),
            (30.0, 90.0),
            (40.0, 86.0),
            (60.0, 84.0),
            (80.0, 80.0),
            (90.0, 75.0),
            (100.0, 73.0),
        ],
    },
];

/// Hue family containing `hue` (degrees in [0, 360]).
fn hue_family(hue: i32) -> Option<&'static HueFamily> {
    let hue = if (334..=360).contains(&hue) { hue - 360 } else { hue };
    HUE_FAMILIES
        .iter()
        .find(|family| hue >= family.hue_range.0 && hue <= family.hue_range.1)
}

/// Convert HSV (hue in degrees, saturation and value in percent) to RGB.
///
/// Hue 0 and 360 are nudged inward to 1 and 359. Channels truncate.
pub fn hsv_to_rgb(hue: i32, saturation: i32, value: i32) -> Rgb {
    let h = match hue {
        0 => 1.0,
        360 => 359.0,
        h => f64::from(h),
    } / 360.0;
    let s = f64::from(saturation) / 100.0;
    let v = f64::from(value) / 100.0;

    let h_i = (h * 6.0).floor() as i32;
    let f = h * 6.0 - f64::from(h_i);
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match h_i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let channel = |c: f64| (c * 255.0).floor().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// The three HSV components drawn for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
}

impl Hsv {
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

/// Draw a visually distinct color from the stream (three draws).
pub fn pick_hsv(rng: &mut SeededRng) -> Hsv {
    let hue = rng.draw_int_within(0.0, 360.0);
    let family = hue_family(hue);

    let saturation = match family {
        Some(family) => {
            let (lo, hi) = family.saturation_range();
            rng.draw_int_within(lo, hi)
        }
        None => rng.draw_int_within(0.0, 100.0),
    };

    let min_brightness = family.map_or(0.0, |f| f.min_brightness(f64::from(saturation)));
    let value = rng.draw_int_within(min_brightness, 100.0);

    Hsv {
        hue,
        saturation,
        value,
    }
}

/// Draw a visually distinct opaque color from the stream.
pub fn random_color(rng: &mut SeededRng) -> Rgb {
    pick_hsv(rng).to_rgb()
}
