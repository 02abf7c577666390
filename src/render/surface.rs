//! # Raster Surface
//!
//! A square-or-rectangular RGBA buffer with just enough 2D drawing to paint
//! closed polygons: anti-aliased non-zero fill and a thin anti-aliased stroke,
//! both composited source-over.
//!
//! Pixels are straight-alpha `[r, g, b, a]` in [0, 1] and start transparent.
//! Pixel `(x, y)` covers the square `[x, x+1) × [y, y+1)`.

use crate::color::Rgb;
use crate::shader::{blend_over, dist_to_segment};

/// Supersampling grid per pixel axis for polygon fill.
const SUBSAMPLES: usize = 4;

/// Mutable RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<[f32; 4]>,
}

impl Surface {
    /// Transparent surface. Dimensions are the caller's responsibility.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Flatten to 8-bit RGBA rows, top to bottom.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            if px[3] <= 0.0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                out.extend_from_slice(&[to_u8(px[0]), to_u8(px[1]), to_u8(px[2]), to_u8(px[3])]);
            }
        }
        out
    }

    #[inline]
    fn blend(&mut self, x: usize, y: usize, color: [f32; 3], alpha: f32) {
        let idx = y * self.width + x;
        self.pixels[idx] = blend_over(self.pixels[idx], color, alpha);
    }

    /// Fill a closed polygon using the non-zero winding rule.
    ///
    /// Coverage is estimated on a 4×4 sample grid per pixel. A polygon that
    /// has collapsed to a point or a horizontal line paints nothing.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb, alpha: f64) {
        if points.len() < 3 || self.width == 0 || self.height == 0 || alpha <= 0.0 {
            return;
        }

        let Some((min_y, max_y)) = y_extent(points) else {
            return;
        };
        let row_start = min_y.floor().max(0.0) as usize;
        let row_end = (max_y.ceil().max(0.0) as usize).min(self.height);

        let rgb = color.to_unit();
        let sample_weight = alpha as f32 / (SUBSAMPLES * SUBSAMPLES) as f32;
        let sample_cols = self.width * SUBSAMPLES;

        let mut coverage = vec![0u16; self.width];
        let mut crossings: Vec<(f64, i32)> = Vec::new();

        for y in row_start..row_end {
            coverage.fill(0);
            let mut any = false;

            for sub in 0..SUBSAMPLES {
                let sy = y as f64 + (sub as f64 + 0.5) / SUBSAMPLES as f64;
                collect_crossings(points, sy, &mut crossings);
                if crossings.is_empty() {
                    continue;
                }

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].1;
                    if winding == 0 {
                        continue;
                    }
                    // Sample k sits at (k + 0.5) / SUBSAMPLES
                    let scale = SUBSAMPLES as f64;
                    let k_start = (pair[0].0 * scale - 0.5).ceil().max(0.0) as usize;
                    let k_end = ((pair[1].0 * scale - 0.5).ceil().max(0.0) as usize).min(sample_cols);
                    for k in k_start..k_end {
                        coverage[k / SUBSAMPLES] += 1;
                        any = true;
                    }
                }
            }

            if !any {
                continue;
            }
            for x in 0..self.width {
                let samples = coverage[x];
                if samples > 0 {
                    self.blend(x, y, rgb, f32::from(samples) * sample_weight);
                }
            }
        }
    }

    /// Stroke the outline of a closed polygon with a line of `line_width` pixels.
    ///
    /// Each pixel takes the strongest coverage from any segment, so joints are
    /// not painted twice.
    pub fn stroke_polygon(&mut self, points: &[(f64, f64)], color: Rgb, line_width: f32) {
        if points.len() < 2 || self.width == 0 || self.height == 0 || line_width <= 0.0 {
            return;
        }

        let half = line_width * 0.5;
        let reach = half + 1.0;
        let mut coverage = vec![0f32; self.width * self.height];
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (self.width, self.height, 0, 0);

        let n = points.len();
        for i in 0..n {
            let (x1, y1) = (points[i].0 as f32, points[i].1 as f32);
            let (x2, y2) = (points[(i + 1) % n].0 as f32, points[(i + 1) % n].1 as f32);
            if (x2 - x1).abs() < 1e-6 && (y2 - y1).abs() < 1e-6 {
                continue;
            }

            let Some((bx0, by0, bx1, by1)) = self.clip_box(
                x1.min(x2) - reach,
                y1.min(y2) - reach,
                x1.max(x2) + reach,
                y1.max(y2) + reach,
            ) else {
                continue;
            };

            for py in by0..by1 {
                for px in bx0..bx1 {
                    let d = dist_to_segment(px as f32 + 0.5, py as f32 + 0.5, x1, y1, x2, y2);
                    let c = (half + 0.5 - d).clamp(0.0, 1.0).min(line_width);
                    let slot = &mut coverage[py * self.width + px];
                    if c > *slot {
                        *slot = c;
                    }
                }
            }

            min_x = min_x.min(bx0);
            min_y = min_y.min(by0);
            max_x = max_x.max(bx1);
            max_y = max_y.max(by1);
        }

        let rgb = color.to_unit();
        for py in min_y..max_y {
            for px in min_x..max_x {
                let c = coverage[py * self.width + px];
                if c > 0.0 {
                    self.blend(px, py, rgb, c);
                }
            }
        }
    }

    /// Clip a float box to pixel index ranges, `None` if it misses the surface.
    fn clip_box(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> Option<(usize, usize, usize, usize)> {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return None;
        }
        let bx0 = x0.floor().max(0.0) as usize;
        let by0 = y0.floor().max(0.0) as usize;
        let bx1 = (x1.ceil().max(0.0) as usize).min(self.width);
        let by1 = (y1.ceil().max(0.0) as usize).min(self.height);
        (bx0 < bx1 && by0 < by1).then_some((bx0, by0, bx1, by1))
    }
}

/// Vertical extent of a point set, `None` if any coordinate is non-finite.
fn y_extent(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        extent = Some(match extent {
            Some((lo, hi)) => (lo.min(y), hi.max(y)),
            None => (y, y),
        });
    }
    extent
}

/// Edge crossings of the horizontal line `y = sy`, sorted by x.
///
/// Each crossing carries its winding direction: +1 for downward edges,
/// -1 for upward ones. Edges are half-open in y so shared vertices count once.
fn collect_crossings(points: &[(f64, f64)], sy: f64, out: &mut Vec<(f64, i32)>) {
    out.clear();
    let n = points.len();
    for i in 0..n {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % n];
        if y0 == y1 {
            continue;
        }
        let (top, bottom, dir) = if y0 < y1 { (y0, y1, 1) } else { (y1, y0, -1) };
        if sy < top || sy >= bottom {
            continue;
        }
        let t = (sy - y0) / (y1 - y0);
        out.push((x0 + t * (x1 - x0), dir));
    }
    out.sort_by(|a, b| a.0.total_cmp(&b.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
        vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    }

    #[test]
    fn test_new_is_transparent() {
        let s = Surface::new(3, 2);
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert!(s.to_rgba8().iter().all(|&b| b == 0));
        assert_eq!(s.to_rgba8().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_fill_axis_aligned_square() {
        let mut s = Surface::new(10, 10);
        s.fill_polygon(&square(2.0, 2.0, 6.0, 6.0), RED, 1.0);

        assert_eq!(s.pixel(3, 3), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(s.pixel(1, 1).unwrap()[3], 0.0);
        assert_eq!(s.pixel(6, 3).unwrap()[3], 0.0);
        assert_eq!(s.pixel(5, 5).unwrap()[3], 1.0);
    }

    #[test]
    fn test_fill_partial_coverage_is_antialiased() {
        let mut s = Surface::new(4, 4);
        // Right edge at x = 2.5 covers half of column 2
        s.fill_polygon(&square(0.0, 0.0, 2.5, 4.0), RED, 1.0);
        let a = s.pixel(2, 1).unwrap()[3];
        assert!((a - 0.5).abs() < 1e-6, "expected half coverage, got {}", a);
    }

    #[test]
    fn test_fill_respects_alpha() {
        let mut s = Surface::new(4, 4);
        s.fill_polygon(&square(0.0, 0.0, 4.0, 4.0), RED, 0.25);
        assert!((s.pixel(1, 1).unwrap()[3] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_fill_winding_direction_irrelevant() {
        let mut a = Surface::new(8, 8);
        let mut b = Surface::new(8, 8);
        let mut pts = vec![(1.0, 1.0), (7.0, 2.0), (4.0, 7.0)];
        a.fill_polygon(&pts, BLUE, 1.0);
        pts.reverse();
        b.fill_polygon(&pts, BLUE, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_clips_offscreen() {
        let mut s = Surface::new(4, 4);
        s.fill_polygon(&square(-10.0, -10.0, 20.0, 20.0), RED, 1.0);
        assert!(s.to_rgba8().chunks(4).all(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn test_degenerate_polygon_paints_nothing() {
        let mut s = Surface::new(6, 6);
        let pts = vec![(3.0, 3.0); 12];
        s.fill_polygon(&pts, RED, 1.0);
        s.stroke_polygon(&pts, RED, 1.0);
        assert!(s.to_rgba8().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_stroke_draws_outline_only() {
        let mut s = Surface::new(12, 12);
        s.stroke_polygon(&square(2.5, 2.5, 9.5, 9.5), BLUE, 1.0);
        // On the outline
        assert!(s.pixel(5, 2).unwrap()[3] > 0.9);
        // Interior stays empty
        assert_eq!(s.pixel(6, 6).unwrap()[3], 0.0);
    }

    #[test]
    fn test_stroke_over_fill() {
        let mut s = Surface::new(12, 12);
        let pts = square(2.5, 2.5, 9.5, 9.5);
        s.fill_polygon(&pts, RED, 1.0);
        s.stroke_polygon(&pts, BLUE, 1.0);
        let edge = s.pixel(5, 2).unwrap();
        assert!(edge[2] > edge[0]);
        assert_eq!(s.pixel(6, 6), Some([1.0, 0.0, 0.0, 1.0]));
    }
}
