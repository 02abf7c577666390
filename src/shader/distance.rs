//! Distance functions for spatial calculations.

/// Euclidean distance between two points.
#[inline]
pub fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    dist_sq(x, y, cx, cy).sqrt()
}

/// Squared Euclidean distance (avoids sqrt for comparisons).
#[inline]
pub fn dist_sq(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy
}

/// Distance from a point to a line segment.
///
/// Returns the shortest distance from point (px, py) to the line segment
/// defined by endpoints (x1, y1) and (x2, y2).
pub fn dist_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-10 {
        // Degenerate segment (point)
        return dist(px, py, x1, y1);
    }

    // Project point onto line, clamping to segment
    let t = ((px - x1) * dx + (py - y1) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = x1 + t * dx;
    let closest_y = y1 + t * dy;

    dist(px, py, closest_x, closest_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist() {
        assert!((dist(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-6);
        assert!((dist(1.0, 1.0, 1.0, 1.0)).abs() < 1e-6);
        assert!((dist_sq(0.0, 0.0, 3.0, 4.0) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_dist_to_segment() {
        // Point on segment
        assert!(dist_to_segment(0.5, 0.0, 0.0, 0.0, 1.0, 0.0) < 1e-6);
        // Point perpendicular to segment
        assert!((dist_to_segment(0.5, 1.0, 0.0, 0.0, 1.0, 0.0) - 1.0).abs() < 1e-6);
        // Point beyond segment end
        assert!((dist_to_segment(2.0, 0.0, 0.0, 0.0, 1.0, 0.0) - 1.0).abs() < 1e-6);
        // Degenerate segment
        assert!((dist_to_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0) - 5.0).abs() < 1e-6);
    }
}
