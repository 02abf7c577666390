//! Interpolation and compositing functions.

/// Linear interpolation between two values.
///
/// Returns `a` when `t=0`, `b` when `t=1`, and linear blend in between.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Smoothstep on the unit interval.
///
/// Hermite interpolation with zero slope at 0 and 1. Input is clamped.
#[inline]
pub fn smoothstep01(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Source-over compositing of a straight-alpha color onto a straight-alpha pixel.
///
/// `src_alpha` already includes coverage. Channels are in [0, 1].
#[inline]
pub fn blend_over(dst: [f32; 4], src: [f32; 3], src_alpha: f32) -> [f32; 4] {
    let sa = src_alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = dst[3];
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0.0; 4];
    }
    let mix = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        out_a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-9);
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_smoothstep01() {
        assert_eq!(smoothstep01(-0.5), 0.0);
        assert_eq!(smoothstep01(1.5), 1.0);
        assert!((smoothstep01(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_over_transparent_dst() {
        let out = blend_over([0.0; 4], [1.0, 0.5, 0.25], 0.4);
        assert!((out[0] - 1.0).abs() < 1e-6);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert!((out[3] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_over_opaque_src_replaces() {
        let out = blend_over([0.2, 0.2, 0.2, 1.0], [0.9, 0.1, 0.0], 1.0);
        assert_eq!(out, [0.9, 0.1, 0.0, 1.0]);
    }

    #[test]
    fn test_over_half_alpha_mixes() {
        let out = blend_over([0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0], 0.5);
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert!((out[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_over_zero_alpha_is_noop() {
        let dst = [0.3, 0.4, 0.5, 0.6];
        assert_eq!(blend_over(dst, [1.0, 1.0, 1.0], 0.0), dst);
    }
}
