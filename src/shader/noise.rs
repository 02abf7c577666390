//! Hash and noise functions for ring deformation.

use super::blend::{lerp, smoothstep01};

/// Integer hash function using bit manipulation.
///
/// Produces a pseudo-random u32 from an input u32. Good for seeding
/// and deriving other random values.
#[inline]
pub fn hash(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x
}

/// Fold a 64-bit seed into the 32-bit hash domain.
#[inline]
pub fn hash_seed(seed: i64) -> u32 {
    let bits = seed as u64;
    hash((bits as u32) ^ hash((bits >> 32) as u32).wrapping_mul(0x9e3779b9))
}

/// Convert a 3D lattice point to a float in [0, 1].
#[inline]
pub fn hash3_f64(x: i32, y: i32, z: i32, seed: u32) -> f64 {
    let n = hash(
        seed.wrapping_add((x as u32).wrapping_mul(374761393))
            .wrapping_add((y as u32).wrapping_mul(668265263))
            .wrapping_add((z as u32).wrapping_mul(1274126177)),
    );
    f64::from(n) / f64::from(u32::MAX)
}

/// 3D value noise with smooth interpolation.
///
/// Returns a value in [0, 1] that varies smoothly through space.
/// Uses trilinear interpolation with smoothstep for continuity.
pub fn noise3d(x: f64, y: f64, z: f64, seed: u32) -> f64 {
    let xi = x.floor() as i32;
    let yi = y.floor() as i32;
    let zi = z.floor() as i32;

    let u = smoothstep01(x - x.floor());
    let v = smoothstep01(y - y.floor());
    let w = smoothstep01(z - z.floor());

    let h = |dx: i32, dy: i32, dz: i32| hash3_f64(xi + dx, yi + dy, zi + dz, seed);

    let x00 = lerp(h(0, 0, 0), h(1, 0, 0), u);
    let x10 = lerp(h(0, 1, 0), h(1, 1, 0), u);
    let x01 = lerp(h(0, 0, 1), h(1, 0, 1), u);
    let x11 = lerp(h(0, 1, 1), h(1, 1, 1), u);

    let y0 = lerp(x00, x10, v);
    let y1 = lerp(x01, x11, v);

    lerp(y0, y1, w)
}

/// Seeded 3D noise field producing values in [-1, 1].
///
/// Stateless after construction; share it freely across ring renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseField {
    seed: u32,
}

impl NoiseField {
    pub fn new(seed: i64) -> Self {
        Self {
            seed: hash_seed(seed),
        }
    }

    /// Sample the field at a point.
    #[inline]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        noise3d(x, y, z, self.seed) * 2.0 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash(42), hash(42));
        assert_ne!(hash(42), hash(43));
    }

    #[test]
    fn test_hash_seed_spreads_sign() {
        assert_ne!(hash_seed(1), hash_seed(-1));
        assert_ne!(hash_seed(0), hash_seed(1 << 32));
    }

    #[test]
    fn test_noise3d_range() {
        for z in 0..5 {
            for y in 0..40 {
                for x in 0..40 {
                    let v = noise3d(x as f64 * 0.13, y as f64 * 0.13, z as f64 * 0.2, 9);
                    assert!((0.0..=1.0).contains(&v), "noise3d out of range: {}", v);
                }
            }
        }
    }

    #[test]
    fn test_noise3d_continuity() {
        // Values at nearby points should be similar
        let v1 = noise3d(5.0, 5.0, 0.5, 0);
        let v2 = noise3d(5.001, 5.0, 0.5, 0);
        let v3 = noise3d(5.0, 5.0, 0.501, 0);
        assert!((v1 - v2).abs() < 0.01, "noise should be continuous in x");
        assert!((v1 - v3).abs() < 0.01, "noise should be continuous in z");
    }

    #[test]
    fn test_field_range_and_determinism() {
        let a = NoiseField::new(42);
        let b = NoiseField::new(42);
        for i in 0..500 {
            let t = i as f64 * 0.071;
            let v = a.sample(t, -t * 0.5, 0.3);
            assert!((-1.0..=1.0).contains(&v));
            assert_eq!(v, b.sample(t, -t * 0.5, 0.3));
        }
    }

    #[test]
    fn test_field_depends_on_seed() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..20).any(|i| {
            let t = i as f64 * 0.37;
            a.sample(t, t, 0.5) != b.sample(t, t, 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn test_closed_loop_agrees() {
        let field = NoiseField::new(42);
        let freq = 7.3;
        let start = field.sample(freq, 0.0, 0.42);
        let end = field.sample(TAU.cos() * freq, TAU.sin() * freq, 0.42);
        assert!((start - end).abs() < 1e-9);
    }
}
