//! Coherent noise used to steer particles and to tint dying ones.

use noise::{NoiseFn, Perlin};

/// Anything that can produce smooth, deterministic noise in `[0, 1]`.
///
/// `t` is an ever-increasing time coordinate; implementations must stay
/// continuous as it grows.
pub trait NoiseSource {
    fn sample(&self, x: f32, y: f32, t: f32) -> f32;
}

/// Octave-summed Perlin noise normalized to `[0, 1]`.
pub struct NoiseField {
    perlin: Perlin,
    octaves: u32,
    falloff: f64,
}

impl NoiseField {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_FALLOFF: f64 = 0.5;

    pub fn new(seed: u32) -> Self {
        Self::with_detail(seed, Self::DEFAULT_OCTAVES, Self::DEFAULT_FALLOFF)
    }

    pub fn with_detail(seed: u32, octaves: u32, falloff: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: octaves.max(1),
            falloff,
        }
    }
}

impl NoiseSource for NoiseField {
    fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        let mut p = [x as f64, y as f64, t as f64];
        let mut amp = self.falloff;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            let n = self.perlin.get(p) * 0.5 + 0.5;
            sum += amp * n;
            amp *= self.falloff;
            p = [p[0] * 2.0, p[1] * 2.0, p[2] * 2.0];
        }
        (sum as f32).clamp(0.0, 1.0)
    }
}
