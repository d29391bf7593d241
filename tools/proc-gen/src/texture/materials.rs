//! Surface channel synthesizers for industrial theme materials
//!
//! Each function produces a square `size x size` texture whose pixels are a
//! pure function of `(x, y, seed)`. Coordinates are normalized by `size`
//! (not `size - 1`) where a pattern needs them.

use super::noise::hash_noise;
use super::patterns::{clamp01, mix, to_channel};
use super::TextureBuffer;
use std::f64::consts::PI;

/// Generate a brushed-panel base color texture
///
/// Diagonal stripes blended with hash noise pick a color between `color_a`
/// and `color_b`. A repeating vertical scratch band brightens every channel.
///
/// # Arguments
/// * `size` - Edge length in pixels
/// * `color_a` - Color at blend factor 0
/// * `color_b` - Color at blend factor 1
/// * `seed` - Pattern seed
pub fn base_color(size: u32, color_a: [u8; 3], color_b: [u8; 3], seed: u32) -> TextureBuffer {
    let inv = 1.0 / size as f64;
    TextureBuffer::from_fn(size, size, |x, y| {
        let nx = x as f64 * inv;
        let ny = y as f64 * inv;
        let stripes = 0.5 + 0.5 * ((nx * 14.0 + ny * 4.0) * PI).sin();
        let t = clamp01(0.6 * stripes + 0.4 * hash_noise(x, y, seed));
        let scratch = scratch_band(x, seed);

        let channel = |i: usize| {
            to_channel(mix(color_a[i] as f64, color_b[i] as f64, t) / 255.0 + scratch)
        };
        [channel(0), channel(1), channel(2)]
    })
}

/// Triangular brightness ridge repeating every 41 columns, peak 0.18
fn scratch_band(x: u32, seed: u32) -> f64 {
    let phase = x.wrapping_add(seed.wrapping_mul(11)) % 41;
    let distance = (phase as f64 - 20.0).abs() / 20.0;
    0.18 * (1.0 - distance).max(0.0)
}

/// Generate a glTF metallic-roughness texture
///
/// R is always 255 (unused), G carries roughness, B carries metallic. Both
/// jitter by at most ±0.06 around the requested value.
pub fn metallic_roughness(size: u32, metallic: f64, roughness: f64, seed: u32) -> TextureBuffer {
    TextureBuffer::from_fn(size, size, |x, y| {
        let n = hash_noise(x, y, seed);
        let n2 = hash_noise(
            x.wrapping_mul(3),
            y.wrapping_mul(3),
            seed.wrapping_add(71),
        );
        [
            255,
            to_channel(roughness + (n - 0.5) * 0.12),
            to_channel(metallic + (n2 - 0.5) * 0.12),
        ]
    })
}

/// Generate an emissive texture of glowing grid lines on a near-black field
///
/// Lines fall on columns where `(x + 7 * seed) % 57 == 0` and rows where
/// `(y + 13 * seed) % 83 == 0`. Their intensity pulses diagonally across the
/// image.
pub fn emissive(size: u32, color: [u8; 3], seed: u32) -> TextureBuffer {
    TextureBuffer::from_fn(size, size, |x, y| {
        let line = x.wrapping_add(seed.wrapping_mul(7)) % 57 == 0
            || y.wrapping_add(seed.wrapping_mul(13)) % 83 == 0;
        let glow = if line {
            let pulse = 0.5 + 0.5 * ((x as f64 * 0.06 + y as f64 * 0.04 + seed as f64) * PI).sin();
            0.35 + 0.65 * pulse
        } else {
            0.0
        };
        let base = 0.03 + 0.02 * hash_noise(x, y, seed.wrapping_add(5));

        let channel = |i: usize| to_channel(base + color[i] as f64 / 255.0 * glow);
        [channel(0), channel(1), channel(2)]
    })
}
