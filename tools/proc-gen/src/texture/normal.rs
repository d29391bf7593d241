//! Tangent-space normal map synthesis
//!
//! Normals are built directly from a ripple field plus hash jitter rather
//! than derived from a height map.

use super::noise::hash_noise;
use super::TextureBuffer;
use std::f64::consts::PI;

/// Generate a rippled tangent-space normal map
///
/// X and Y perturbations are at most about ±0.17, so Z stays close to 1 and
/// the map reads as a subtle panel ripple. Components are packed as
/// `(c * 0.5 + 0.5) * 255`, truncated.
///
/// # Arguments
/// * `size` - Edge length in pixels
/// * `seed` - Ripple phase and jitter seed
pub fn normal_map(size: u32, seed: u32) -> TextureBuffer {
    let inv = 1.0 / size as f64;
    let phase = seed as f64;
    TextureBuffer::from_fn(size, size, |x, y| {
        let nx = x as f64 * inv;
        let ny = y as f64 * inv;

        let dx = 0.14 * ((nx * 16.0 + phase) * PI).sin()
            + (hash_noise(x, y, seed.wrapping_add(91)) - 0.5) * 0.06;
        // Swapped coordinates decorrelate the two jitter fields
        let dy = 0.14 * ((ny * 13.0 + phase * 0.5) * PI).cos()
            + (hash_noise(y, x, seed.wrapping_add(47)) - 0.5) * 0.06;
        let dz = (1.0 - dx * dx - dy * dy).max(0.0).sqrt();

        [pack(dx), pack(dy), pack(dz)]
    })
}

#[inline]
fn pack(component: f64) -> u8 {
    ((component * 0.5 + 0.5) * 255.0) as u8
}
