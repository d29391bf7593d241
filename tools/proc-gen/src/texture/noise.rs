//! Integer hash noise
//!
//! A cheap spatial hash rather than coherent noise: neighbouring pixels are
//! uncorrelated. Synthesizers layer it over smooth sine terms for grain.

/// Hash `(x, y, seed)` to a reproducible value in `[0, 1)`
///
/// All arithmetic wraps at 32 bits, so any input triple is valid.
#[inline]
pub fn hash_noise(x: u32, y: u32, seed: u32) -> f64 {
    let mut n = x.wrapping_mul(73_856_093)
        ^ y.wrapping_mul(19_349_663)
        ^ seed.wrapping_mul(83_492_791);
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n as f64 / 4_294_967_296.0
}
