//! Small vector helpers on top of `glam`

use glam::Vec3;

/// Length below which a vector is treated as degenerate
pub const NORMAL_EPSILON: f32 = 1e-8;

/// Normalize `v`, falling back to +Y for a degenerate (near-zero) vector
///
/// Unreferenced vertices and collapsed faces accumulate a zero normal; +Y keeps
/// them lit from above instead of producing NaNs.
#[inline]
pub fn normalize_or_up(v: Vec3) -> Vec3 {
    let len = v.length();
    if len <= NORMAL_EPSILON {
        Vec3::Y
    } else {
        v / len
    }
}
