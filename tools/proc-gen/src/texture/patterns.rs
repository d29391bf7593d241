//! Scalar helpers shared by the synthesizers

/// Clamp to `[0, 1]`
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Quantize a unit value to an 8-bit channel (clamped, truncating)
#[inline]
pub fn to_channel(value: f64) -> u8 {
    (clamp01(value) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_channel_clamps() {
        assert_eq!(to_channel(-0.5), 0);
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(3.0), 255);
        // Truncates rather than rounds
        assert_eq!(to_channel(0.999), 254);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(84.0, 173.0, 0.0), 84.0);
        assert_eq!(mix(84.0, 173.0, 1.0), 173.0);
        assert_eq!(mix(0.0, 10.0, 0.5), 5.0);
    }
}
