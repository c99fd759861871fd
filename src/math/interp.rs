/// Linear interpolation between `a` and `b`, exact at both ends
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Position of `value` within `[start, end]`, clamped to [0, 1]
///
/// Callers guarantee `end > start`; values at or below `start` map to 0 and
/// values at or above `end` map to 1.
pub fn inverse_lerp_clamped(start: f32, end: f32, value: f32) -> f32 {
    if value <= start {
        0.0
    } else if value >= end {
        1.0
    } else {
        ((value - start) / (end - start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(-5.0, 0.0, 0.0), -5.0);
        assert_eq!(lerp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(-5.0, 0.0, 0.5), -2.5);
    }

    #[test]
    fn test_inverse_lerp_clamps() {
        assert_eq!(inverse_lerp_clamped(100.0, 500.0, -1e9), 0.0);
        assert_eq!(inverse_lerp_clamped(100.0, 500.0, 100.0), 0.0);
        assert_eq!(inverse_lerp_clamped(100.0, 500.0, 300.0), 0.5);
        assert_eq!(inverse_lerp_clamped(100.0, 500.0, 500.0), 1.0);
        assert_eq!(inverse_lerp_clamped(100.0, 500.0, 1e9), 1.0);
    }
}
