//! Scalar range helpers used by the collision predicates.

/// Coerce `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics, even when `min > max`
/// (the lower bound wins in that case).
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        min
    } else if value >= max {
        max
    } else {
        value
    }
}

/// Inclusive range check: `min <= value <= max`.
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_below_and_above() {
        assert_eq!(clamp(-5.0, 0.0, 500.0), 0.0);
        assert_eq!(clamp(900.0, 0.0, 500.0), 500.0);
        assert_eq!(clamp(250.0, 0.0, 500.0), 250.0);
    }

    #[test]
    fn test_clamp_boundaries_pass_through() {
        assert_eq!(clamp(0.0, 0.0, 500.0), 0.0);
        assert_eq!(clamp(500.0, 0.0, 500.0), 500.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(3.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_in_range_is_inclusive() {
        assert!(in_range(10.0, 10.0, 30.0), "Lower edge counts");
        assert!(in_range(30.0, 10.0, 30.0), "Upper edge counts");
        assert!(in_range(20.0, 10.0, 30.0));
        assert!(!in_range(9.99, 10.0, 30.0));
        assert!(!in_range(30.01, 10.0, 30.0));
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_within_bounds(value in -1.0e6f32..1.0e6, max in 0.0f32..1.0e4) {
            let out = clamp(value, 0.0, max);
            prop_assert!(in_range(out, 0.0, max));
        }

        #[test]
        fn prop_clamp_is_identity_inside_range(value in 0.0f32..500.0) {
            prop_assert_eq!(clamp(value, 0.0, 500.0), value);
        }
    }
}
