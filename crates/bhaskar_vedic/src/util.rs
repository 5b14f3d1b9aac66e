//! Small angle helpers shared across the crate.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_negative_angles() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_360(-360.0)).abs() < 1e-12);
    }

    #[test]
    fn normalizes_large_angles() {
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
        assert!((normalize_360(360.0)).abs() < 1e-12);
    }

    #[test]
    fn identity_in_range() {
        assert!((normalize_360(123.456) - 123.456).abs() < 1e-12);
    }
}
