//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that a value is finite and strictly positive
pub fn assert_finite_positive(value: f64, message: &str) {
    assert!(
        value.is_finite() && value > 0.0,
        "{}: expected a finite positive value, got {}",
        message, value
    );
}
