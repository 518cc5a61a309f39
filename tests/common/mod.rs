//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{parameter_grid, Parameters, REFERENCE};
pub use test_helpers::{assert_finite_positive, relative_error};
