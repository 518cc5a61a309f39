//! Error types for qud-rs
//!
//! The generic formulas in [`crate::models`] never return errors: a singular
//! input surfaces as `±inf` or `NaN`, exactly as plain floating-point
//! arithmetic would. The validated layer in [`crate::solver`] turns those
//! situations into a [`QudError`] instead.
//!
//! Numerical conditioning problems are not errors. They are reported as a
//! [`ConditioningWarning`] through the `log` facade.

use std::fmt;

use thiserror::Error;

use crate::physics::ChamberQuantity;

/// qud-rs error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QudError {
    /// A physical positivity/non-negativity constraint is violated
    #[error("{quantity} must be {constraint}, got {value}")]
    Domain {
        quantity: ChamberQuantity,
        value: f64,
        constraint: &'static str,
    },

    /// A denominator of the requested operation vanishes for these inputs
    #[error("{operation} is singular: {reason}")]
    SingularInput {
        operation: &'static str,
        reason: String,
    },

    /// The formula produced a value outside its physical range
    #[error("non-physical result: {quantity} = {value}")]
    NonPhysical {
        quantity: ChamberQuantity,
        value: f64,
    },

    /// A configuration structure holds meaningless values
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, QudError>;

/// Non-fatal precision notice for a quadratic solved near a double root
///
/// The discriminant `b² - 4ac` is a difference of two products; when both are
/// large and nearly equal the subtraction loses roughly
/// `log10(condition_number)` significant digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditioningWarning {
    /// Quantity whose quadratic was ill-conditioned
    pub quantity: ChamberQuantity,
    /// `(b² + |4ac|) / |b² - 4ac|`
    pub condition_number: f64,
}

impl ConditioningWarning {
    /// Approximate number of decimal digits lost in the discriminant
    pub fn digits_lost(&self) -> f64 {
        self.condition_number.log10().max(0.0)
    }
}

impl fmt::Display for ConditioningWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discriminant for {} is ill-conditioned (condition number {:.3e}, ~{:.1} digits lost)",
            self.quantity,
            self.condition_number,
            self.digits_lost()
        )
    }
}
