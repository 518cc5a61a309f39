//! Quadratic equations and deterministic root selection
//!
//! Every forward formula of this crate reduces to `a·x² + b·x + c = 0` where
//! exactly one root is physical. Which root that is follows from the signs of
//! the coefficients, never from inspecting the result:
//!
//! - red chamber concentration: the **lower** root `(-b - √D) / 2a`
//! - white chamber concentration and Pt: the **upper** root `(-b + √D) / 2a`
//!
//! # Cancellation-free evaluation
//!
//! Each root has a second, algebraically identical form obtained by
//! multiplying numerator and denominator with the conjugate:
//!
//! ```text
//! (-b - √D) / 2a  ==  2c / (-b + √D)
//! (-b + √D) / 2a  ==  2c / (-b - √D)
//! ```
//!
//! The form whose numerator adds two terms of the same sign is used, chosen
//! from the sign of `b`. Both forms describe the same smooth function, so
//! derivatives and propagated uncertainties are unaffected by the choice.

use crate::error::ConditioningWarning;
use crate::physics::{ChamberQuantity, Real};

/// Coefficients of `a·x² + b·x + c = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Real> Quadratic<T> {
    /// Create from coefficients
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// `b² - 4ac`
    pub fn discriminant(&self) -> T {
        self.b * self.b - T::from_f64(4.0) * self.a * self.c
    }

    /// The root `(-b - √D) / 2a`
    pub fn lower_root(&self) -> T {
        let root = self.discriminant().sqrt();
        let two = T::from_f64(2.0);

        if self.b.value() > 0.0 {
            (-self.b - root) / (two * self.a)
        } else {
            (two * self.c) / (-self.b + root)
        }
    }

    /// The root `(-b + √D) / 2a`
    pub fn upper_root(&self) -> T {
        let root = self.discriminant().sqrt();
        let two = T::from_f64(2.0);

        if self.b.value() <= 0.0 {
            (-self.b + root) / (two * self.a)
        } else {
            (two * self.c) / (-self.b - root)
        }
    }

    /// Condition number of the discriminant, `(b² + |4ac|) / |b² - 4ac|`
    ///
    /// Equals 1 when `a·c ≤ 0` (no cancellation possible) and grows without
    /// bound near a double root.
    pub fn condition_number(&self) -> f64 {
        let (a, b, c) = (self.a.value(), self.b.value(), self.c.value());
        let b2 = b * b;
        let four_ac = 4.0 * a * c;

        (b2 + four_ac.abs()) / (b2 - four_ac).abs()
    }

    /// Warning when the condition number exceeds `limit`
    pub fn conditioning_warning(
        &self,
        quantity: ChamberQuantity,
        limit: f64,
    ) -> Option<ConditioningWarning> {
        let condition_number = self.condition_number();

        (condition_number > limit || condition_number.is_nan()).then_some(ConditioningWarning {
            quantity,
            condition_number,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
