//! Forward-mode derivatives via dual numbers
//!
//! A dual number `Dual { val, dot }` carries a value and its derivative with
//! respect to one chosen input. Seeding that input with [`Dual::var`] and every
//! other input with [`Dual::constant`] makes any formula of this crate return
//! its partial derivative in `dot`.
//!
//! # Example
//!
//! ```rust
//! use qud_rs::models::partition::concentration_in_red;
//! use qud_rs::physics::Dual;
//!
//! let c = Dual::constant;
//! let lred = concentration_in_red(c(80.0), c(50.0), Dual::var(500.0), c(100.0), c(300.0), c(1.0));
//!
//! // Weaker binding leaves less ligand in the red chamber
//! assert!(lred.dot < 0.0);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::{One, Zero};

use super::traits::Real;

/// A dual number for forward-mode differentiation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value
    pub val: f64,
    /// Tangent (derivative) value
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0)
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create the independent variable (derivative = 1)
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }
}

impl From<f64> for Dual {
    fn from(val: f64) -> Self {
        Self::constant(val)
    }
}

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.val == 0.0 && self.dot == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Real for Dual {
    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::constant(value)
    }

    /// d/dx sqrt(x) = 1/(2*sqrt(x))
    #[inline]
    fn sqrt(self) -> Self {
        let s = self.val.sqrt();
        Self { val: s, dot: self.dot / (2.0 * s) }
    }

    #[inline]
    fn value(self) -> f64 {
        self.val
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_product_rule() {
        // f(x) = x * (x + 3) at x = 2 -> f = 10, f' = 2x + 3 = 7
        let x = Dual::var(2.0);
        let f = x * (x + Dual::constant(3.0));

        assert_relative_eq!(f.val, 10.0);
        assert_relative_eq!(f.dot, 7.0);
    }

    #[test]
    fn test_quotient_rule() {
        // f(x) = 1 / x at x = 4 -> f' = -1/16
        let f = Dual::constant(1.0) / Dual::var(4.0);

        assert_relative_eq!(f.val, 0.25);
        assert_relative_eq!(f.dot, -0.0625);
    }

    #[test]
    fn test_sqrt_derivative() {
        let f = Real::sqrt(Dual::var(9.0));

        assert_relative_eq!(f.val, 3.0);
        assert_relative_eq!(f.dot, 1.0 / 6.0);
    }

    #[test]
    fn test_constants_carry_no_tangent() {
        let f = Dual::from(5.0) * Dual::from(2.0) - Dual::one();

        assert_eq!(f, Dual::new(9.0, 0.0));
        assert!((f - f).is_zero());
    }
}
