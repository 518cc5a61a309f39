//! Measurements with first-order uncertainty propagation
//!
//! An [`Uncertain`] value is a mean plus one linear error contribution per
//! independent measurement ("slot"). Arithmetic propagates every contribution
//! through the first-order Taylor expansion of the operation, and the standard
//! deviation is the root sum of squares of the contributions.
//!
//! Keeping contributions per slot (rather than a single variance) means that a
//! measurement entering a formula several times is treated as the *same*
//! random variable. The partition-corrected formulas use Pc in almost every
//! term; collapsing it into a variance after each operation would overstate
//! the final uncertainty.
//!
//! # Example
//!
//! ```rust
//! use qud_rs::models::partition::kd_from_pt;
//! use qud_rs::physics::Uncertain;
//!
//! let pt: Uncertain = Uncertain::measured(0, 1.21, 0.0082);
//! let pc: Uncertain = Uncertain::measured(1, 1.0133, 0.0047);
//! let x = Uncertain::exact;
//!
//! let kd = kd_from_pt(pt, x(80.0), x(50.0), x(100.0), x(300.0), pc);
//! assert!(kd.mean() > 0.0);
//! assert!(kd.std_dev() > 0.0);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::{One, Zero};

use super::traits::Real;

/// Mean with `N` linear error contributions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncertain<const N: usize = 4> {
    mean: f64,
    contributions: [f64; N],
}

impl<const N: usize> Uncertain<N> {
    /// A value known without error
    pub fn exact(mean: f64) -> Self {
        Self { mean, contributions: [0.0; N] }
    }

    /// An independent measurement occupying `slot`
    ///
    /// Two measurements must not share a slot unless they are the same
    /// physical measurement.
    ///
    /// # Panics
    ///
    /// Panics when `slot >= N` or `std_dev` is negative.
    pub fn measured(slot: usize, mean: f64, std_dev: f64) -> Self {
        assert!(slot < N, "measurement slot {} out of range (capacity {})", slot, N);
        assert!(std_dev >= 0.0, "standard deviation must be non-negative, got {}", std_dev);

        let mut contributions = [0.0; N];
        contributions[slot] = std_dev;
        Self { mean, contributions }
    }

    /// Nominal value
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// First-order standard deviation
    pub fn std_dev(&self) -> f64 {
        self.contributions.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Signed error contribution of one measurement slot
    pub fn contribution(&self, slot: usize) -> f64 {
        self.contributions[slot]
    }

    fn map_contributions(self, scale: f64) -> [f64; N] {
        let mut out = self.contributions;
        out.iter_mut().for_each(|c| *c *= scale);
        out
    }
}

impl<const N: usize> From<f64> for Uncertain<N> {
    fn from(mean: f64) -> Self {
        Self::exact(mean)
    }
}

impl<const N: usize> fmt::Display for Uncertain<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.mean, p, self.std_dev()),
            None => write!(f, "{} ± {}", self.mean, self.std_dev()),
        }
    }
}

// ======================================== Arithmetic ========================================

impl<const N: usize> Add for Uncertain<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut contributions = self.contributions;
        for (c, r) in contributions.iter_mut().zip(rhs.contributions) {
            *c += r;
        }
        Self { mean: self.mean + rhs.mean, contributions }
    }
}

impl<const N: usize> Sub for Uncertain<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const N: usize> Mul for Uncertain<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // d(ab) = b da + a db
        let mut contributions = self.map_contributions(rhs.mean);
        for (c, r) in contributions.iter_mut().zip(rhs.contributions) {
            *c += self.mean * r;
        }
        Self { mean: self.mean * rhs.mean, contributions }
    }
}

impl<const N: usize> Div for Uncertain<N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // d(a/b) = da/b - a db/b²
        let mean = self.mean / rhs.mean;
        let mut contributions = self.map_contributions(1.0 / rhs.mean);
        for (c, r) in contributions.iter_mut().zip(rhs.contributions) {
            *c -= mean * r / rhs.mean;
        }
        Self { mean, contributions }
    }
}

impl<const N: usize> Neg for Uncertain<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { mean: -self.mean, contributions: self.map_contributions(-1.0) }
    }
}

impl<const N: usize> Zero for Uncertain<N> {
    fn zero() -> Self {
        Self::exact(0.0)
    }

    fn is_zero(&self) -> bool {
        self.mean == 0.0 && self.contributions.iter().all(|c| *c == 0.0)
    }
}

impl<const N: usize> One for Uncertain<N> {
    fn one() -> Self {
        Self::exact(1.0)
    }
}

impl<const N: usize> Real for Uncertain<N> {
    fn from_f64(value: f64) -> Self {
        Self::exact(value)
    }

    fn sqrt(self) -> Self {
        let root = self.mean.sqrt();
        Self { mean: root, contributions: self.map_contributions(0.5 / root) }
    }

    fn value(self) -> f64 {
        self.mean
    }
}
