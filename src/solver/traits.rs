//! Configuration types for validated evaluation
//!
//! Both configuration structures follow the same pattern: public fields,
//! named constructors for the common cases and a `validate()` that rejects
//! meaningless values before any formula runs.

use nalgebra::DVector;

use crate::error::{QudError, Result};

// =================================================================================================
// Tolerances
// =================================================================================================

/// Numerical tolerances used by [`Experiment`](crate::solver::Experiment)
///
/// # Fields
///
/// - `singular_epsilon`: relative half-width of the band around a vanishing
///   denominator inside which an inverse is reported as singular
/// - `conditioning_limit`: condition number above which a forward quadratic
///   emits a [`ConditioningWarning`](crate::error::ConditioningWarning)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub singular_epsilon: f64,
    pub conditioning_limit: f64,
}

impl Tolerances {
    /// Create tolerances from explicit values
    pub fn new(singular_epsilon: f64, conditioning_limit: f64) -> Self {
        Self { singular_epsilon, conditioning_limit }
    }

    /// Validate tolerances
    pub fn validate(&self) -> Result<()> {
        if !self.singular_epsilon.is_finite() || self.singular_epsilon < 0.0 {
            return Err(QudError::InvalidConfiguration(format!(
                "singular epsilon must be finite and non-negative, got {}",
                self.singular_epsilon
            )));
        }
        if self.conditioning_limit.is_nan() || self.conditioning_limit < 1.0 {
            return Err(QudError::InvalidConfiguration(format!(
                "conditioning limit must be at least 1, got {}",
                self.conditioning_limit
            )));
        }
        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e10)
    }
}

// =================================================================================================
// Kd sweeps
// =================================================================================================

/// Spacing of the Kd grid of a sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepSpacing {
    /// Evenly spaced values
    Linear,
    /// Evenly spaced in `ln(kd)`, the usual choice for binding curves
    Logarithmic,
}

/// Kd grid for [`Experiment::sweep`](crate::solver::Experiment::sweep)
///
/// # Examples
///
/// ```rust
/// use qud_rs::solver::SweepConfiguration;
///
/// let config = SweepConfiguration::logarithmic(1.0, 1000.0, 4);
/// let kd = config.kd_values().unwrap();
///
/// assert!((kd[1] - 10.0).abs() < 1e-9);
/// assert!((kd[3] - 1000.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfiguration {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub spacing: SweepSpacing,
}

impl SweepConfiguration {
    /// Create a configuration from explicit values
    pub fn new(start: f64, end: f64, points: usize, spacing: SweepSpacing) -> Self {
        Self { start, end, points, spacing }
    }

    /// Linearly spaced Kd values from `start` to `end` inclusive
    pub fn linear(start: f64, end: f64, points: usize) -> Self {
        Self::new(start, end, points, SweepSpacing::Linear)
    }

    /// Logarithmically spaced Kd values from `start` to `end` inclusive
    pub fn logarithmic(start: f64, end: f64, points: usize) -> Self {
        Self::new(start, end, points, SweepSpacing::Logarithmic)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("start", self.start), ("end", self.end)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(QudError::InvalidConfiguration(format!(
                    "sweep {} must be a positive finite Kd, got {}",
                    name, value
                )));
            }
        }
        if self.points == 0 {
            return Err(QudError::InvalidConfiguration(
                "sweep must contain at least one point".to_string(),
            ));
        }
        Ok(())
    }

    /// Kd grid described by this configuration
    ///
    /// A single-point sweep evaluates `start` only. The last value is set to
    /// `end` exactly.
    pub fn kd_values(&self) -> Result<DVector<f64>> {
        self.validate()?;

        let n = self.points;
        if n == 1 {
            return Ok(DVector::from_element(1, self.start));
        }

        let last = (n - 1) as f64;
        let mut values = match self.spacing {
            SweepSpacing::Linear => {
                let step = (self.end - self.start) / last;
                DVector::from_fn(n, |i, _| self.start + step * i as f64)
            }
            SweepSpacing::Logarithmic => {
                let (ln_start, ln_end) = (self.start.ln(), self.end.ln());
                let step = (ln_end - ln_start) / last;
                DVector::from_fn(n, |i, _| (ln_start + step * i as f64).exp())
            }
        };
        values[0] = self.start;
        values[n - 1] = self.end;

        Ok(values)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
