//! Validated evaluation layer
//!
//! The formulas in [`crate::models`] are unchecked and generic over
//! [`Real`](crate::physics::Real). This module is the `f64` entry point for
//! working with measured data:
//!
//! - [`DialysisSetup`]: t0, l0, both volumes and Pc of one experiment
//! - [`Tolerances`]: singular band and conditioning limit
//! - [`Experiment`]: checked forward and inverse operations returning
//!   [`Result`](crate::error::Result)
//! - [`SweepConfiguration`] / [`KdSweep`]: all observables over a Kd grid
//!
//! # Example
//!
//! ```rust
//! use qud_rs::solver::{DialysisSetup, Experiment, SweepConfiguration};
//!
//! fn main() -> qud_rs::error::Result<()> {
//!     let experiment = Experiment::new(DialysisSetup::equilibrating(80.0, 50.0, 100.0, 300.0));
//!
//!     let lred = experiment.red_concentration(500.0)?;
//!     let kd = experiment.kd_from_red(lred)?;
//!     assert!((kd - 500.0).abs() < 1e-6);
//!
//!     let sweep = experiment.sweep(&SweepConfiguration::logarithmic(1.0, 1e4, 41))?;
//!     assert_eq!(sweep.len(), 41);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Non-positive or non-finite setup parameter, Kd or Pt | [`QudError::Domain`](crate::error::QudError::Domain) |
//! | Negative measured concentration | [`QudError::Domain`](crate::error::QudError::Domain) |
//! | Measurement showing no net binding, `pt == pc` | [`QudError::SingularInput`](crate::error::QudError::SingularInput) |
//! | Measurement implying a negative Kd | [`QudError::NonPhysical`](crate::error::QudError::NonPhysical) |
//! | Ill-conditioned quadratic | `log::warn!`, value still returned |

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod setup;
mod experiment;
mod sweep;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Sweeps shorter than the threshold are evaluated on the calling thread even
// with the `parallel` feature enabled. Relaxed ordering is sufficient: the
// value is a performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of Kd values above which a sweep is handed to Rayon
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`Experiment::sweep`] evaluates sequentially when the grid has at most this
/// many points, and in parallel above it when the crate is compiled with the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use qud_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use qud_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert_eq!(parallel_threshold(), 4096);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Saves the current threshold on construction and restores it on drop.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // bypass the setter so restoring never panics
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SweepConfiguration, SweepSpacing, Tolerances};
pub use setup::DialysisSetup;
pub use experiment::Experiment;
pub use sweep::KdSweep;
