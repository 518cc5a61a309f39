//! Forward evaluation over a grid of Kd values

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use super::parallel_threshold;
use super::setup::DialysisSetup;
use crate::error::ConditioningWarning;
use crate::models::partition::{pt_quadratic, red_quadratic, white_quadratic};
use crate::physics::ChamberQuantity;

/// Observables of one setup evaluated over a Kd grid
///
/// All four columns have the same length; row `i` holds the equilibrium
/// reached with `kd[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct KdSweep {
    pub kd: DVector<f64>,
    pub red: DVector<f64>,
    pub white: DVector<f64>,
    pub pt: DVector<f64>,
}

impl KdSweep {
    /// Number of Kd values
    pub fn len(&self) -> usize {
        self.kd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kd.is_empty()
    }

    /// Row `i` as `(kd, lred, lwhite, pt)`
    pub fn row(&self, i: usize) -> Option<(f64, f64, f64, f64)> {
        (i < self.len()).then(|| (self.kd[i], self.red[i], self.white[i], self.pt[i]))
    }

    /// `l0·V - (lred·redvol + lwhite·whitevol)` for every row
    ///
    /// Zero up to rounding for any sweep produced from `setup`.
    pub fn mass_balance_residual(&self, setup: &DialysisSetup) -> DVector<f64> {
        let loaded = setup.l0 * setup.total_volume();

        self.red.zip_map(&self.white, |red, white| {
            loaded - (red * setup.redvol + white * setup.whitevol)
        })
    }

    /// Evaluate `setup` at every value of `kd`
    ///
    /// Returns the sweep and the worst conditioning warning above
    /// `conditioning_limit` together with the number of rows that exceeded it.
    pub(crate) fn evaluate(
        setup: &DialysisSetup,
        kd: DVector<f64>,
        conditioning_limit: f64,
    ) -> (Self, Option<(ConditioningWarning, usize)>) {
        let rows = map_rows(kd.as_slice(), |k| SweepRow::solve(setup, k, conditioning_limit));

        let n = rows.len();
        let red = DVector::from_iterator(n, rows.iter().map(|row| row.red));
        let white = DVector::from_iterator(n, rows.iter().map(|row| row.white));
        let pt = DVector::from_iterator(n, rows.iter().map(|row| row.pt));

        let flagged: Vec<ConditioningWarning> = rows.iter().filter_map(|row| row.warning).collect();
        let worst = flagged
            .iter()
            .copied()
            .max_by(|a, b| a.condition_number.total_cmp(&b.condition_number))
            .map(|warning| (warning, flagged.len()));

        (Self { kd, red, white, pt }, worst)
    }
}

// =================================================================================================
// Per-row evaluation
// =================================================================================================

struct SweepRow {
    red: f64,
    white: f64,
    pt: f64,
    warning: Option<ConditioningWarning>,
}

impl SweepRow {
    fn solve(setup: &DialysisSetup, kd: f64, conditioning_limit: f64) -> Self {
        let DialysisSetup { t0, l0, redvol, whitevol, pc } = *setup;

        let red = red_quadratic(t0, l0, kd, redvol, whitevol, pc);
        let white = white_quadratic(t0, l0, kd, redvol, whitevol, pc);
        let pt = pt_quadratic(t0, l0, kd, redvol, whitevol, pc);

        let warning = [
            (ChamberQuantity::RedConcentration, &red),
            (ChamberQuantity::WhiteConcentration, &white),
            (ChamberQuantity::PtValue, &pt),
        ]
        .into_iter()
        .filter_map(|(quantity, q)| q.conditioning_warning(quantity, conditioning_limit))
        .max_by(|a, b| a.condition_number.total_cmp(&b.condition_number));

        Self {
            red: red.lower_root(),
            white: white.upper_root(),
            pt: pt.upper_root(),
            warning,
        }
    }
}

#[cfg(feature = "parallel")]
fn map_rows<F>(kd: &[f64], solve: F) -> Vec<SweepRow>
where
    F: Fn(f64) -> SweepRow + Send + Sync,
{
    if kd.len() > parallel_threshold() {
        kd.par_iter().map(|&k| solve(k)).collect()
    } else {
        kd.iter().map(|&k| solve(k)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_rows<F>(kd: &[f64], solve: F) -> Vec<SweepRow>
where
    F: Fn(f64) -> SweepRow,
{
    kd.iter().map(|&k| solve(k)).collect()
}
