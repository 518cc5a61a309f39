//! Experimental setup of a two-chamber dialysis run

use crate::error::{QudError, Result};
use crate::models::PartitionModel;
use crate::physics::ChamberQuantity;

/// Fixed parameters of a dialysis experiment
///
/// Everything except Kd and the measured observables: the loaded target and
/// ligand concentrations, both chamber volumes and the control partition
/// coefficient.
///
/// # Example
///
/// ```rust
/// use qud_rs::solver::DialysisSetup;
///
/// let setup = DialysisSetup::equilibrating(80.0, 50.0, 100.0, 300.0).with_partition(1.2);
///
/// assert!(setup.validate().is_ok());
/// assert_eq!(setup.total_volume(), 400.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialysisSetup {
    /// Total target concentration in the red chamber
    pub t0: f64,
    /// Total ligand concentration over the combined volume
    pub l0: f64,
    pub redvol: f64,
    pub whitevol: f64,
    /// Control partition coefficient
    pub pc: f64,
}

impl DialysisSetup {
    /// Create a setup from explicit values
    pub fn new(t0: f64, l0: f64, redvol: f64, whitevol: f64, pc: f64) -> Self {
        Self { t0, l0, redvol, whitevol, pc }
    }

    /// Setup for a perfectly equilibrating ligand (`pc = 1`)
    pub fn equilibrating(t0: f64, l0: f64, redvol: f64, whitevol: f64) -> Self {
        Self::new(t0, l0, redvol, whitevol, 1.0)
    }

    /// Same setup with a different partition coefficient
    pub fn with_partition(self, pc: f64) -> Self {
        Self { pc, ..self }
    }

    /// `redvol + whitevol`
    pub fn total_volume(&self) -> f64 {
        self.redvol + self.whitevol
    }

    /// Check that every parameter is positive and finite
    pub fn validate(&self) -> Result<()> {
        let parameters = [
            (ChamberQuantity::TargetConcentration, self.t0),
            (ChamberQuantity::LigandConcentration, self.l0),
            (ChamberQuantity::RedVolume, self.redvol),
            (ChamberQuantity::WhiteVolume, self.whitevol),
            (ChamberQuantity::PartitionCoefficient, self.pc),
        ];

        for (quantity, value) in parameters {
            check_positive(quantity, value)?;
        }
        Ok(())
    }

    /// Unchecked model over these parameters
    pub fn model(&self) -> PartitionModel<f64> {
        PartitionModel::new(self.t0, self.l0, self.redvol, self.whitevol, self.pc)
    }
}

pub(crate) fn check_positive(quantity: ChamberQuantity, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QudError::Domain { quantity, value, constraint: "positive and finite" })
    }
}

pub(crate) fn check_non_negative(quantity: ChamberQuantity, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QudError::Domain { quantity, value, constraint: "non-negative and finite" })
    }
}
