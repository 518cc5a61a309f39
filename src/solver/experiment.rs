//! Validated evaluation of a dialysis experiment
//!
//! [`Experiment`] wraps the unchecked formulas of [`crate::models::partition`]
//! with input validation, singularity detection and conditioning reports:
//!
//! - invalid setups and arguments give [`QudError::Domain`]
//! - an inverse whose denominator lies within `singular_epsilon` of zero
//!   gives [`QudError::SingularInput`]
//! - an inverse yielding a Kd that is not strictly positive and finite gives
//!   [`QudError::NonPhysical`]
//! - a forward result that is not strictly positive, or whose discriminant
//!   overflowed, gives [`QudError::NonPhysical`]
//! - ill-conditioned forward quadratics are logged with `log::warn!` and the
//!   value is still returned

use log::{debug, warn};

use super::setup::{check_non_negative, check_positive, DialysisSetup};
use super::sweep::KdSweep;
use super::traits::{SweepConfiguration, Tolerances};
use crate::error::{QudError, Result};
use crate::models::partition;
use crate::models::Quadratic;
use crate::physics::ChamberQuantity;

/// Dialysis setup together with the tolerances used to check it
///
/// # Example
///
/// ```rust
/// use qud_rs::error::QudError;
/// use qud_rs::solver::{DialysisSetup, Experiment};
///
/// let experiment = Experiment::new(DialysisSetup::new(80.0, 50.0, 100.0, 300.0, 1.08));
///
/// let kd = experiment.kd_from_pt(1.43).unwrap();
/// assert!((kd - 198.098677845856).abs() < 1e-6);
///
/// // a Pt equal to the control carries no binding information
/// assert!(matches!(experiment.kd_from_pt(1.08), Err(QudError::SingularInput { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Experiment {
    pub setup: DialysisSetup,
    pub tolerances: Tolerances,
}

impl Experiment {
    /// Create an experiment with default tolerances
    pub fn new(setup: DialysisSetup) -> Self {
        Self::with_tolerances(setup, Tolerances::default())
    }

    /// Create an experiment with explicit tolerances
    pub fn with_tolerances(setup: DialysisSetup, tolerances: Tolerances) -> Self {
        Self { setup, tolerances }
    }

    /// Validate setup and tolerances
    pub fn validate(&self) -> Result<()> {
        self.setup.validate()?;
        self.tolerances.validate()
    }

    // =============================================================================================
    // Forward direction
    // =============================================================================================

    /// Ligand concentration in the red chamber for a given Kd
    pub fn red_concentration(&self, kd: f64) -> Result<f64> {
        let quadratic = self.forward_quadratic(kd, partition::red_quadratic)?;
        self.solve(ChamberQuantity::RedConcentration, kd, &quadratic, Quadratic::lower_root)
    }

    /// Ligand concentration in the white chamber for a given Kd
    pub fn white_concentration(&self, kd: f64) -> Result<f64> {
        let quadratic = self.forward_quadratic(kd, partition::white_quadratic)?;
        self.solve(ChamberQuantity::WhiteConcentration, kd, &quadratic, Quadratic::upper_root)
    }

    /// Pt value for a given Kd
    pub fn pt_value(&self, kd: f64) -> Result<f64> {
        let quadratic = self.forward_quadratic(kd, partition::pt_quadratic)?;
        self.solve(ChamberQuantity::PtValue, kd, &quadratic, Quadratic::upper_root)
    }

    /// Evaluate all three observables over a Kd grid
    pub fn sweep(&self, config: &SweepConfiguration) -> Result<KdSweep> {
        self.validate()?;
        let kd = config.kd_values()?;

        debug!(
            "sweeping {} Kd values from {} to {} ({:?})",
            config.points, config.start, config.end, config.spacing
        );

        let (sweep, flagged) = KdSweep::evaluate(&self.setup, kd, self.tolerances.conditioning_limit);
        if let Some((worst, count)) = flagged {
            warn!("{} of {} sweep points ill-conditioned, worst: {}", count, sweep.len(), worst);
        }

        Ok(sweep)
    }

    // =============================================================================================
    // Inverse direction
    // =============================================================================================

    /// Kd from a measured red chamber concentration
    pub fn kd_from_red(&self, lred: f64) -> Result<f64> {
        self.validate()?;
        check_non_negative(ChamberQuantity::RedConcentration, lred)?;

        let DialysisSetup { t0, l0, redvol, whitevol, pc } = self.setup;
        let free = pc * (l0 * self.setup.total_volume() - lred * redvol);
        let bound = lred * whitevol - free;
        self.check_singular("kd_from_lred", bound, (lred * whitevol).abs().max(free.abs()), || {
            format!("lred = {lred} shows no net binding")
        })?;

        self.check_kd("kd_from_lred", lred, partition::kd_from_lred(lred, t0, l0, redvol, whitevol, pc))
    }

    /// Kd from a measured white chamber concentration
    pub fn kd_from_white(&self, lwhite: f64) -> Result<f64> {
        self.validate()?;
        check_non_negative(ChamberQuantity::WhiteConcentration, lwhite)?;

        let DialysisSetup { t0, l0, redvol, whitevol, pc } = self.setup;
        let loaded = l0 * self.setup.total_volume();
        let bound = loaded - lwhite * (pc * redvol + whitevol);
        self.check_singular("kd_from_lwhite", bound, loaded, || {
            format!("lwhite = {lwhite} shows no net binding")
        })?;

        self.check_kd(
            "kd_from_lwhite",
            lwhite,
            partition::kd_from_lwhite(lwhite, t0, l0, redvol, whitevol, pc),
        )
    }

    /// Kd from a measured Pt value
    pub fn kd_from_pt(&self, pt: f64) -> Result<f64> {
        self.validate()?;
        check_positive(ChamberQuantity::PtValue, pt)?;

        let DialysisSetup { t0, l0, redvol, whitevol, pc } = self.setup;
        self.check_singular("kd_from_pt", pt - pc, pt.max(pc), || {
            format!("pt = {pt} equals the control partition coefficient {pc}")
        })?;

        self.check_kd("kd_from_pt", pt, partition::kd_from_pt(pt, t0, l0, redvol, whitevol, pc))
    }

    // =============================================================================================
    // Checks
    // =============================================================================================

    fn forward_quadratic(
        &self,
        kd: f64,
        build: fn(f64, f64, f64, f64, f64, f64) -> Quadratic<f64>,
    ) -> Result<Quadratic<f64>> {
        self.validate()?;
        check_positive(ChamberQuantity::Kd, kd)?;

        let DialysisSetup { t0, l0, redvol, whitevol, pc } = self.setup;
        Ok(build(t0, l0, kd, redvol, whitevol, pc))
    }

    fn solve(
        &self,
        quantity: ChamberQuantity,
        kd: f64,
        quadratic: &Quadratic<f64>,
        root: fn(&Quadratic<f64>) -> f64,
    ) -> Result<f64> {
        if let Some(warning) = quadratic.conditioning_warning(quantity, self.tolerances.conditioning_limit) {
            warn!("{} at Kd = {}", warning, kd);
        }

        // b² overflows for extreme Kd and the root collapses to zero
        let value = root(quadratic);
        if !quadratic.discriminant().is_finite() || !(value.is_finite() && value > 0.0) {
            return Err(QudError::NonPhysical { quantity, value });
        }

        debug!("{} = {} at Kd = {}", quantity.symbol(), value, kd);
        Ok(value)
    }

    fn check_singular(
        &self,
        operation: &'static str,
        denominator: f64,
        scale: f64,
        reason: impl FnOnce() -> String,
    ) -> Result<()> {
        if denominator.abs() <= self.tolerances.singular_epsilon * scale {
            Err(QudError::SingularInput { operation, reason: reason() })
        } else {
            Ok(())
        }
    }

    fn check_kd(&self, operation: &'static str, observed: f64, kd: f64) -> Result<f64> {
        if !(kd.is_finite() && kd > 0.0) {
            return Err(QudError::NonPhysical { quantity: ChamberQuantity::Kd, value: kd });
        }

        debug!("{}({}) = {}", operation, observed, kd);
        Ok(kd)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference(pc: f64) -> Experiment {
        Experiment::new(DialysisSetup::new(80.0, 50.0, 100.0, 300.0, pc))
    }

    #[test]
    fn test_forward_reference_values() {
        let experiment = reference(1.0);
        assert_relative_eq!(experiment.red_concentration(500.0).unwrap(), 55.279457703887, epsilon = 1e-9);
        assert_relative_eq!(experiment.white_concentration(500.0).unwrap(), 48.240180765371, epsilon = 1e-9);
        assert_relative_eq!(experiment.pt_value(500.0).unwrap(), 1.145921446123, epsilon = 1e-11);

        let corrected = reference(1.2);
        assert_relative_eq!(corrected.red_concentration(500.0).unwrap(), 62.794725363899, epsilon = 1e-9);
        assert_relative_eq!(corrected.white_concentration(500.0).unwrap(), 45.735091545367, epsilon = 1e-9);
        assert_relative_eq!(corrected.pt_value(500.0).unwrap(), 1.373009722777, epsilon = 1e-11);
    }

    #[test]
    fn test_inverse_reference_values() {
        assert_relative_eq!(reference(1.0).kd_from_red(62.32).unwrap(), 177.613160173160, epsilon = 1e-8);
        assert_relative_eq!(reference(1.0).kd_from_white(39.2).unwrap(), 33.392592592593, epsilon = 1e-8);
        assert_relative_eq!(reference(1.08).kd_from_pt(1.43).unwrap(), 198.098677845856, epsilon = 1e-8);
    }

    #[test]
    fn test_domain_errors() {
        let experiment = reference(1.0);

        assert!(matches!(
            experiment.red_concentration(0.0),
            Err(QudError::Domain { quantity: ChamberQuantity::Kd, .. })
        ));
        assert!(matches!(
            experiment.kd_from_pt(-1.0),
            Err(QudError::Domain { quantity: ChamberQuantity::PtValue, .. })
        ));
        assert!(matches!(
            experiment.kd_from_white(f64::NAN),
            Err(QudError::Domain { quantity: ChamberQuantity::WhiteConcentration, .. })
        ));

        let broken = Experiment::new(DialysisSetup::new(80.0, 50.0, -100.0, 300.0, 1.0));
        assert!(matches!(
            broken.white_concentration(10.0),
            Err(QudError::Domain { quantity: ChamberQuantity::RedVolume, .. })
        ));
    }

    #[test]
    fn test_singular_inverses() {
        let experiment = reference(1.0);

        // no binding: both chambers at l0
        assert!(matches!(experiment.kd_from_red(50.0), Err(QudError::SingularInput { .. })));
        assert!(matches!(experiment.kd_from_white(50.0), Err(QudError::SingularInput { .. })));
        assert!(matches!(experiment.kd_from_pt(1.0), Err(QudError::SingularInput { .. })));

        let corrected = reference(1.2);
        let err = corrected.kd_from_pt(1.2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "kd_from_pt is singular: pt = 1.2 equals the control partition coefficient 1.2"
        );
    }

    #[test]
    fn test_non_physical_inverse() {
        // lwhite above l0 means ligand was depleted from the red chamber
        assert!(matches!(
            reference(1.0).kd_from_white(55.0),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::Kd, .. })
        ));
        // Pt below the control
        assert!(matches!(
            reference(1.2).kd_from_pt(1.1),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::Kd, .. })
        ));
    }

    #[test]
    fn test_zero_kd_is_non_physical() {
        let experiment = reference(1.0);

        // lwhite = 0 would need more bound ligand than there is target
        match experiment.kd_from_white(0.0) {
            Err(QudError::NonPhysical { quantity: ChamberQuantity::Kd, value }) => assert_eq!(value, 0.0),
            other => panic!("expected a non-physical Kd, got {:?}", other),
        }
        // every target site occupied: bound == t0·whitevol exactly
        assert!(matches!(
            experiment.kd_from_red(110.0),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::Kd, .. })
        ));
    }

    #[test]
    fn test_overflowing_kd_is_non_physical() {
        let experiment = reference(1.0);

        assert!(matches!(
            experiment.red_concentration(1e300),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::RedConcentration, .. })
        ));
        assert!(matches!(
            experiment.white_concentration(1e300),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::WhiteConcentration, .. })
        ));
        assert!(matches!(
            experiment.pt_value(1e300),
            Err(QudError::NonPhysical { quantity: ChamberQuantity::PtValue, .. })
        ));

        // large but representable Kd still approaches the control limit
        assert_relative_eq!(experiment.pt_value(1e100).unwrap(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_checked_round_trip() {
        let experiment = reference(1.2);

        for kd in [0.5, 20.0, 500.0, 8000.0] {
            let red = experiment.red_concentration(kd).unwrap();
            let white = experiment.white_concentration(kd).unwrap();
            let pt = experiment.pt_value(kd).unwrap();

            assert_relative_eq!(experiment.kd_from_red(red).unwrap(), kd, max_relative = 1e-8);
            assert_relative_eq!(experiment.kd_from_white(white).unwrap(), kd, max_relative = 1e-8);
            assert_relative_eq!(experiment.kd_from_pt(pt).unwrap(), kd, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_ill_conditioning_still_returns_value() {
        let strict = Experiment::with_tolerances(
            DialysisSetup::new(80.0, 50.0, 100.0, 300.0, 1.0),
            Tolerances::new(1e-12, 1.0),
        );

        assert_relative_eq!(strict.red_concentration(500.0).unwrap(), 55.279457703887, epsilon = 1e-9);
    }

    #[test]
    fn test_sweep_through_experiment() {
        let sweep = reference(1.0)
            .sweep(&SweepConfiguration::logarithmic(1.0, 1e4, 9))
            .unwrap();

        assert_eq!(sweep.len(), 9);
        assert_relative_eq!(sweep.kd[8], 1e4);
        // binding weakens monotonically
        for i in 1..sweep.len() {
            assert!(sweep.red[i] < sweep.red[i - 1]);
            assert!(sweep.white[i] > sweep.white[i - 1]);
            assert!(sweep.pt[i] < sweep.pt[i - 1]);
        }

        assert!(reference(1.0).sweep(&SweepConfiguration::linear(1.0, 10.0, 0)).is_err());
    }
}
