//! Partition-corrected microdialysis equations
//!
//! Closed-form equilibrium of a two-chamber dialysis experiment in which the
//! ligand does not necessarily distribute evenly between the chambers even
//! without protein. The control partition coefficient Pc captures that
//! imbalance; `pc = 1` is a perfectly equilibrating compound.
//!
//! # Model equations
//!
//! With `V = redvol + whitevol`, `f` the free ligand concentration in the red
//! chamber and `b` the bound ligand concentration:
//!
//! ```text
//! mass balance      l0·V  = lred·redvol + lwhite·whitevol
//! partition         f     = pc·lwhite
//! red chamber       lred  = f + b
//! binding           kd    = f·(t0 - b) / b
//! ```
//!
//! Eliminating `f` and `b` leaves one quadratic per observable:
//!
//! ```text
//! lwhite:  pc(pc·Vr + Vw)·x² + (kd(pc·Vr + Vw) + pc·t0·Vr - pc·l0·V)·x - l0·V·kd = 0
//! lred:    pc·Vr(pc·Vr + Vw)·x²
//!            - (pc·l0·V(2pc·Vr + Vw) + kd·Vw(pc·Vr + Vw) + pc·t0·Vr·Vw)·x
//!            + pc·l0·V(pc·l0·V + (kd + t0)·Vw) = 0
//! Pt:      kd·Vr·x² + (kd(Vw - pc·Vr) + pc·l0·V - pc·t0·Vr)·x - pc(pc·l0·V + (kd + t0)·Vw) = 0
//! ```
//!
//! The white and Pt quadratics have `a > 0, c < 0` and therefore exactly one
//! positive root (the upper one). For the red quadratic the physical root is
//! the lower one, bounded by `l0·V/Vr`.
//!
//! The inverse directions are linear in Kd once the measured observable fixes
//! `f` and `b` through the mass balance.
//!
//! # Example
//!
//! ```rust
//! use qud_rs::models::partition::{concentration_in_red, kd_from_lred};
//!
//! let lred: f64 = concentration_in_red(80.0, 50.0, 500.0, 100.0, 300.0, 1.2);
//! let kd = kd_from_lred(lred, 80.0, 50.0, 100.0, 300.0, 1.2);
//!
//! assert!((kd - 500.0).abs() < 1e-6);
//! ```

use super::quadratic::Quadratic;
use crate::physics::{ChamberModel, Real};

// =================================================================================================
// Quadratic builders
// =================================================================================================

/// Quadratic whose lower root is the red chamber concentration
pub fn red_quadratic<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> Quadratic<T> {
    let two = T::from_f64(2.0);
    let ligand = pc * l0 * (redvol + whitevol);
    let effective_volume = pc * redvol + whitevol;

    Quadratic::new(
        pc * redvol * effective_volume,
        -(ligand * (two * pc * redvol + whitevol)
            + kd * whitevol * effective_volume
            + pc * t0 * redvol * whitevol),
        ligand * (ligand + (kd + t0) * whitevol),
    )
}

/// Quadratic whose upper root is the white chamber concentration
pub fn white_quadratic<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> Quadratic<T> {
    let total_ligand = l0 * (redvol + whitevol);
    let effective_volume = pc * redvol + whitevol;

    Quadratic::new(
        pc * effective_volume,
        kd * effective_volume + pc * t0 * redvol - pc * total_ligand,
        -(total_ligand * kd),
    )
}

/// Quadratic whose upper root is the Pt value
pub fn pt_quadratic<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> Quadratic<T> {
    let ligand = pc * l0 * (redvol + whitevol);

    Quadratic::new(
        kd * redvol,
        kd * (whitevol - pc * redvol) + ligand - pc * t0 * redvol,
        -(pc * (ligand + (kd + t0) * whitevol)),
    )
}

// =================================================================================================
// Forward solvers
// =================================================================================================

/// Ligand concentration in the red (protein) chamber
///
/// # Arguments
///
/// * `t0` - Total target concentration (red chamber only)
/// * `l0` - Total ligand concentration over the combined volume
/// * `kd` - Dissociation constant of the target-ligand complex
/// * `redvol` - Volume of the red chamber
/// * `whitevol` - Volume of the white chamber
/// * `pc` - Control partition coefficient (1.0 for ideal equilibration)
///
/// All concentrations share one unit, both volumes share one unit.
pub fn concentration_in_red<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> T {
    red_quadratic(t0, l0, kd, redvol, whitevol, pc).lower_root()
}

/// Ligand concentration in the white (protein-free) chamber
///
/// Same arguments as [`concentration_in_red`].
pub fn concentration_in_white<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> T {
    white_quadratic(t0, l0, kd, redvol, whitevol, pc).upper_root()
}

/// Ratio lred/lwhite at equilibrium
///
/// Solved directly from its own quadratic; agrees with
/// `concentration_in_red / concentration_in_white` to rounding.
pub fn pt_value<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T, pc: T) -> T {
    pt_quadratic(t0, l0, kd, redvol, whitevol, pc).upper_root()
}

// =================================================================================================
// Inverse solvers
// =================================================================================================

/// Kd from a measured red chamber concentration
///
/// Singular when `lred·(pc·redvol + whitevol) == pc·l0·V`, i.e. when the
/// measurement shows no net binding.
pub fn kd_from_lred<T: Real>(lred: T, t0: T, l0: T, redvol: T, whitevol: T, pc: T) -> T {
    // free and bound ligand in the red chamber, both scaled by whitevol
    let free = pc * (l0 * (redvol + whitevol) - lred * redvol);
    let bound = lred * whitevol - free;

    free * (t0 * whitevol - bound) / (whitevol * bound)
}

/// Kd from a measured white chamber concentration
///
/// Singular when `lwhite·(pc·redvol + whitevol) == l0·V`, i.e. when the
/// measurement shows no net binding.
pub fn kd_from_lwhite<T: Real>(lwhite: T, t0: T, l0: T, redvol: T, whitevol: T, pc: T) -> T {
    // bound ligand in the red chamber, scaled by redvol
    let bound = l0 * (redvol + whitevol) - lwhite * (pc * redvol + whitevol);

    pc * lwhite * (t0 * redvol - bound) / bound
}

/// Kd from a measured Pt value
///
/// Singular when `pt == pc`: a ratio equal to the control carries no
/// information about binding.
pub fn kd_from_pt<T: Real>(pt: T, t0: T, l0: T, redvol: T, whitevol: T, pc: T) -> T {
    let weighted_volume = pt * redvol + whitevol;
    let excess = pt - pc;

    pc * (t0 * weighted_volume - excess * l0 * (redvol + whitevol)) / (excess * weighted_volume)
}

// =================================================================================================
// Partition Model
// =================================================================================================

/// Partition-corrected dialysis model with fixed experimental parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionModel<T> {
    /// Total target concentration t0
    pub t0: T,
    /// Total ligand concentration l0
    pub l0: T,
    /// Red chamber volume
    pub redvol: T,
    /// White chamber volume
    pub whitevol: T,
    /// Control partition coefficient Pc
    pub pc: T,
}

impl<T: Real> PartitionModel<T> {
    /// Create a new model
    pub fn new(t0: T, l0: T, redvol: T, whitevol: T, pc: T) -> Self {
        Self { t0, l0, redvol, whitevol, pc }
    }
}

impl<T: Real> ChamberModel<T> for PartitionModel<T> {
    fn red_concentration(&self, kd: T) -> T {
        concentration_in_red(self.t0, self.l0, kd, self.redvol, self.whitevol, self.pc)
    }

    fn white_concentration(&self, kd: T) -> T {
        concentration_in_white(self.t0, self.l0, kd, self.redvol, self.whitevol, self.pc)
    }

    fn pt_value(&self, kd: T) -> T {
        pt_value(self.t0, self.l0, kd, self.redvol, self.whitevol, self.pc)
    }

    fn kd_from_red(&self, lred: T) -> T {
        kd_from_lred(lred, self.t0, self.l0, self.redvol, self.whitevol, self.pc)
    }

    fn kd_from_white(&self, lwhite: T) -> T {
        kd_from_lwhite(lwhite, self.t0, self.l0, self.redvol, self.whitevol, self.pc)
    }

    fn kd_from_pt(&self, pt: T) -> T {
        kd_from_pt(pt, self.t0, self.l0, self.redvol, self.whitevol, self.pc)
    }

    fn name(&self) -> &str {
        "Partition-corrected qµD"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ====== Helper function ======

    fn reference_model(pc: f64) -> PartitionModel<f64> {
        PartitionModel::new(
            80.0,  // t0
            50.0,  // l0
            100.0, // redvol
            300.0, // whitevol
            pc,
        )
    }

    // ====== Forward values ======

    #[test]
    fn test_reference_values_perfect_equilibration() {
        let model = reference_model(1.0);

        assert_relative_eq!(model.red_concentration(500.0), 55.279457703887, epsilon = 1e-6);
        assert_relative_eq!(model.white_concentration(500.0), 48.240180765371, epsilon = 1e-6);
        assert_relative_eq!(model.pt_value(500.0), 1.145921446123, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_values_poor_equilibration() {
        let model = reference_model(1.2);

        assert_relative_eq!(model.red_concentration(500.0), 62.794725363899, epsilon = 1e-6);
        assert_relative_eq!(model.white_concentration(500.0), 45.735091545367, epsilon = 1e-6);
        assert_relative_eq!(model.pt_value(500.0), 1.373009722777, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_balance() {
        for pc in [0.8, 1.0, 1.2, 2.5] {
            for kd in [0.5, 10.0, 500.0, 1e5] {
                let model = reference_model(pc);
                let red = model.red_concentration(kd);
                let white = model.white_concentration(kd);

                assert_relative_eq!(red * 100.0 + white * 300.0, 50.0 * 400.0, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_pt_matches_concentration_ratio() {
        for pc in [0.8, 1.0, 1.2] {
            for kd in [1.0, 50.0, 500.0, 5000.0] {
                let model = reference_model(pc);
                let ratio = model.red_concentration(kd) / model.white_concentration(kd);

                assert_relative_eq!(model.pt_value(kd), ratio, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_red_root_is_physical() {
        // The red concentration can never exceed all ligand squeezed into the red chamber
        let model = reference_model(1.0);
        let upper_bound = 50.0 * 400.0 / 100.0;

        for kd in [1e-6, 1e-3, 1.0, 1e3, 1e6] {
            let red = model.red_concentration(kd);
            assert!(red > 0.0 && red <= upper_bound, "lred = {} for kd = {}", red, kd);
        }
    }

    #[test]
    fn test_without_binding_pt_tends_to_pc() {
        for pc in [0.7, 1.0, 1.3] {
            let model = reference_model(pc);
            assert_relative_eq!(model.pt_value(1e12), pc, max_relative = 1e-6);
        }
    }

    // ====== Inverse values ======

    #[test]
    fn test_kd_from_pt_reference() {
        let kd = kd_from_pt(1.43, 80.0, 50.0, 100.0, 300.0, 1.08);

        assert_relative_eq!(kd, 198.098677845856, epsilon = 1e-6);
    }

    #[test]
    fn test_kd_from_measured_concentrations() {
        // Reference measurements from a perfectly equilibrating compound
        assert_relative_eq!(
            kd_from_lred(62.32, 80.0, 50.0, 100.0, 300.0, 1.0),
            177.613160173160,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            kd_from_lwhite(39.2, 80.0, 50.0, 100.0, 300.0, 1.0),
            33.392592592593,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_round_trips() {
        for pc in [0.8, 1.0, 1.08, 1.5] {
            let model = reference_model(pc);
            for kd in [1.0, 25.0, 198.0, 500.0, 2000.0] {
                assert_relative_eq!(model.kd_from_red(model.red_concentration(kd)), kd, max_relative = 1e-8);
                assert_relative_eq!(model.kd_from_white(model.white_concentration(kd)), kd, max_relative = 1e-8);
                assert_relative_eq!(model.kd_from_pt(model.pt_value(kd)), kd, max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn test_kd_from_pt_singular_when_pt_equals_pc() {
        let kd: f64 = kd_from_pt(1.0, 80.0, 50.0, 100.0, 300.0, 1.0);
        assert!(!kd.is_finite());

        let kd: f64 = kd_from_pt(1.08, 80.0, 50.0, 100.0, 300.0, 1.08);
        assert!(!kd.is_finite());
    }

    #[test]
    fn test_kd_from_lwhite_singular_without_binding() {
        // Evenly distributed ligand: lwhite == l0 when pc == 1
        let kd: f64 = kd_from_lwhite(50.0, 80.0, 50.0, 100.0, 300.0, 1.0);
        assert!(!kd.is_finite());

        let kd: f64 = kd_from_lred(50.0, 80.0, 50.0, 100.0, 300.0, 1.0);
        assert!(!kd.is_finite());
    }

    #[test]
    fn test_model_name() {
        assert_eq!(reference_model(1.0).name(), "Partition-corrected qµD");
    }
}
