//! Perfectly equilibrating microdialysis equations (Pc = 1)
//!
//! Special case of [`crate::models::partition`] for a compound that spreads
//! evenly across the membrane in the absence of protein. Setting `pc = 1`
//! and dividing each quadratic by the total volume `V` gives:
//!
//! ```text
//! lwhite:  x² + (kd + t0·Vr/V - l0)·x - l0·kd = 0
//! lred:    Vr·x² - (l0(2Vr + Vw) + kd·Vw + t0·Vr·Vw/V)·x + l0(l0·V + (kd + t0)·Vw) = 0
//! Pt:      kd·Vr·x² + (kd(Vw - Vr) + l0·V - t0·Vr)·x - (l0·V + (kd + t0)·Vw) = 0
//! ```
//!
//! # Simplified Weidemann equation
//!
//! For a large white chamber the ligand concentration barely changes and
//! `Pt ≈ t0/kd + 1` (Weidemann et al., PMID 20681515). [`weidemann_pt`]
//! provides that approximation for comparison with the exact solution; the
//! two agree as `kd → ∞`.

use super::partition;
use super::quadratic::Quadratic;
use crate::physics::{ChamberModel, Real};

/// Ligand concentration in the red chamber of a perfectly equilibrating system
pub fn equilibrium_red_conc<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T) -> T {
    let two = T::from_f64(2.0);
    let volume = redvol + whitevol;

    Quadratic::new(
        redvol,
        -(l0 * (two * redvol + whitevol) + kd * whitevol + t0 * redvol * whitevol / volume),
        l0 * (l0 * volume + (kd + t0) * whitevol),
    )
    .lower_root()
}

/// Ligand concentration in the white chamber of a perfectly equilibrating system
pub fn equilibrium_white_conc<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T) -> T {
    let volume = redvol + whitevol;

    Quadratic::new(T::one(), kd + t0 * redvol / volume - l0, -(l0 * kd)).upper_root()
}

/// Pt value of a perfectly equilibrating system
pub fn equilibrium_pt_value<T: Real>(t0: T, l0: T, kd: T, redvol: T, whitevol: T) -> T {
    let total_ligand = l0 * (redvol + whitevol);

    Quadratic::new(
        kd * redvol,
        kd * (whitevol - redvol) + total_ligand - t0 * redvol,
        -(total_ligand + (kd + t0) * whitevol),
    )
    .upper_root()
}

/// Simplified Weidemann approximation `Pt ≈ t0/kd + 1`
pub fn weidemann_pt<T: Real>(t0: T, kd: T) -> T {
    t0 / kd + T::one()
}

/// Perfectly equilibrating dialysis model with fixed experimental parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilibriumModel<T> {
    pub t0: T,
    pub l0: T,
    pub redvol: T,
    pub whitevol: T,
}

impl<T: Real> EquilibriumModel<T> {
    /// Create a new model
    pub fn new(t0: T, l0: T, redvol: T, whitevol: T) -> Self {
        Self { t0, l0, redvol, whitevol }
    }
}

impl<T: Real> ChamberModel<T> for EquilibriumModel<T> {
    fn red_concentration(&self, kd: T) -> T {
        equilibrium_red_conc(self.t0, self.l0, kd, self.redvol, self.whitevol)
    }

    fn white_concentration(&self, kd: T) -> T {
        equilibrium_white_conc(self.t0, self.l0, kd, self.redvol, self.whitevol)
    }

    fn pt_value(&self, kd: T) -> T {
        equilibrium_pt_value(self.t0, self.l0, kd, self.redvol, self.whitevol)
    }

    fn kd_from_red(&self, lred: T) -> T {
        partition::kd_from_lred(lred, self.t0, self.l0, self.redvol, self.whitevol, T::one())
    }

    fn kd_from_white(&self, lwhite: T) -> T {
        partition::kd_from_lwhite(lwhite, self.t0, self.l0, self.redvol, self.whitevol, T::one())
    }

    fn kd_from_pt(&self, pt: T) -> T {
        partition::kd_from_pt(pt, self.t0, self.l0, self.redvol, self.whitevol, T::one())
    }

    fn name(&self) -> &str {
        "Equilibrium qµD"
    }
}
