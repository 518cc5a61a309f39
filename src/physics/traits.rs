//! Core numeric and model traits
//!
//! This module defines the core API shared by every formula family:
//! - `Real`: numeric abstraction the formulas are generic over
//! - `ChamberQuantity`: type-safe identifiers of the physical quantities
//! - `ChamberModel`: forward and inverse operations of a dialysis model

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::{One, Zero};

// =================================================================================================
// Real (numeric abstraction)
// =================================================================================================

/// Scalar type the equilibrium formulas are evaluated in
///
/// Every formula in [`crate::models`] is written with `+`, `-`, `*`, `/`,
/// unary minus and [`Real::sqrt`] only. Any type providing those operations
/// can flow through them unchanged:
///
/// - `f64` / `f32`: plain evaluation
/// - [`Uncertain`](crate::physics::Uncertain): first-order error propagation
/// - [`Dual`](crate::physics::Dual): forward-mode derivatives
///
/// # Primal value
///
/// `value()` exposes the plain `f64` carried by the number. The formulas use
/// it for a single purpose: choosing between two algebraically identical forms
/// of the same quadratic root. It never changes which root is returned.
///
/// # Example
///
/// ```rust
/// use qud_rs::physics::Real;
///
/// fn hypotenuse<T: Real>(a: T, b: T) -> T {
///     (a * a + b * b).sqrt()
/// }
///
/// assert_eq!(hypotenuse(3.0_f64, 4.0), 5.0);
/// ```
pub trait Real:
    Copy
    + fmt::Debug
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift a plain constant into this number type
    fn from_f64(value: f64) -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// Primal value as `f64`
    fn value(self) -> f64;
}

macro_rules! impl_real_for_float {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn value(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_real_for_float!(f32, f64);

// =================================================================================================
// Chamber quantities (type-safe identifiers)
// =================================================================================================

/// Physical quantities of a microdialysis experiment
///
/// All concentrations share one unit and both volumes share one unit; the
/// library never converts between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChamberQuantity {
    /// Total target (protein) concentration t0, confined to the red chamber
    TargetConcentration,

    /// Total ligand concentration l0 over the combined volume
    LigandConcentration,

    /// Dissociation constant of the target-ligand complex
    Kd,

    /// Volume of the protein-containing chamber
    RedVolume,

    /// Volume of the protein-free chamber
    WhiteVolume,

    /// Control partition coefficient Pc (red/white without protein)
    PartitionCoefficient,

    /// Equilibrium ligand concentration in the red chamber
    RedConcentration,

    /// Equilibrium ligand concentration in the white chamber
    WhiteConcentration,

    /// Observed red/white concentration ratio Pt
    PtValue,
}

impl ChamberQuantity {
    /// Short symbol used in the literature
    pub fn symbol(&self) -> &'static str {
        match self {
            ChamberQuantity::TargetConcentration => "t0",
            ChamberQuantity::LigandConcentration => "l0",
            ChamberQuantity::Kd => "Kd",
            ChamberQuantity::RedVolume => "redvol",
            ChamberQuantity::WhiteVolume => "whitevol",
            ChamberQuantity::PartitionCoefficient => "Pc",
            ChamberQuantity::RedConcentration => "lred",
            ChamberQuantity::WhiteConcentration => "lwhite",
            ChamberQuantity::PtValue => "Pt",
        }
    }
}

impl fmt::Display for ChamberQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChamberQuantity::TargetConcentration => "target concentration",
            ChamberQuantity::LigandConcentration => "ligand concentration",
            ChamberQuantity::Kd => "Kd",
            ChamberQuantity::RedVolume => "red volume",
            ChamberQuantity::WhiteVolume => "white volume",
            ChamberQuantity::PartitionCoefficient => "partition coefficient",
            ChamberQuantity::RedConcentration => "red chamber concentration",
            ChamberQuantity::WhiteConcentration => "white chamber concentration",
            ChamberQuantity::PtValue => "Pt value",
        };
        f.write_str(name)
    }
}

// =================================================================================================
// Chamber Model Trait
// =================================================================================================

/// A two-chamber dialysis model with fixed experimental parameters
///
/// # Responsibility
///
/// Maps a Kd to the observables of the experiment (forward direction) and a
/// single measured observable back to Kd (inverse direction). Implementations
/// hold t0, l0, the chamber volumes and, where relevant, Pc.
///
/// # Contract
///
/// For valid positive parameters every inverse is the exact algebraic inverse
/// of its forward counterpart:
///
/// ```text
/// kd_from_red(red_concentration(kd)) == kd
/// kd_from_white(white_concentration(kd)) == kd
/// kd_from_pt(pt_value(kd)) == kd
/// ```
///
/// Singular inputs yield `±inf` or `NaN`; validation belongs to
/// [`crate::solver::Experiment`].
pub trait ChamberModel<T: Real>: Send + Sync {
    /// Equilibrium ligand concentration in the red chamber
    fn red_concentration(&self, kd: T) -> T;

    /// Equilibrium ligand concentration in the white chamber
    fn white_concentration(&self, kd: T) -> T;

    /// Ratio red/white at equilibrium
    fn pt_value(&self, kd: T) -> T;

    /// Kd from a measured red chamber concentration
    fn kd_from_red(&self, lred: T) -> T;

    /// Kd from a measured white chamber concentration
    fn kd_from_white(&self, lwhite: T) -> T;

    /// Kd from a measured Pt value
    fn kd_from_pt(&self, pt: T) -> T;

    /// Name of the model, used for display and logging
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
