//! Closed-form microdialysis models
//!
//! Both families implement the [`ChamberModel`](crate::physics::ChamberModel)
//! trait and expose the same equations as free functions generic over
//! [`Real`](crate::physics::Real). The free functions are the primary API; the
//! model structs bundle fixed experimental parameters for repeated evaluation.
//!
//! # Available Models
//!
//! ## [`PartitionModel`]: partition-corrected
//!
//! Ligand that does not fully equilibrate across the membrane even without
//! protein. The control partition coefficient Pc enters every equation.
//! Use this model whenever a control experiment gives Pc ≠ 1.
//!
//! ## [`EquilibriumModel`]: perfect equilibration
//!
//! The `pc = 1` special case, written without any Pc-dependent terms. Agrees
//! with [`PartitionModel`] at `pc = 1` to rounding.
//!
//! # Operations
//!
//! | Direction | Partition-corrected | Pc = 1 |
//! |-----------|---------------------|--------|
//! | Kd → lred | [`concentration_in_red`] | [`equilibrium_red_conc`] |
//! | Kd → lwhite | [`concentration_in_white`] | [`equilibrium_white_conc`] |
//! | Kd → Pt | [`pt_value`] | [`equilibrium_pt_value`] |
//! | lred → Kd | [`kd_from_lred`] | |
//! | lwhite → Kd | [`kd_from_lwhite`] | |
//! | Pt → Kd | [`kd_from_pt`] | |

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod quadratic;
pub mod partition;
pub mod equilibrium;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use quadratic::Quadratic;
pub use partition::{
    concentration_in_red,
    concentration_in_white,
    kd_from_lred,
    kd_from_lwhite,
    kd_from_pt,
    pt_value,
    PartitionModel,
};
pub use equilibrium::{
    equilibrium_pt_value,
    equilibrium_red_conc,
    equilibrium_white_conc,
    weidemann_pt,
    EquilibriumModel,
};
