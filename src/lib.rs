//! qud-rs: Quantitative Microdialysis Equations
//!
//! Closed-form equilibrium equations for determining dissociation constants
//! (Kd) from two-chamber microdialysis experiments. The red chamber holds the
//! target protein, the white chamber is protein-free, and ligand exchanges
//! freely through the membrane.
//!
//! # Architecture
//!
//! qud-rs is built on two layers:
//!
//! 1. **Unchecked formulas** ([`models`])
//!    - Free functions generic over [`Real`](physics::Real)
//!    - Same code for `f64`, error propagation ([`Uncertain`](physics::Uncertain))
//!      and derivatives ([`Dual`](physics::Dual))
//!    - Singular inputs surface as `±inf` or `NaN`
//!
//! 2. **Validated evaluation** ([`solver`])
//!    - `f64` only, returns [`Result`](error::Result)
//!    - Domain checks, singularity detection, conditioning warnings
//!    - Kd sweeps, optionally parallel (feature `parallel`)
//!
//! # Quick Start
//!
//! ```rust
//! use qud_rs::prelude::*;
//!
//! // forward: what lred does a Kd of 500 produce?
//! let lred: f64 = concentration_in_red(80.0, 50.0, 500.0, 100.0, 300.0, 1.0);
//! assert!((lred - 55.279457703887).abs() < 1e-9);
//!
//! // inverse: which Kd explains a measured Pt?
//! let experiment = Experiment::new(DialysisSetup::new(80.0, 50.0, 100.0, 300.0, 1.08));
//! let kd = experiment.kd_from_pt(1.43).unwrap();
//! assert!((kd - 198.098677845856).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`physics`]: number types and physical quantities
//! - [`models`]: partition-corrected and perfectly equilibrating equations
//! - [`solver`]: validated evaluation and Kd sweeps
//! - [`error`]: error and warning types

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use qud_rs::prelude::*;
    //! ```
    pub use crate::error::{ConditioningWarning, QudError, Result};
    pub use crate::models::{
        concentration_in_red,
        concentration_in_white,
        equilibrium_pt_value,
        equilibrium_red_conc,
        equilibrium_white_conc,
        kd_from_lred,
        kd_from_lwhite,
        kd_from_pt,
        pt_value,
        EquilibriumModel,
        PartitionModel,
    };
    pub use crate::physics::{ChamberModel,
                             ChamberQuantity,
                             Dual,
                             Real,
                             Uncertain};
    pub use crate::solver::{DialysisSetup,
                            Experiment,
                            KdSweep,
                            SweepConfiguration,
                            Tolerances};
}
