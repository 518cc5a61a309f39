//! Numeric abstraction and physical quantities
//!
//! This module provides the vocabulary shared by every formula family.
//!
//! # Core Concepts
//!
//! - **Real**: the numeric trait all formulas are generic over
//! - **Chamber Quantity**: type-safe identifier for t0, l0, Kd, volumes, Pc and the observables
//! - **Chamber Model**: a dialysis model with fixed parameters, mapping Kd to observables and back
//!
//! # Number Types
//!
//! The same formula code runs on three families of numbers:
//!
//! | Type | Purpose |
//! |------|---------|
//! | `f64`, `f32` | Plain evaluation |
//! | [`Uncertain`] | Mean ± first-order standard deviation |
//! | [`Dual`] | Value and derivative with respect to one input |
//!
//! # Example
//!
//! ```rust
//! use qud_rs::models::partition::kd_from_lwhite;
//! use qud_rs::physics::{Dual, Uncertain};
//!
//! // Plain
//! let kd: f64 = kd_from_lwhite(39.2, 80.0, 50.0, 100.0, 300.0, 1.0);
//!
//! // With measurement error on lwhite
//! let x = Uncertain::<1>::exact;
//! let kd_err = kd_from_lwhite(Uncertain::measured(0, 39.2, 0.4), x(80.0), x(50.0), x(100.0), x(300.0), x(1.0));
//! assert!((kd_err.mean() - kd).abs() < 1e-9);
//!
//! // Sensitivity dKd/dlwhite
//! let c = Dual::constant;
//! let dkd = kd_from_lwhite(Dual::var(39.2), c(80.0), c(50.0), c(100.0), c(300.0), c(1.0));
//! assert!(dkd.dot > 0.0);
//! ```

// module declaration
pub mod traits;
pub mod dual;
pub mod uncertain;

// re-export commonly used types for convenience
pub use dual::Dual;
pub use traits::{
    ChamberModel,
    ChamberQuantity,
    Real, };
pub use uncertain::Uncertain;
