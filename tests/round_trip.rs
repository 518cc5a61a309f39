//! Integration tests: forward and inverse directions are consistent
//!
//! Every forward result, fed back into the matching inverse, must recover
//! the Kd it was computed from. The forward results must also conserve
//! ligand and reproduce Pt as the ratio of the two chamber concentrations.

use qud_rs::models::{
    concentration_in_red, concentration_in_white, kd_from_lred, kd_from_lwhite, kd_from_pt,
    pt_value, PartitionModel,
};
use qud_rs::physics::ChamberModel;
use qud_rs::solver::{DialysisSetup, Experiment};

mod common;
use common::{parameter_grid, relative_error, Parameters};

const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

fn forward(p: &Parameters) -> (f64, f64, f64) {
    (
        concentration_in_red(p.t0, p.l0, p.kd, p.redvol, p.whitevol, p.pc),
        concentration_in_white(p.t0, p.l0, p.kd, p.redvol, p.whitevol, p.pc),
        pt_value(p.t0, p.l0, p.kd, p.redvol, p.whitevol, p.pc),
    )
}

#[test]
fn test_round_trip_through_red_chamber() {
    for p in parameter_grid() {
        let (red, _, _) = forward(&p);
        let kd = kd_from_lred(red, p.t0, p.l0, p.redvol, p.whitevol, p.pc);

        let error = relative_error(kd, p.kd);
        assert!(error < ROUND_TRIP_TOLERANCE, "{:?}: recovered {} (error {:e})", p, kd, error);
    }
}

#[test]
fn test_round_trip_through_white_chamber() {
    for p in parameter_grid() {
        let (_, white, _) = forward(&p);
        let kd = kd_from_lwhite(white, p.t0, p.l0, p.redvol, p.whitevol, p.pc);

        let error = relative_error(kd, p.kd);
        assert!(error < ROUND_TRIP_TOLERANCE, "{:?}: recovered {} (error {:e})", p, kd, error);
    }
}

#[test]
fn test_round_trip_through_pt() {
    for p in parameter_grid() {
        let (_, _, pt) = forward(&p);
        let kd = kd_from_pt(pt, p.t0, p.l0, p.redvol, p.whitevol, p.pc);

        let error = relative_error(kd, p.kd);
        assert!(error < ROUND_TRIP_TOLERANCE, "{:?}: recovered {} (error {:e})", p, kd, error);
    }
}

#[test]
fn test_mass_balance() {
    for p in parameter_grid() {
        let (red, white, _) = forward(&p);
        let recovered = red * p.redvol + white * p.whitevol;

        assert!(
            relative_error(recovered, p.loaded_ligand()) < 1e-12,
            "{:?}: {} != {}",
            p, recovered, p.loaded_ligand()
        );
    }
}

#[test]
fn test_pt_is_chamber_ratio() {
    for p in parameter_grid() {
        let (red, white, pt) = forward(&p);

        assert!(relative_error(pt, red / white) < 1e-12, "{:?}", p);
    }
}

#[test]
fn test_physical_bounds() {
    for p in parameter_grid() {
        let (red, white, pt) = forward(&p);

        assert!(red > 0.0 && white > 0.0, "{:?}", p);
        // red chamber cannot hold more than all loaded ligand
        assert!(red * p.redvol <= p.loaded_ligand() * (1.0 + 1e-12), "{:?}", p);
        // protein only ever adds ligand to the red chamber
        assert!(pt > p.pc, "{:?}: pt {} <= pc {}", p, pt, p.pc);
    }
}

#[test]
fn test_model_struct_round_trip() {
    for p in parameter_grid().into_iter().step_by(7) {
        let model = PartitionModel::new(p.t0, p.l0, p.redvol, p.whitevol, p.pc);

        assert!(relative_error(model.kd_from_red(model.red_concentration(p.kd)), p.kd) < ROUND_TRIP_TOLERANCE);
        assert!(relative_error(model.kd_from_white(model.white_concentration(p.kd)), p.kd) < ROUND_TRIP_TOLERANCE);
        assert!(relative_error(model.kd_from_pt(model.pt_value(p.kd)), p.kd) < ROUND_TRIP_TOLERANCE);
    }
}

#[test]
fn test_checked_round_trip() {
    for p in parameter_grid().into_iter().step_by(5) {
        let experiment = Experiment::new(DialysisSetup::new(p.t0, p.l0, p.redvol, p.whitevol, p.pc));

        let red = experiment.red_concentration(p.kd).unwrap();
        let white = experiment.white_concentration(p.kd).unwrap();
        let pt = experiment.pt_value(p.kd).unwrap();

        assert!(relative_error(experiment.kd_from_red(red).unwrap(), p.kd) < ROUND_TRIP_TOLERANCE, "{:?}", p);
        assert!(relative_error(experiment.kd_from_white(white).unwrap(), p.kd) < ROUND_TRIP_TOLERANCE, "{:?}", p);
        assert!(relative_error(experiment.kd_from_pt(pt).unwrap(), p.kd) < ROUND_TRIP_TOLERANCE, "{:?}", p);
    }
}
