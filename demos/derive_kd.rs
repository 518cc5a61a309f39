//! Example: Deriving Kd from Measurements
//!
//! Recovers Kd from each kind of observable: red chamber concentration,
//! white chamber concentration and Pt. Each derivation is shown once with a
//! plain value and once with a measurement uncertainty (mean ± standard
//! deviation), propagated to first order through the same formula.
//!
//! Measurement and control uncertainties occupy separate slots of
//! [`Uncertain`], so they are treated as independent.

use qud_rs::models::{kd_from_lred, kd_from_lwhite, kd_from_pt};
use qud_rs::physics::Uncertain;
use qud_rs::solver::{DialysisSetup, Experiment};

/// Slot of the measured observable
const MEASUREMENT: usize = 0;
/// Slot of the control partition coefficient
const CONTROL: usize = 1;

type Value = Uncertain<2>;

fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let t0 = 80.0;
    let l0 = 50.0;
    let redvol = 100.0;
    let whitevol = 300.0;

    let x = Value::exact;
    let setup = DialysisSetup::equilibrating(t0, l0, redvol, whitevol);
    let experiment = Experiment::new(setup);

    // ====== Red chamber ======

    print_section("Kd from the red chamber concentration");
    let lred = Value::measured(MEASUREMENT, 62.32, 0.5);
    println!("lred = {lred:.2}");
    println!("Kd   = {:.4}", experiment.kd_from_red(lred.mean())?);
    println!(
        "Kd   = {:.2}",
        kd_from_lred(lred, x(t0), x(l0), x(redvol), x(whitevol), x(1.0))
    );

    // ====== White chamber ======

    print_section("Kd from the white chamber concentration");
    let lwhite = Value::measured(MEASUREMENT, 39.2, 0.4);
    println!("lwhite = {lwhite:.2}");
    println!("Kd     = {:.4}", experiment.kd_from_white(lwhite.mean())?);
    println!(
        "Kd     = {:.2}",
        kd_from_lwhite(lwhite, x(t0), x(l0), x(redvol), x(whitevol), x(1.0))
    );

    // ====== Pt with an uncertain control ======

    print_section("Kd from Pt with an uncertain control");
    let pt = Value::measured(MEASUREMENT, 1.21, 0.0082);
    let pc = Value::measured(CONTROL, 1.0133, 0.0047);
    println!("Pt = {pt:.4}");
    println!("Pc = {pc:.4}");

    let corrected = Experiment::new(setup.with_partition(pc.mean()));
    println!("Kd = {:.4}", corrected.kd_from_pt(pt.mean())?);

    let kd = kd_from_pt(pt, x(t0), x(l0), x(redvol), x(whitevol), pc);
    println!("Kd = {kd:.2}");
    println!("  from Pt : ± {:.2}", kd.contribution(MEASUREMENT).abs());
    println!("  from Pc : ± {:.2}", kd.contribution(CONTROL).abs());

    Ok(())
}
