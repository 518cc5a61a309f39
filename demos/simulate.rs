//! Example: Simulating a Microdialysis Experiment
//!
//! Forward evaluation of one setup, first with a perfectly equilibrating
//! compound (Pc = 1.0), then with one that favours the red chamber even
//! without protein (Pc = 1.2), followed by the inverse Pt → Kd direction.
//!
//! All concentrations share one unit (µM here) and both volumes share one
//! unit (µL); the equations are unit-agnostic within those constraints.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example simulate
//! ```

use qud_rs::solver::{DialysisSetup, Experiment};

fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn print_forward(experiment: &Experiment, kd: f64) -> qud_rs::error::Result<()> {
    println!("Red chamber concentration   : {:.4}", experiment.red_concentration(kd)?);
    println!("White chamber concentration : {:.4}", experiment.white_concentration(kd)?);
    println!("Pt value                    : {:.4}", experiment.pt_value(kd)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ====== Experimental parameters ======

    let t0 = 80.0;          // Target concentration in the red chamber
    let l0 = 50.0;          // Ligand concentration over both chambers
    let kd = 500.0;         // Dissociation constant
    let redvol = 100.0;     // Red chamber volume
    let whitevol = 300.0;   // White chamber volume

    println!("Parameters:");
    println!("  t0       : {t0}");
    println!("  l0       : {l0}");
    println!("  Kd       : {kd}");
    println!("  redvol   : {redvol}");
    println!("  whitevol : {whitevol}");

    let setup = DialysisSetup::equilibrating(t0, l0, redvol, whitevol);

    print_section("Perfectly equilibrating compound (Pc = 1.0)");
    print_forward(&Experiment::new(setup), kd)?;

    print_section("Poorly equilibrating compound (Pc = 1.2)");
    print_forward(&Experiment::new(setup.with_partition(1.2)), kd)?;

    print_section("Pt value to Kd");
    let observed = Experiment::new(setup.with_partition(1.08));
    let pt = 1.43;
    println!("Pc = {}, Pt = {}", observed.setup.pc, pt);
    println!("Kd = {:.4}", observed.kd_from_pt(pt)?);

    Ok(())
}
