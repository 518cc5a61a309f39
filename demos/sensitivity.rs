//! Example: Sensitivity of Observables and Kd
//!
//! Uses forward-mode differentiation ([`Dual`]) to show how strongly each
//! observable responds to Kd, and how strongly a derived Kd responds to an
//! error in each observable. Large `dKd/dobs` values mark regimes in which
//! a measurement carries little information about Kd.

use qud_rs::models::{
    concentration_in_red, concentration_in_white, kd_from_lred, kd_from_lwhite, kd_from_pt,
    pt_value,
};
use qud_rs::physics::Dual;

fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn main() {
    env_logger::init();

    let (t0, l0, redvol, whitevol, pc) = (80.0, 50.0, 100.0, 300.0, 1.0);
    let c = Dual::constant;

    print_section("Observables with respect to Kd");
    println!("{:>10} {:>14} {:>14} {:>14}", "Kd", "dlred/dKd", "dlwhite/dKd", "dPt/dKd");

    let kd_values = [1.0, 10.0, 100.0, 500.0, 1000.0, 10000.0];
    for kd in kd_values {
        let k = Dual::var(kd);
        let red = concentration_in_red(c(t0), c(l0), k, c(redvol), c(whitevol), c(pc));
        let white = concentration_in_white(c(t0), c(l0), k, c(redvol), c(whitevol), c(pc));
        let pt = pt_value(c(t0), c(l0), k, c(redvol), c(whitevol), c(pc));

        println!("{:>10} {:>14.4e} {:>14.4e} {:>14.4e}", kd, red.dot, white.dot, pt.dot);
    }

    print_section("Kd with respect to each observable");
    println!("{:>10} {:>14} {:>14} {:>14}", "Kd", "dKd/dlred", "dKd/dlwhite", "dKd/dPt");

    for kd in kd_values {
        let red = concentration_in_red(t0, l0, kd, redvol, whitevol, pc);
        let white = concentration_in_white(t0, l0, kd, redvol, whitevol, pc);
        let pt = pt_value(t0, l0, kd, redvol, whitevol, pc);

        let by_red = kd_from_lred(Dual::var(red), c(t0), c(l0), c(redvol), c(whitevol), c(pc));
        let by_white = kd_from_lwhite(Dual::var(white), c(t0), c(l0), c(redvol), c(whitevol), c(pc));
        let by_pt = kd_from_pt(Dual::var(pt), c(t0), c(l0), c(redvol), c(whitevol), c(pc));

        println!("{:>10} {:>14.4e} {:>14.4e} {:>14.4e}", kd, by_red.dot, by_white.dot, by_pt.dot);
    }
}
