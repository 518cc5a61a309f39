//! Experimental parameter sets shared by the integration tests

/// One complete parameter set, Kd included
#[derive(Clone, Copy, Debug)]
pub struct Parameters {
    pub t0: f64,
    pub l0: f64,
    pub kd: f64,
    pub redvol: f64,
    pub whitevol: f64,
    pub pc: f64,
}

impl Parameters {
    pub fn with_pc(self, pc: f64) -> Self {
        Self { pc, ..self }
    }

    pub fn loaded_ligand(&self) -> f64 {
        self.l0 * (self.redvol + self.whitevol)
    }
}

/// Reference experiment: 80 target, 50 ligand, Kd 500, 100 red, 300 white
pub const REFERENCE: Parameters = Parameters {
    t0: 80.0,
    l0: 50.0,
    kd: 500.0,
    redvol: 100.0,
    whitevol: 300.0,
    pc: 1.0,
};

/// Deterministic grid over moderate, physically plausible parameters
pub fn parameter_grid() -> Vec<Parameters> {
    let mut grid = Vec::new();

    for t0 in [1.0, 20.0, 80.0, 200.0] {
        for l0 in [1.0, 50.0, 200.0] {
            for kd in [1.0, 10.0, 100.0, 500.0, 2000.0] {
                for (redvol, whitevol) in [(100.0, 300.0), (10.0, 500.0), (500.0, 10.0), (250.0, 250.0)] {
                    for pc in [0.5, 1.0, 1.2, 2.0] {
                        grid.push(Parameters { t0, l0, kd, redvol, whitevol, pc });
                    }
                }
            }
        }
    }

    grid
}
