//! Build each hexit gate family and report basic diagnostics

use quhexa_core::{Register, SPACE_DIM};
use quhexa_gates::controlled::{
    controlled_levelswap, controlled_phase, level_dependent_power_swap,
};
use quhexa_gates::generators::fourier;
use quhexa_gates::matrix_ops::is_unitary;
use quhexa_gates::phases::root6;

fn main() {
    // Phase angles drawn from the senary roots of unity
    let angles: Vec<f64> = (0..6).map(|k| root6(k as f64).arg()).collect();

    let cp = controlled_phase(1, &angles).expect("valid control level and angle count");
    println!(
        "controlled_phase(1, ..):        {}x{}, nonzero entries: {}",
        SPACE_DIM,
        SPACE_DIM,
        cp.iter().filter(|z| z.norm() > 1e-12).count()
    );

    let p_gate = level_dependent_power_swap();
    println!(
        "level_dependent_power_swap():   {}x{}, nonzero entries: {}",
        SPACE_DIM,
        SPACE_DIM,
        p_gate.iter().filter(|z| z.norm() > 1e-12).count()
    );

    let cnot = controlled_levelswap(Register::R0, Register::R2).expect("valid register pair");
    println!(
        "controlled_levelswap(r0, r2):   {}x{}, nonzero entries: {}",
        SPACE_DIM,
        SPACE_DIM,
        cnot.iter().filter(|z| z.norm() > 1e-12).count()
    );

    let dft = fourier();
    let scale = 1.0 / 6f64.sqrt();
    let scaled: Vec<_> = dft.into_iter().map(|z| z * scale).collect();
    println!(
        "fourier() / sqrt(6) unitary:    {}",
        is_unitary(&scaled, 1e-9)
    );
}
