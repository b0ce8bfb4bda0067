//! Controlled-gate builders on the fixed four-register space
//!
//! Every builder here has the same shape: a sum over the six control levels
//! of a level projector tensored with a per-level target operator. The
//! projectors are mutually orthogonal and partition the identity, so each
//! term contributes a unitary block on its own subspace and the summed gate
//! is unitary whenever the per-level operators are.
//!
//! All composite gates act on the full 1296-dimensional space of four
//! hexits and are returned as freshly allocated flattened matrices.
//!
//! # Example
//!
//! ```rust
//! use quhexa_core::{Register, SPACE_DIM};
//! use quhexa_gates::controlled::{controlled_phase, controlled_levelswap};
//! use std::f64::consts::PI;
//!
//! let cp = controlled_phase(1, &[0.0, PI, 0.0, 0.0, 0.0, 0.0]).unwrap();
//! assert_eq!(cp.len(), SPACE_DIM * SPACE_DIM);
//!
//! let cnot = controlled_levelswap(Register::R0, Register::R2).unwrap();
//! assert_eq!(cnot.len(), SPACE_DIM * SPACE_DIM);
//! ```

use num_complex::Complex64;
use quhexa_core::{GateError, Register, Result, LEVELS, NUM_REGISTERS, SPACE_DIM};

use crate::generators::{bit_swap, shift_power};
use crate::matrices::PROJECTORS;
use crate::matrix_ops::{identity_matrix, matrix_to_vec, tensor_product};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Tensor one operator per register into the full composite space
///
/// `ops` names at most one 6×6 operator per register; registers without an
/// entry get the identity. Operands are combined strictly in register order
/// ([`Register::R0`] outermost), and every builder goes through here, so the
/// ordering convention lives in exactly one place. A later entry for the
/// same register replaces an earlier one.
pub fn embed_on_registers(ops: &[(Register, &[Complex64])]) -> Vec<Complex64> {
    let eye = identity_matrix(LEVELS);
    let mut slots: [&[Complex64]; NUM_REGISTERS] = [&eye; NUM_REGISTERS];
    for &(register, op) in ops {
        slots[register.index()] = op;
    }

    let mut full = slots[0].to_vec();
    for slot in &slots[1..] {
        full = tensor_product(&full, slot);
    }
    full
}

/// Entry-wise accumulation of one projector term into the gate under construction
fn accumulate(gate: &mut [Complex64], term: &[Complex64]) {
    for (g, t) in gate.iter_mut().zip(term) {
        *g += *t;
    }
}

/// Controlled phase gate: register `r0` controls, register `r1` carries the phase
///
/// Builds `Ph = diag(e^{iθ_k})` from the six `phase_angles` and sums one
/// term per control level `j`: `P_j ⊗ Ph ⊗ I ⊗ I` when `j` equals
/// `control_level`, `P_j ⊗ I ⊗ I ⊗ I` otherwise. The result is the identity
/// outside the `control_level` subspace of `r0` and applies `Ph` on `r1`
/// within it.
///
/// # Errors
/// Returns [`GateError::InvalidArgument`] if `control_level` is outside
/// `0..=5` or `phase_angles` does not have exactly six entries.
pub fn controlled_phase(control_level: usize, phase_angles: &[f64]) -> Result<Vec<Complex64>> {
    if control_level >= LEVELS {
        return Err(GateError::invalid_level(control_level));
    }
    let ph = crate::phases::phase_gate(phase_angles)?;

    let mut gate = vec![ZERO; SPACE_DIM * SPACE_DIM];
    for (j, projector) in PROJECTORS.iter().enumerate() {
        let projector = matrix_to_vec(projector);
        let term = if j == control_level {
            embed_on_registers(&[
                (Register::R0, projector.as_slice()),
                (Register::R1, ph.as_slice()),
            ])
        } else {
            embed_on_registers(&[(Register::R0, projector.as_slice())])
        };
        accumulate(&mut gate, &term);
    }
    Ok(gate)
}

/// Level-dependent shift gate
///
/// The amount by which register `r1` is cyclically shifted equals the basis
/// level of register `r0`: the gate is `Σ_j P_j ⊗ X^j ⊗ I ⊗ I` where `X` is
/// the cyclic shift generator. `X^0 = X^6 = I`, so the five nontrivial
/// shifts exhaust the order-6 cyclic group.
pub fn level_dependent_power_swap() -> Vec<Complex64> {
    let mut gate = vec![ZERO; SPACE_DIM * SPACE_DIM];
    for (j, projector) in PROJECTORS.iter().enumerate() {
        let projector = matrix_to_vec(projector);
        let power = shift_power(j);
        let term = embed_on_registers(&[
            (Register::R0, projector.as_slice()),
            (Register::R1, power.as_slice()),
        ]);
        accumulate(&mut gate, &term);
    }
    gate
}

/// CNOT-like gate entangling a front register with a back register
///
/// Used to prepare correlated initial basis states. For each level
/// `i ∈ 1..=5` the gate places the level-`i` projector on the `target`
/// register and the 0↔i swap on the `control` register, identity on the
/// remaining two. At level 0 the contribution is only the level-0 projector
/// on the target register with identity everywhere else, so the control
/// register does not participate in that branch.
///
/// # Errors
/// Returns [`GateError::InvalidArgument`] unless `target` is `r0` or `r1`
/// and `control` is `r2` or `r3`.
pub fn controlled_levelswap(target: Register, control: Register) -> Result<Vec<Complex64>> {
    let target_ok = matches!(target, Register::R0 | Register::R1);
    let control_ok = matches!(control, Register::R2 | Register::R3);
    if !target_ok || !control_ok {
        return Err(GateError::invalid_register_pair(target, control));
    }

    let mut gate = vec![ZERO; SPACE_DIM * SPACE_DIM];
    for (i, projector) in PROJECTORS.iter().enumerate() {
        let projector = matrix_to_vec(projector);
        let term = if i == 0 {
            embed_on_registers(&[(target, projector.as_slice())])
        } else {
            let swap = bit_swap(i)?;
            embed_on_registers(&[(target, projector.as_slice()), (control, swap.as_slice())])
        };
        accumulate(&mut gate, &term);
    }
    Ok(gate)
}
