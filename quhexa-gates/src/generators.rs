//! Elementary single-hexit operators
//!
//! Stateless builders for the 6×6 generators the composite gates are made
//! of: the identity, the 0↔i basis swaps, powers of the cyclic shift, and
//! the 6-point discrete Fourier transform.

use num_complex::Complex64;
use quhexa_core::{GateError, Result, LEVELS};
use std::f64::consts::PI;

use crate::matrices::IDENTITY;
use crate::matrix_ops::matrix_to_vec;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 6×6 identity as a flattened matrix
pub fn identity() -> Vec<Complex64> {
    matrix_to_vec(&IDENTITY)
}

/// Permutation matrix swapping basis states `0` and `i`, identity elsewhere
///
/// The result is symmetric and its own inverse, and acts as the identity on
/// every state outside `{0, i}`.
///
/// # Errors
/// Returns [`GateError::InvalidArgument`] unless `i` is in `1..=5`; swapping
/// level 0 with itself is not a member of this family.
///
/// # Example
/// ```
/// use quhexa_gates::generators::bit_swap;
///
/// let x03 = bit_swap(3).unwrap();
/// assert_eq!(x03[0 * 6 + 3].re, 1.0);
/// assert!(bit_swap(0).is_err());
/// ```
pub fn bit_swap(i: usize) -> Result<Vec<Complex64>> {
    if i == 0 || i >= LEVELS {
        return Err(GateError::invalid_swap_index(i));
    }
    let mut m = identity();
    m[0] = ZERO;
    m[i * LEVELS + i] = ZERO;
    m[i] = ONE;
    m[i * LEVELS] = ONE;
    Ok(m)
}

/// `j`-th power of the cyclic shift generator, in closed form
///
/// Entry `[r][c]` is one exactly when `c = (r + j) mod 6`, so the operator
/// maps `|c⟩` to `|c−j mod 6⟩`. Agrees entry-for-entry with repeated
/// multiplication of [`crate::matrices::CYCLIC_SHIFT`]; since the shift has
/// order 6, `j` is reduced modulo 6 and `shift_power(0)` is the identity.
pub fn shift_power(j: usize) -> Vec<Complex64> {
    let j = j % LEVELS;
    let mut m = vec![ZERO; LEVELS * LEVELS];
    for r in 0..LEVELS {
        m[r * LEVELS + (r + j) % LEVELS] = ONE;
    }
    m
}

/// 6-point discrete Fourier transform matrix
///
/// `F[r,c] = ω^{r·c}` with `ω = e^{−2πi/6}`. The matrix is symmetric and
/// left unscaled, so `F F† = 6 I`; divide by √6 for the unitary
/// normalization.
pub fn fourier() -> Vec<Complex64> {
    let omega = Complex64::from_polar(1.0, -2.0 * PI / LEVELS as f64);
    let mut m = vec![ZERO; LEVELS * LEVELS];
    for r in 0..LEVELS {
        for c in 0..LEVELS {
            m[r * LEVELS + c] = omega.powu((r * c) as u32);
        }
    }
    m
}
