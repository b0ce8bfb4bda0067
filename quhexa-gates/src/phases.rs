//! Phase scalars and the diagonal phase gate
//!
//! Callers parameterize controlled phase gates with plain angle lists; the
//! helpers here produce the root-of-unity scalars those lists are usually
//! built from.

use num_complex::Complex64;
use quhexa_core::{GateError, Result, LEVELS};
use std::f64::consts::PI;

/// Senary root-of-unity phase: `e^{2πi·angle/6}`
pub fn root6(angle: f64) -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * PI * angle / 6.0)
}

/// Ternary root-of-unity phase: `e^{2πi·angle/3}`
pub fn root3(angle: f64) -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * PI * angle / 3.0)
}

/// Diagonal phase gate `diag(e^{iθ_0}, …, e^{iθ_5})` from six phase angles
///
/// # Errors
/// Returns [`GateError::InvalidArgument`] if `angles` does not have exactly
/// six entries.
///
/// # Example
/// ```
/// use quhexa_gates::phases::phase_gate;
/// use std::f64::consts::PI;
///
/// let ph = phase_gate(&[0.0, PI, 0.0, 0.0, 0.0, 0.0]).unwrap();
/// assert!((ph[1 * 6 + 1].re + 1.0).abs() < 1e-12); // e^{iπ} = −1
/// ```
pub fn phase_gate(angles: &[f64]) -> Result<Vec<Complex64>> {
    if angles.len() != LEVELS {
        return Err(GateError::invalid_phase_count(angles.len()));
    }
    let mut m = vec![Complex64::new(0.0, 0.0); LEVELS * LEVELS];
    for (k, &theta) in angles.iter().enumerate() {
        m[k * LEVELS + k] = Complex64::from_polar(1.0, theta);
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_ops::is_unitary;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_root6_half_turn() {
        // Three sixths of a turn is e^{iπ} = −1
        let phase = root6(3.0);
        assert_relative_eq!(phase.re, -1.0, epsilon = EPSILON);
        assert_relative_eq!(phase.im, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_root6_full_turn() {
        let phase = root6(6.0);
        assert_relative_eq!(phase.re, 1.0, epsilon = EPSILON);
        assert_relative_eq!(phase.im, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_root3_matches_doubled_root6() {
        // e^{2πi·a/3} = e^{2πi·(2a)/6}
        for a in 0..6 {
            let lhs = root3(a as f64);
            let rhs = root6(2.0 * a as f64);
            assert_relative_eq!(lhs.re, rhs.re, epsilon = EPSILON);
            assert_relative_eq!(lhs.im, rhs.im, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_phase_gate_diagonal_and_unitary() {
        let angles = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let ph = phase_gate(&angles).unwrap();
        assert!(is_unitary(&ph, EPSILON));
        for r in 0..LEVELS {
            for c in 0..LEVELS {
                if r != c {
                    assert_eq!(ph[r * LEVELS + c], Complex64::new(0.0, 0.0));
                }
            }
        }
        for (k, &theta) in angles.iter().enumerate() {
            assert_relative_eq!(ph[k * LEVELS + k].re, theta.cos(), epsilon = EPSILON);
            assert_relative_eq!(ph[k * LEVELS + k].im, theta.sin(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_phase_gate_rejects_wrong_length() {
        assert!(matches!(
            phase_gate(&[0.0; 5]),
            Err(GateError::InvalidArgument(_))
        ));
        assert!(matches!(
            phase_gate(&[0.0; 7]),
            Err(GateError::InvalidArgument(_))
        ));
    }
}
