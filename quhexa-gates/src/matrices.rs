//! Compile-time constant 6×6 matrices
//!
//! This module provides the constant single-hexit matrices every gate
//! builder shares: the identity, the six level projectors, and the cyclic
//! shift generator. All are computed at compile time by `const fn` and
//! embedded in the binary, so they are shared read-only across all call
//! sites and threads without synchronization.

use num_complex::Complex64;
use quhexa_core::LEVELS;

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 6×6 identity matrix
pub const IDENTITY: [[Complex64; LEVELS]; LEVELS] = build_identity();

/// Level projectors `P_0..P_5`
///
/// `PROJECTORS[j]` is the outer product `|j⟩⟨j|`: a rank-1 Hermitian
/// idempotent with a single one at position `(j, j)`. The projectors are
/// mutually orthogonal and sum to [`IDENTITY`], which is what makes every
/// controlled builder unitary term by term.
pub const PROJECTORS: [[[Complex64; LEVELS]; LEVELS]; LEVELS] = build_projectors();

/// Cyclic shift generator
///
/// Ones on the superdiagonal plus the lower-left corner, mapping basis state
/// `|c⟩` to `|c−1 mod 6⟩`. Its powers realize the level-dependent shifts of
/// the power-swap builder; the generator has order 6.
pub const CYCLIC_SHIFT: [[Complex64; LEVELS]; LEVELS] = build_cyclic_shift();

const fn build_identity() -> [[Complex64; LEVELS]; LEVELS] {
    let mut m = [[ZERO; LEVELS]; LEVELS];
    let mut i = 0;
    while i < LEVELS {
        m[i][i] = ONE;
        i += 1;
    }
    m
}

const fn build_projectors() -> [[[Complex64; LEVELS]; LEVELS]; LEVELS] {
    let mut ps = [[[ZERO; LEVELS]; LEVELS]; LEVELS];
    let mut j = 0;
    while j < LEVELS {
        ps[j][j][j] = ONE;
        j += 1;
    }
    ps
}

const fn build_cyclic_shift() -> [[Complex64; LEVELS]; LEVELS] {
    let mut m = [[ZERO; LEVELS]; LEVELS];
    let mut r = 0;
    while r < LEVELS {
        m[r][(r + 1) % LEVELS] = ONE;
        r += 1;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectors_partition_identity() {
        // Σ_j P_j = I, exactly (integer-valued construction)
        for r in 0..LEVELS {
            for c in 0..LEVELS {
                let mut sum = ZERO;
                for j in 0..LEVELS {
                    sum += PROJECTORS[j][r][c];
                }
                assert_eq!(sum, IDENTITY[r][c]);
            }
        }
    }

    #[test]
    fn test_projectors_orthogonal_idempotents() {
        // P_j · P_k = P_j when j == k, zero otherwise
        for j in 0..LEVELS {
            for k in 0..LEVELS {
                for r in 0..LEVELS {
                    for c in 0..LEVELS {
                        let mut entry = ZERO;
                        for m in 0..LEVELS {
                            entry += PROJECTORS[j][r][m] * PROJECTORS[k][m][c];
                        }
                        let expected = if j == k { PROJECTORS[j][r][c] } else { ZERO };
                        assert_eq!(entry, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cyclic_shift_is_permutation() {
        // Exactly one 1 per row and per column
        for r in 0..LEVELS {
            let row_ones = (0..LEVELS).filter(|&c| CYCLIC_SHIFT[r][c] == ONE).count();
            let col_ones = (0..LEVELS).filter(|&c| CYCLIC_SHIFT[c][r] == ONE).count();
            assert_eq!(row_ones, 1);
            assert_eq!(col_ones, 1);
        }
    }

    #[test]
    fn test_cyclic_shift_decrements_levels() {
        // Column c carries its 1 at row (c - 1) mod 6: |c⟩ → |c−1 mod 6⟩
        for c in 0..LEVELS {
            let target = (c + LEVELS - 1) % LEVELS;
            assert_eq!(CYCLIC_SHIFT[target][c], ONE);
        }
    }
}
