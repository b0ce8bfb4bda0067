//! Dense complex matrix operations for hexit gates
//!
//! All matrices in this workspace are square, stored as flattened
//! `Vec<Complex64>` in row-major order. This module provides the small set
//! of linear-algebra primitives the gate builders are assembled from:
//! tensor products, multiplication, adjoints, integer matrix powers, and
//! unitarity/hermiticity checks.
//!
//! # Example
//!
//! ```rust
//! use quhexa_gates::matrix_ops::{identity_matrix, is_unitary, tensor_product};
//!
//! let eye6 = identity_matrix(6);
//! let eye36 = tensor_product(&eye6, &eye6);
//! assert_eq!(eye36.len(), 36 * 36);
//! assert!(is_unitary(&eye36, 1e-10));
//! ```

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Side length of a flattened square matrix
///
/// # Panics
/// Panics if the slice length is not a perfect square.
fn side(matrix: &[Complex64]) -> usize {
    let n = (matrix.len() as f64).sqrt() as usize;
    assert_eq!(n * n, matrix.len(), "Matrix must be square");
    n
}

/// Compute the tensor (Kronecker) product of two square matrices
///
/// For A (m×m) and B (n×n), the result A ⊗ B is (mn)×(mn). Operand order
/// matters: the left operand indexes the coarse blocks, so A acts on the
/// outer subsystem and B on the inner one.
pub fn tensor_product(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n_a = side(a);
    let n_b = side(b);
    let n = n_a * n_b;
    let mut result = vec![ZERO; n * n];

    for i in 0..n_a {
        for j in 0..n_a {
            let a_ij = a[i * n_a + j];
            if a_ij == ZERO {
                continue;
            }
            for k in 0..n_b {
                for l in 0..n_b {
                    result[(i * n_b + k) * n + (j * n_b + l)] = a_ij * b[k * n_b + l];
                }
            }
        }
    }

    result
}

/// Multiply two square matrices of the same dimension
pub fn matrix_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n = side(a);
    assert_eq!(b.len(), a.len(), "Matrix dimensions must agree");

    let mut result = vec![ZERO; n * n];
    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i * n + k];
            if a_ik == ZERO {
                continue;
            }
            for j in 0..n {
                result[i * n + j] += a_ik * b[k * n + j];
            }
        }
    }
    result
}

/// Compute the adjoint (Hermitian conjugate) A† where (A†)ᵢⱼ = (Aⱼᵢ)*
pub fn matrix_adjoint(matrix: &[Complex64]) -> Vec<Complex64> {
    let n = side(matrix);
    let mut result = vec![ZERO; n * n];
    for i in 0..n {
        for j in 0..n {
            result[i * n + j] = matrix[j * n + i].conj();
        }
    }
    result
}

/// Raise a square matrix to a non-negative integer power
///
/// Uses exponentiation by squaring; `matrix_power(m, 0)` is the identity of
/// matching dimension. For 0/1-valued permutation matrices the result is
/// entry-for-entry exact, with no accumulated rounding.
pub fn matrix_power(matrix: &[Complex64], exponent: usize) -> Vec<Complex64> {
    let n = side(matrix);
    let mut result = identity_matrix(n);
    let mut base = matrix.to_vec();
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = matrix_multiply(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = matrix_multiply(&base, &base);
        }
    }
    result
}

/// Create an identity matrix of the given side length
pub fn identity_matrix(size: usize) -> Vec<Complex64> {
    let mut matrix = vec![ZERO; size * size];
    for i in 0..size {
        matrix[i * size + i] = Complex64::new(1.0, 0.0);
    }
    matrix
}

/// Check whether a matrix is unitary (U†U = I) within `tolerance`
pub fn is_unitary(matrix: &[Complex64], tolerance: f64) -> bool {
    let n = side(matrix);
    let u_dagger_u = matrix_multiply(&matrix_adjoint(matrix), matrix);

    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            if (u_dagger_u[i * n + j] - expected).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check whether a matrix is Hermitian (A = A†) within `tolerance`
pub fn is_hermitian(matrix: &[Complex64], tolerance: f64) -> bool {
    let n = side(matrix);
    for i in 0..n {
        for j in 0..n {
            if (matrix[i * n + j] - matrix[j * n + i].conj()).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Convert a matrix from 2D constant array form to a flattened vector
pub fn matrix_to_vec<const N: usize>(matrix: &[[Complex64; N]; N]) -> Vec<Complex64> {
    matrix.iter().flatten().copied().collect()
}
