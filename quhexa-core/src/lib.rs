//! Core types for the quhexa hexit gate workspace
//!
//! A hexit is a 6-level quantum subsystem with basis states indexed `0..=5`.
//! This crate provides the fundamental types shared by the gate builders:
//! - [`Register`]: Type-safe addressing of the four hexit registers
//! - [`GateError`]: The error taxonomy for caller-input contract violations
//! - Dimension constants for the fixed composite space
//!
//! # Example
//! ```
//! use quhexa_core::{Register, LEVELS, SPACE_DIM};
//!
//! assert_eq!(Register::R2.index(), 2);
//! assert_eq!(SPACE_DIM, LEVELS.pow(4));
//! ```

pub mod error;
pub mod register;

// Re-exports for convenience
pub use error::GateError;
pub use num_complex::Complex64;
pub use register::Register;

/// Number of levels in a single hexit.
pub const LEVELS: usize = 6;

/// Number of hexit registers in the fixed composite space.
pub const NUM_REGISTERS: usize = 4;

/// Dimension of the composite Hilbert space, `6^4`.
pub const SPACE_DIM: usize = LEVELS * LEVELS * LEVELS * LEVELS;

/// Type alias for results in quhexa
pub type Result<T> = std::result::Result<T, GateError>;
