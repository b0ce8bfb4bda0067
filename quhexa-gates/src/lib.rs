//! Hexit gate-construction algebra
//!
//! This crate builds unitary matrices for quantum logic gates on composite
//! systems of four hexits (6-level subsystems), giving a fixed
//! 1296-dimensional space. It provides:
//!
//! - **Constant matrices**: identity, level projectors, and the cyclic shift
//!   generator, computed at compile time
//! - **Elementary generators**: 0↔i basis swaps, shift powers, and the
//!   6-point discrete Fourier transform
//! - **Controlled builders**: composite gates summing per-level projectors
//!   against per-level target operators across the fixed register layout
//! - **Phase helpers**: root-of-unity scalars and the diagonal phase gate
//!
//! Every builder is a pure function returning a freshly computed flattened
//! row-major matrix; nothing is mutated after construction, so concurrent
//! use needs no locking.
//!
//! # Examples
//!
//! ```
//! use quhexa_core::Register;
//! use quhexa_gates::controlled::{controlled_phase, level_dependent_power_swap};
//! use quhexa_gates::generators::{bit_swap, fourier};
//! use quhexa_gates::phases::root6;
//!
//! // A phase gate on r1 firing when r0 reads level 1
//! let angles = [0.0, root6(3.0).arg(), 0.0, 0.0, 0.0, 0.0];
//! let cp = controlled_phase(1, &angles).unwrap();
//!
//! // The level-dependent shift gate needs no parameters
//! let p_gate = level_dependent_power_swap();
//!
//! // Elementary 6×6 generators
//! let x05 = bit_swap(5).unwrap();
//! let dft = fourier();
//! # assert_eq!(x05.len(), 36);
//! # assert_eq!(dft.len(), 36);
//! # assert_eq!(cp.len(), p_gate.len());
//! ```

pub mod controlled;
pub mod generators;
pub mod matrices;
pub mod matrix_ops;
pub mod phases;

// Re-export commonly used items
pub use controlled::{
    controlled_levelswap, controlled_phase, embed_on_registers, level_dependent_power_swap,
};
pub use generators::{bit_swap, fourier, identity, shift_power};
pub use phases::{phase_gate, root3, root6};
