//! Register addressing for the fixed four-hexit composite space

use std::fmt;

/// One of the four hexit registers of the composite space.
///
/// The composite Hilbert space is a fixed ordered tuple of four 6-level
/// subsystems. Ordering is significant: operators are combined by tensor
/// product in register order, with `R0` outermost and `R3` innermost, and
/// every composite builder relies on that convention. Using a closed enum
/// instead of raw integers keeps out-of-range register selectors
/// unrepresentable.
///
/// # Example
/// ```
/// use quhexa_core::Register;
///
/// let control = Register::R2;
/// assert_eq!(control.index(), 2);
/// assert!(Register::R0 < control);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Register {
    /// Outermost register (leftmost tensor factor)
    R0,
    /// Second register
    R1,
    /// Third register
    R2,
    /// Innermost register (rightmost tensor factor)
    R3,
}

impl Register {
    /// All registers in tensor-product order.
    pub const ALL: [Register; 4] = [Register::R0, Register::R1, Register::R2, Register::R3];

    /// Position of this register in the tensor-product order.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Register::R0 => 0,
            Register::R1 => 1,
            Register::R2 => 2,
            Register::R3 => 3,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.index())
    }
}
