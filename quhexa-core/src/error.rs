//! Error types for quhexa

use crate::Register;
use thiserror::Error;

/// Errors that can occur when building hexit gates
///
/// Every failure in this workspace is a caller-input contract violation, so
/// the taxonomy is a single kind carrying a descriptive message. Builders
/// validate their arguments before allocating anything; no partial matrix is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    /// A level, swap index, register selector, or phase list failed validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GateError {
    /// Create an error for a control level outside `0..=5`
    pub fn invalid_level(level: usize) -> Self {
        Self::InvalidArgument(format!(
            "control level {level} is out of range: a hexit has levels 0..=5"
        ))
    }

    /// Create an error for a bit-swap index outside `1..=5`
    pub fn invalid_swap_index(index: usize) -> Self {
        Self::InvalidArgument(format!(
            "bit-swap index {index} is out of range: the 0↔i swap family requires i in 1..=5"
        ))
    }

    /// Create an error for a phase list whose length is not exactly 6
    pub fn invalid_phase_count(actual: usize) -> Self {
        Self::InvalidArgument(format!(
            "phase gate requires exactly 6 angles, but {actual} were provided"
        ))
    }

    /// Create an error for a target/control register pair outside
    /// target `{r0, r1}` / control `{r2, r3}`
    pub fn invalid_register_pair(target: Register, control: Register) -> Self {
        Self::InvalidArgument(format!(
            "register pair (target {target}, control {control}) is invalid: \
             target must be r0 or r1 and control must be r2 or r3"
        ))
    }
}
