//! Error handling for field arithmetic
//!
//! Every failure in this crate is synchronous and detectable from the
//! inputs alone; operations never recover internally. Errors carry enough
//! context to identify the failing boundary without allocating.

use core::fmt;

use crate::field::Backend;

/// The error type for GF(2^8) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Element construction from a value outside the field's range
    Range {
        /// The rejected value
        value: u16,
    },

    /// Division or inversion with the zero element or zero polynomial
    DivisionByZero {
        /// Operation that encountered the zero divisor
        operation: &'static str,
    },

    /// Arithmetic between elements built on different backends
    Mismatch {
        /// Backend of the left-hand operand
        left: Backend,
        /// Backend of the right-hand operand
        right: Backend,
    },
}

/// Result type for GF(2^8) operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range { value } => {
                write!(f, "{} is not in the field range 0..256", value)
            }
            Error::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            Error::Mismatch { left, right } => {
                write!(f, "Backend mismatch: {:?} vs {:?}", left, right)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
