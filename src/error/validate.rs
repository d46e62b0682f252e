//! Validation utilities for field arithmetic

use super::{Error, Result};
use crate::field::Backend;

/// Validate that a candidate value fits in the field's range
#[inline(always)]
pub fn in_range(value: u16) -> Result<()> {
    if value >= 256 {
        return Err(Error::Range { value });
    }
    Ok(())
}

/// Validate that a divisor or inversion argument is nonzero
#[inline(always)]
pub fn nonzero(value: u32, operation: &'static str) -> Result<()> {
    if value == 0 {
        return Err(Error::DivisionByZero { operation });
    }
    Ok(())
}

/// Validate that two operands were built on the same backend
#[inline(always)]
pub fn same_backend(left: Backend, right: Backend) -> Result<()> {
    if left != right {
        return Err(Error::Mismatch { left, right });
    }
    Ok(())
}
