//! Logarithm-table engine
//!
//! Multiplication and inversion reduce to integer arithmetic on discrete
//! logarithms for the generator 3. Both tables are derived from the direct
//! engine's multiply in const context, so they are read-only for the
//! lifetime of the process and no initialization guard is needed.

use crate::error::{validate, Result};

use super::direct;

/// Generator of the multiplicative group, kept as a plain integer
pub(crate) const GENERATOR: u8 = 3;

/// `EXP[i]` = generator^i under the direct engine's multiplication
pub(crate) const EXP: [u8; 255] = {
    let mut exp = [0u8; 255];
    let mut x = 1u8;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        x = direct::mul(x, GENERATOR);
        i += 1;
    }
    exp
};

/// `LOG[v - 1]` = i such that `EXP[i]` = v, for every nonzero v
pub(crate) const LOG: [u8; 255] = {
    let mut log = [0u8; 255];
    let mut i = 0;
    while i < 255 {
        log[(EXP[i] - 1) as usize] = i as u8;
        i += 1;
    }
    log
};

/// Multiply by adding discrete logarithms modulo the group order
pub(crate) const fn mul(a: u8, b: u8) -> u8 {
    // zero has no logarithm
    if a == 0 || b == 0 {
        return 0;
    }
    let index = (LOG[(a - 1) as usize] as usize + LOG[(b - 1) as usize] as usize) % 255;
    EXP[index]
}

/// Invert by negating the discrete logarithm modulo the group order
pub(crate) fn invert(a: u8) -> Result<u8> {
    validate::nonzero(a as u32, "invert")?;
    Ok(EXP[(255 - LOG[(a - 1) as usize] as usize) % 255])
}
