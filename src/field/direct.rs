//! Direct polynomial-arithmetic engine
//!
//! Field elements are bit-vectors of polynomial coefficients over GF(2).
//! Multiplication is a carry-less shift-and-reduce loop against the
//! irreducible modulus; inversion runs the extended Euclidean algorithm
//! over polynomials.

use crate::error::{validate, Result};

/// The irreducible polynomial x^8 + x^4 + x^3 + x + 1 used as the
/// multiplication modulus, chosen for its use in AES
pub(crate) const POLYNOMIAL: u32 = 0x11B;

/// Carry-less product of two polynomials, without modular reduction
pub(crate) const fn polymul(a: u32, b: u32) -> u32 {
    let mut product = 0;
    let mut a = a;
    let mut b = b;
    while a != 0 {
        product ^= (a & 1) * b;
        b <<= 1;
        a >>= 1;
    }
    product
}

const fn bit_length(n: u32) -> u32 {
    32 - n.leading_zeros()
}

/// Euclidean quotient of two polynomials represented as bit-vectors
///
/// Each round clears the remainder's leading coefficient, so its bit
/// length strictly decreases and the loop terminates.
pub(crate) fn polydiv(dividend: u32, divisor: u32) -> Result<u32> {
    validate::nonzero(divisor, "polydiv")?;

    let mut quotient = 0;
    let mut remainder = dividend;
    while bit_length(remainder) >= bit_length(divisor) {
        // The monomial that, multiplied with the divisor, matches the
        // remainder's leading term
        let product = 1 << (bit_length(remainder) - bit_length(divisor));
        quotient ^= product;
        remainder ^= polymul(product, divisor);
    }
    Ok(quotient)
}

/// Multiply two field elements, reduced modulo [`POLYNOMIAL`]
///
/// Runs exactly 8 iterations with a branch-free accumulate mask; the
/// iteration count and operation sequence never depend on the operands.
pub(crate) const fn mul(a: u8, b: u8) -> u8 {
    let mut product = 0u32;
    let mut a = a as u32;
    let mut b = b as u32;
    let mut i = 0;
    while i < 8 {
        // mask = all-ones if the low bit of a is set
        let mask = (a & 1).wrapping_neg();
        product ^= b & mask;
        // Double b. On overflow past bit 7 both b<<1 and the modulus are
        // degree-8 polynomials, so a single subtraction reduces.
        b = (b << 1) ^ ((b >> 7) * POLYNOMIAL);
        a >>= 1;
        i += 1;
    }
    product as u8
}

/// Multiplicative inverse via the extended Euclidean algorithm
///
/// Tracks the Bezout coefficient of `a` against the irreducible modulus;
/// once the gcd reaches 1 that coefficient is the inverse. Intermediate
/// remainders exceed 8 bits, so the steps use the unreduced [`polymul`].
/// The iteration count depends on the operand's bit length; unlike
/// [`mul`] this path is not constant-time.
pub(crate) fn invert(a: u8) -> Result<u8> {
    validate::nonzero(a as u32, "invert")?;

    let (mut old_r, mut r) = (POLYNOMIAL, a as u32);
    let (mut old_t, mut t) = (0u32, 1u32);
    while r != 0 {
        let quotient = polydiv(old_r, r)?;
        let next_r = old_r ^ polymul(quotient, r);
        old_r = r;
        r = next_r;
        let next_t = old_t ^ polymul(quotient, t);
        old_t = t;
        t = next_t;
    }
    // old_r is the gcd; anything but 1 would mean the modulus is reducible
    debug_assert_eq!(old_r, 1, "gcd against the irreducible modulus must be 1");
    Ok((old_t & 0xFF) as u8)
}
