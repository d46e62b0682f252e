//! GF(2^8) field elements and their arithmetic engines
//!
//! [`Gf256`] wraps an 8-bit coefficient vector together with a [`Backend`]
//! tag naming the engine that backs its multiply and invert primitives.
//! Addition, subtraction, division, and exponentiation are derived from
//! those primitives uniformly, so the two engines are interchangeable
//! behind the same element API and agree on every input pair.

use core::fmt;
use core::hash::{Hash, Hasher};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Result};

pub(crate) mod direct;
pub(crate) mod table;

#[cfg(feature = "accel")]
pub mod accel;

#[cfg(feature = "alloc")]
use alloc::{format, string::String, string::ToString, vec::Vec};

/// Engine backing an element's multiply and invert primitives
///
/// Selected at construction time; arithmetic between elements carrying
/// different backends is rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Carry-less shift-and-reduce multiplication and extended-Euclidean
    /// inversion over polynomial bit-vectors
    Direct,
    /// Discrete-logarithm table lookups for the generator 3, with the
    /// tables derived from the direct engine at compile time
    Table,
}

/// An element of GF(2^8)
///
/// The wrapped byte is the coefficient vector of a degree-<8 polynomial
/// over GF(2), bit i holding the coefficient of x^i. Elements are
/// immutable value types; every operation returns a new element. Equality
/// and hashing are structural on the value alone, so two elements with
/// equal values compare equal even across backends.
#[derive(Clone, Copy)]
pub struct Gf256 {
    value: u8,
    backend: Backend,
}

impl Gf256 {
    /// Create an element from an integer in [0, 256)
    ///
    /// Fails with [`Error::Range`](crate::Error::Range) for anything
    /// outside the field.
    pub fn new(n: u16, backend: Backend) -> Result<Self> {
        validate::in_range(n)?;
        Ok(Self {
            value: n as u8,
            backend,
        })
    }

    /// Create an element backed by the direct engine
    pub fn direct(n: u16) -> Result<Self> {
        Self::new(n, Backend::Direct)
    }

    /// Create an element backed by the table engine
    pub fn table(n: u16) -> Result<Self> {
        Self::new(n, Backend::Table)
    }

    /// The element's integer value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The engine backing this element
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Add another element
    ///
    /// Addition is coefficient-wise XOR.
    pub fn add(self, other: Self) -> Result<Self> {
        validate::same_backend(self.backend, other.backend)?;
        Ok(Self {
            value: self.value ^ other.value,
            backend: self.backend,
        })
    }

    /// Subtract another element
    ///
    /// Subtraction coincides with addition in characteristic 2.
    pub fn sub(self, other: Self) -> Result<Self> {
        self.add(other)
    }

    /// Multiply by another element
    pub fn mul(self, other: Self) -> Result<Self> {
        validate::same_backend(self.backend, other.backend)?;
        let product = match self.backend {
            Backend::Direct => direct_mul(self.value, other.value),
            Backend::Table => table_mul(self.value, other.value),
        };
        Ok(Self {
            value: product,
            backend: self.backend,
        })
    }

    /// Divide by another element
    ///
    /// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero)
    /// when the divisor is the zero element.
    pub fn div(self, other: Self) -> Result<Self> {
        validate::same_backend(self.backend, other.backend)?;
        validate::nonzero(other.value as u32, "div")?;
        let quotient = match self.backend {
            Backend::Direct => direct_div(self.value, other.value)?,
            Backend::Table => table_div(self.value, other.value)?,
        };
        Ok(Self {
            value: quotient,
            backend: self.backend,
        })
    }

    /// The multiplicative inverse of this element
    ///
    /// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero)
    /// for the zero element, which has no inverse.
    pub fn invert(self) -> Result<Self> {
        let inverse = match self.backend {
            Backend::Direct => direct::invert(self.value)?,
            Backend::Table => table::invert(self.value)?,
        };
        Ok(Self {
            value: inverse,
            backend: self.backend,
        })
    }

    /// Raise to the power of another element's integer value
    ///
    /// The exponent is read as a plain integer, not a field element, and
    /// the power is computed by repeated multiplication. The zeroth power
    /// is 1 for every base including zero, as the empty product.
    pub fn pow(self, exponent: Self) -> Result<Self> {
        validate::same_backend(self.backend, exponent.backend)?;
        let mut power = Self {
            value: 1,
            backend: self.backend,
        };
        for _ in 0..exponent.value {
            power = power.mul(self)?;
        }
        Ok(power)
    }

    /// Render the element as a polynomial in x, highest degree first
    ///
    /// ```
    /// # use gf256::Gf256;
    /// assert_eq!(Gf256::direct(0b00011011)?.to_polynomial_string(), "x**4 + x**3 + x + 1");
    /// # Ok::<(), gf256::Error>(())
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_polynomial_string(&self) -> String {
        let mut products: Vec<String> = (2..8)
            .rev()
            .filter(|exponent| (self.value >> exponent) & 1 == 1)
            .map(|exponent| format!("x**{}", exponent))
            .collect();
        if (self.value >> 1) & 1 == 1 {
            products.push("x".to_string());
        }
        if self.value & 1 == 1 || products.is_empty() {
            products.push((self.value & 1).to_string());
        }
        products.join(" + ")
    }
}

// Engine routing. The accel feature swaps the multiply/divide primitives
// of both engines and nothing else; invert and the element API above are
// unaffected.

#[cfg(not(feature = "accel"))]
#[inline(always)]
fn direct_mul(a: u8, b: u8) -> u8 {
    direct::mul(a, b)
}

#[cfg(feature = "accel")]
#[inline(always)]
fn direct_mul(a: u8, b: u8) -> u8 {
    accel::polymulmod(a as u32, b as u32, direct::POLYNOMIAL) as u8
}

#[cfg(not(feature = "accel"))]
#[inline(always)]
fn direct_div(a: u8, b: u8) -> Result<u8> {
    Ok(direct::mul(a, direct::invert(b)?))
}

#[cfg(feature = "accel")]
#[inline(always)]
fn direct_div(a: u8, b: u8) -> Result<u8> {
    Ok(accel::polydivmod(a as u32, b as u32, direct::POLYNOMIAL)? as u8)
}

#[cfg(not(feature = "accel"))]
#[inline(always)]
fn table_mul(a: u8, b: u8) -> u8 {
    table::mul(a, b)
}

#[cfg(feature = "accel")]
#[inline(always)]
fn table_mul(a: u8, b: u8) -> u8 {
    accel::polymulmodlt(a as u32, b as u32) as u8
}

#[cfg(not(feature = "accel"))]
#[inline(always)]
fn table_div(a: u8, b: u8) -> Result<u8> {
    Ok(table::mul(a, table::invert(b)?))
}

#[cfg(feature = "accel")]
#[inline(always)]
fn table_div(a: u8, b: u8) -> Result<u8> {
    Ok(accel::polydivmodlt(a as u32, b as u32)? as u8)
}

impl ConstantTimeEq for Gf256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value)
    }
}

impl PartialEq for Gf256 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Gf256 {}

impl Hash for Gf256 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.value);
    }
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf256(0b{:0>8b})", self.value)
    }
}

impl From<Gf256> for u8 {
    fn from(element: Gf256) -> u8 {
        element.value
    }
}

impl Zeroize for Gf256 {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}
