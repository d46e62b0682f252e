//! Scalar arithmetic in the Galois field GF(2^8)
//!
//! This crate implements the 256-element binary field used as the byte
//! arithmetic substrate of AES-style constructions and error-correcting
//! codes. Elements are degree-<8 polynomials over GF(2), packed into a
//! byte, with multiplication reduced modulo `x^8 + x^4 + x^3 + x + 1`.
//!
//! Two interchangeable engines back every element:
//!
//! - [`Backend::Direct`] performs carry-less shift-and-reduce
//!   multiplication and extended-Euclidean inversion. Its multiply runs a
//!   fixed, branch-free 8-step loop regardless of operand values.
//! - [`Backend::Table`] performs discrete-logarithm table lookups for the
//!   generator 3; the tables are derived from the direct engine at compile
//!   time and live in read-only memory.
//!
//! The engines agree bit-for-bit on every input pair. The `accel` feature
//! swaps the multiply/divide primitives of both engines for table-driven
//! equivalents without changing the element-level API.
//!
//! # Usage
//!
//! ```
//! use gf256::{Backend, Gf256};
//!
//! let a = Gf256::new(0x57, Backend::Direct)?;
//! let b = Gf256::new(0x83, Backend::Direct)?;
//! assert_eq!(a.mul(b)?.value(), 0xC1);
//! # Ok::<(), gf256::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field element and arithmetic engines
pub mod field;
pub use field::{Backend, Gf256};
