//! # numerus-core
//!
//! A library for converting non-negative integers to and from Roman-style
//! numerals generalized to an arbitrary base.
//!
//! In classical Roman numerals I = 1, V = 5, X = 10 and so on. Generalized to
//! a base `b`, the seven digits become I = 1, V = ceil(b/2), X = b,
//! L = ceil(b²/2), C = b², D = ceil(b³/2), M = b³, with the six subtractive
//! tokens (IV, IX, XL, XC, CD, CM) derived alongside. Base 10 reproduces the
//! classical system exactly; base 16 gives the "hex Roman" assignment where
//! I = 1, V = 8, X = 16, L = 128, C = 256, D = 2048, M = 4096.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - [`codec`]: value-table derivation and the conversion algorithms
//! - [`error`]: error types and handling
//!
//! ## Example
//!
//! ```
//! use numerus_core::NumeralCodec;
//!
//! let classical = NumeralCodec::new(10)?;
//! assert_eq!(classical.encode(14)?, "XIV");
//! assert_eq!(classical.decode("MMXXVI")?, 2026);
//!
//! let hex = NumeralCodec::new(16)?;
//! assert_eq!(hex.encode(12)?, "VIIII");
//! assert_eq!(hex.decode("IX")?, 15);
//! # Ok::<(), numerus_core::Error>(())
//! ```
//!
//! ## Valid Range
//!
//! A codec for base `b` encodes values from 1 up to `4 * b³` inclusive, the
//! practical maximum of the notation without an overline-style extension.
//! Bases run from [`MIN_BASE`] (7, below which the subtractive tokens break
//! the table ordering) up to [`MAX_BASE`] (the largest base whose range still
//! fits in a `u64`).

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod codec;
pub mod error;

// Re-export primary types for convenience
pub use codec::{
    decode, encode, is_valid_alphabet, NumeralCodec, TableEntry, ValueTable, ALPHABET, MAX_BASE,
    MIN_BASE,
};
pub use error::{Error, Result};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
