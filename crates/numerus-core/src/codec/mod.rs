//! Integer/numeral conversion for an arbitrary base.
//!
//! This module implements the bidirectional conversion between integers and
//! Roman-style numeral strings over a derived value table.
//!
//! ## Algorithm Overview
//!
//! Encoding is a greedy decomposition: walk the table from the largest
//! magnitude down, emitting each symbol as many times as its magnitude still
//! fits into the remainder. The `I = 1` tail row guarantees the remainder
//! reaches exactly zero for any value in range.
//!
//! Decoding is the mirror image: a single pass over the same table with a
//! cursor into the input. Single-character symbols are consumed repeatedly,
//! two-character subtractive tokens at most once. Anything left unconsumed
//! after the pass means the input was out of order or not a numeral at all,
//! so the one mechanism also serves as the structural validator.

mod table;

use crate::error::{Error, Result};
use tracing::trace;

pub use table::{is_valid_alphabet, TableEntry, ValueTable, ALPHABET, MAX_BASE, MIN_BASE};

/// Bidirectional integer/numeral converter for one base.
///
/// The value table is derived once at construction; the codec is immutable
/// afterwards and safe to share read-only across threads.
///
/// # Example
///
/// ```
/// use numerus_core::NumeralCodec;
///
/// let codec = NumeralCodec::new(8)?;
/// assert_eq!(codec.encode(112)?, "CLXX");
/// assert_eq!(codec.decode("XI")?, 9);
/// # Ok::<(), numerus_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct NumeralCodec {
    table: ValueTable,
}

impl NumeralCodec {
    /// Creates a codec for `base`.
    ///
    /// Fails with [`Error::InvalidBase`] when the base is outside
    /// [`MIN_BASE`]`..=`[`MAX_BASE`].
    pub fn new(base: u32) -> Result<Self> {
        let table = ValueTable::new(base)?;
        Ok(Self { table })
    }

    /// The codec's base
    pub fn base(&self) -> u32 {
        self.table.base()
    }

    /// The derived value table
    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    /// Largest value [`encode`](Self::encode) accepts
    pub fn max_value(&self) -> u64 {
        self.table.max_encodable()
    }

    /// Encodes `value` as a numeral string.
    ///
    /// Fails with [`Error::OutOfRange`] when `value` is zero or above
    /// [`max_value`](Self::max_value).
    pub fn encode(&self, value: u64) -> Result<String> {
        let max = self.max_value();
        if value == 0 || value > max {
            return Err(Error::OutOfRange { value, max });
        }

        let mut remaining = value;
        let mut numeral = String::new();
        for entry in self.table.entries() {
            while remaining >= entry.magnitude {
                numeral.push_str(entry.symbol);
                remaining -= entry.magnitude;
            }
        }
        debug_assert_eq!(remaining, 0);

        trace!("encoded {} as '{}' (base {})", value, numeral, self.base());
        Ok(numeral)
    }

    /// Decodes a numeral string back to its integer value.
    ///
    /// Fails with [`Error::MalformedNumeral`] when any part of the input is
    /// left unconsumed after one pass over the value table. This covers
    /// out-of-alphabet characters, illegal subtractive combinations such as
    /// `IC`, and repeated subtractive tokens such as `IVIV`.
    pub fn decode(&self, numeral: &str) -> Result<u64> {
        let bytes = numeral.as_bytes();
        let mut pos = 0;
        let mut total: u64 = 0;

        for entry in self.table.entries() {
            let token = entry.symbol.as_bytes();
            if token.len() == 1 {
                while bytes[pos..].starts_with(token) {
                    total = accumulate(total, entry.magnitude, numeral, pos)?;
                    pos += token.len();
                }
            } else if bytes[pos..].starts_with(token) {
                // subtractive tokens occur at most once per rank
                total = accumulate(total, entry.magnitude, numeral, pos)?;
                pos += token.len();
            }
        }

        if pos < bytes.len() {
            return Err(Error::malformed_numeral(
                numeral,
                format!("unconsumed digits '{}' at offset {}", &numeral[pos..], pos),
            ));
        }

        trace!("decoded '{}' as {} (base {})", numeral, total, self.base());
        Ok(total)
    }
}

/// Add a magnitude to the running total, rejecting u64 overflow.
///
/// Reachable only near [`MAX_BASE`] with non-canonical input such as a run of
/// `M`s above the encodable ceiling.
fn accumulate(total: u64, magnitude: u64, numeral: &str, pos: usize) -> Result<u64> {
    total.checked_add(magnitude).ok_or_else(|| {
        Error::malformed_numeral(numeral, format!("magnitude overflow at offset {}", pos))
    })
}

/// Encodes `value` in `base` with a single-use codec.
///
/// This is a convenience function for one-off conversions; construct a
/// [`NumeralCodec`] to reuse the derived table.
pub fn encode(base: u32, value: u64) -> Result<String> {
    NumeralCodec::new(base)?.encode(value)
}

/// Decodes `numeral` in `base` with a single-use codec.
pub fn decode(base: u32, numeral: &str) -> Result<u64> {
    NumeralCodec::new(base)?.decode(numeral)
}
