//! Error types for the numerus-core library.
//!
//! This module provides error handling using the `thiserror` crate, with one
//! variant per failure mode of the codec. All variants are recoverable; the
//! library never catches its own errors and never prints.

use thiserror::Error;

/// Result type alias for numerus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all numerus operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Requested base outside the supported range
    #[error("invalid base {base}: must be between {min} and {max}")]
    InvalidBase {
        /// The rejected base
        base: u32,
        /// Smallest supported base
        min: u32,
        /// Largest supported base
        max: u32,
    },

    /// Value outside the representable range of the numeral system
    #[error("value {value} out of range: must be between 1 and {max}")]
    OutOfRange {
        /// The rejected value
        value: u64,
        /// Largest representable value for the codec's base
        max: u64,
    },

    /// Numeral string that does not decode against the value table
    #[error("malformed numeral '{numeral}': {details}")]
    MalformedNumeral {
        /// The input that failed to decode
        numeral: String,
        /// Detailed description of the issue
        details: String,
    },
}

impl Error {
    /// Creates a new malformed numeral error
    pub fn malformed_numeral(numeral: impl Into<String>, details: impl Into<String>) -> Self {
        Self::MalformedNumeral {
            numeral: numeral.into(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_display() {
        let err = Error::InvalidBase {
            base: 6,
            min: 7,
            max: 1_664_510,
        };
        assert!(err.to_string().contains("invalid base 6"));
        assert!(err.to_string().contains("between 7 and"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            value: 0,
            max: 4000,
        };
        assert!(err.to_string().contains("value 0 out of range"));
        assert!(err.to_string().contains("4000"));
    }

    #[test]
    fn test_malformed_numeral_display() {
        let err = Error::malformed_numeral("IC", "unconsumed digits 'IC' at offset 0");
        assert!(err.to_string().contains("malformed numeral 'IC'"));
        assert!(err.to_string().contains("offset 0"));
    }
}
