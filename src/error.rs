//! Defines [`WKBError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::io::wkb::WKBType;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WKBError {
    /// Fewer bytes remain in the buffer than the field being read requires.
    #[error("WKB buffer underrun: need {needed} bytes at offset {offset}, but only {available} remain")]
    BufferUnderrun {
        /// Offset of the field that could not be read
        offset: usize,
        /// Bytes the field requires from `offset`
        needed: usize,
        /// Bytes actually left from `offset`
        available: usize,
    },

    /// The geometry type code does not match the decoder being invoked.
    #[error("Incorrect WKB geometry type: expected {expected:?}, found type code {found}")]
    InvalidGeometryType {
        /// The geometry type the decoder handles
        expected: WKBType,
        /// The raw type code read from the buffer
        found: u32,
    },

    /// The leading byte-order flag is neither 0 (big-endian) nor 1 (little-endian).
    #[error("Unexpected WKB byte order flag: {0}")]
    InvalidByteOrder(u8),

    /// The geometry type code is not one this crate can decode.
    #[error("Unsupported WKB geometry type code: {0}")]
    UnsupportedGeometryType(u32),
}

/// Crate-specific result type.
pub type WKBResult<T> = std::result::Result<T, WKBError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let underrun = WKBError::BufferUnderrun {
            offset: 5,
            needed: 8,
            available: 3,
        };
        assert_eq!(
            underrun.to_string(),
            "WKB buffer underrun: need 8 bytes at offset 5, but only 3 remain"
        );

        let wrong_type = WKBError::InvalidGeometryType {
            expected: WKBType::LineString,
            found: 1,
        };
        assert_eq!(
            wrong_type.to_string(),
            "Incorrect WKB geometry type: expected LineString, found type code 1"
        );

        assert_eq!(
            WKBError::InvalidByteOrder(7).to_string(),
            "Unexpected WKB byte order flag: 7"
        );
    }
}
