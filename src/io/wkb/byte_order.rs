//! Byte order detection and offset-addressed number I/O for WKB buffers.
//!
//! Readers are bounds-checked and return [`WKBError::BufferUnderrun`]. Writers assume the
//! caller sized the buffer up front and panic if it is too short.

use byteorder::ByteOrder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WKBError, WKBResult};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// The native byte order of the machine this process runs on.
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::BigEndian
        } else {
            Endianness::LittleEndian
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Self::host()
    }
}

impl TryFrom<u8> for Endianness {
    type Error = WKBError;

    fn try_from(value: u8) -> WKBResult<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => {
                debug!(flag = other, "rejecting WKB buffer with unknown byte order flag");
                Err(WKBError::InvalidByteOrder(other))
            }
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// Return the `needed` bytes starting at `offset`, or an underrun error.
fn field(buf: &[u8], offset: usize, needed: usize) -> WKBResult<&[u8]> {
    let available = buf.len().saturating_sub(offset);
    if available < needed {
        return Err(WKBError::BufferUnderrun {
            offset,
            needed,
            available,
        });
    }
    Ok(&buf[offset..offset + needed])
}

/// Read a single byte at `offset`.
pub fn read_u8(buf: &[u8], offset: usize) -> WKBResult<u8> {
    Ok(field(buf, offset, 1)?[0])
}

/// Read a 4-byte unsigned integer at `offset` in the given byte order.
pub fn read_u32(buf: &[u8], offset: usize, byte_order: Endianness) -> WKBResult<u32> {
    let bytes = field(buf, offset, 4)?;
    Ok(match byte_order {
        Endianness::BigEndian => byteorder::BigEndian::read_u32(bytes),
        Endianness::LittleEndian => byteorder::LittleEndian::read_u32(bytes),
    })
}

/// Read an IEEE-754 double at `offset` in the given byte order.
pub fn read_f64(buf: &[u8], offset: usize, byte_order: Endianness) -> WKBResult<f64> {
    let bytes = field(buf, offset, 8)?;
    Ok(match byte_order {
        Endianness::BigEndian => byteorder::BigEndian::read_f64(bytes),
        Endianness::LittleEndian => byteorder::LittleEndian::read_f64(bytes),
    })
}

/// Write a single byte at `offset`.
///
/// # Panics
///
/// If `buf` has no byte at `offset`.
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) {
    buf[offset] = value;
}

/// Write a 4-byte unsigned integer at `offset` in the given byte order.
///
/// # Panics
///
/// If fewer than 4 bytes remain in `buf` from `offset`.
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32, byte_order: Endianness) {
    let bytes = &mut buf[offset..offset + 4];
    match byte_order {
        Endianness::BigEndian => byteorder::BigEndian::write_u32(bytes, value),
        Endianness::LittleEndian => byteorder::LittleEndian::write_u32(bytes, value),
    }
}

/// Write an IEEE-754 double at `offset` in the given byte order.
///
/// # Panics
///
/// If fewer than 8 bytes remain in `buf` from `offset`.
pub fn write_f64(buf: &mut [u8], offset: usize, value: f64, byte_order: Endianness) {
    let bytes = &mut buf[offset..offset + 8];
    match byte_order {
        Endianness::BigEndian => byteorder::BigEndian::write_f64(bytes, value),
        Endianness::LittleEndian => byteorder::LittleEndian::write_f64(bytes, value),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_matches_target() {
        #[cfg(target_endian = "little")]
        assert_eq!(Endianness::host(), Endianness::LittleEndian);
        #[cfg(target_endian = "big")]
        assert_eq!(Endianness::host(), Endianness::BigEndian);

        assert_eq!(Endianness::default(), Endianness::host());
    }

    #[test]
    fn flag_byte() {
        assert_eq!(u8::from(Endianness::BigEndian), 0);
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
        assert_eq!(
            Endianness::try_from(2).unwrap_err(),
            WKBError::InvalidByteOrder(2)
        );
    }

    #[test]
    fn read_at_offset() {
        let buf = [0xff, 0x00, 0x00, 0x00, 0x02, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0];
        assert_eq!(read_u8(&buf, 0).unwrap(), 0xff);
        assert_eq!(read_u32(&buf, 1, Endianness::BigEndian).unwrap(), 2);
        assert_eq!(
            read_u32(&buf, 1, Endianness::LittleEndian).unwrap(),
            0x0200_0000
        );
        assert_eq!(read_f64(&buf, 5, Endianness::BigEndian).unwrap(), 1.0);
    }

    #[test]
    fn read_past_end() {
        let buf = [0u8; 10];
        assert_eq!(
            read_f64(&buf, 5, Endianness::LittleEndian).unwrap_err(),
            WKBError::BufferUnderrun {
                offset: 5,
                needed: 8,
                available: 5
            }
        );
        assert_eq!(
            read_u32(&buf, 12, Endianness::BigEndian).unwrap_err(),
            WKBError::BufferUnderrun {
                offset: 12,
                needed: 4,
                available: 0
            }
        );
        assert!(read_u8(&[], 0).is_err());
    }

    #[test]
    fn write_then_read() {
        let mut buf = [0u8; 13];
        write_u32(&mut buf, 1, 2, Endianness::LittleEndian);
        write_f64(&mut buf, 5, -1.2, Endianness::LittleEndian);
        assert_eq!(&buf[1..5], &[2, 0, 0, 0]);
        assert_eq!(&buf[5..], &[0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0xf3, 0xbf]);

        write_f64(&mut buf, 5, -1.2, Endianness::BigEndian);
        assert_eq!(&buf[5..], &[0xbf, 0xf3, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33]);
        assert_eq!(read_f64(&buf, 5, Endianness::BigEndian).unwrap(), -1.2);
    }

    #[test]
    fn nan_bits_survive() {
        let mut buf = [0u8; 8];
        let value = f64::from_bits(0x7ff8_0000_0000_0001);
        write_f64(&mut buf, 0, value, Endianness::BigEndian);
        let read = read_f64(&buf, 0, Endianness::BigEndian).unwrap();
        assert_eq!(read.to_bits(), value.to_bits());
    }
}
