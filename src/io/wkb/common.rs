use num_enum::{IntoPrimitive, TryFromPrimitive};
use tracing::debug;

use crate::error::{WKBError, WKBResult};
use crate::io::wkb::byte_order::{read_u32, read_u8, Endianness};

/// Bytes taken by the byte order flag and the geometry type code.
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// Bytes taken by one 2D coordinate: two f64s.
pub(crate) const COORD_BYTES: usize = 2 * 8;

/// The WKB geometry types supported by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
}

impl WKBType {
    /// Construct from a byte slice representing a WKB geometry
    pub fn from_buffer(buf: &[u8]) -> WKBResult<Self> {
        let (_, type_code) = read_type_code(buf)?;
        Self::try_from_primitive(type_code).map_err(|_| {
            debug!(found = type_code, "rejecting WKB buffer with unsupported geometry type");
            WKBError::UnsupportedGeometryType(type_code)
        })
    }
}

/// Read the byte order flag and the raw geometry type code.
pub(crate) fn read_type_code(buf: &[u8]) -> WKBResult<(Endianness, u32)> {
    let byte_order = Endianness::try_from(read_u8(buf, 0)?)?;
    let type_code = read_u32(buf, 1, byte_order)?;
    Ok((byte_order, type_code))
}

/// Read the header of a WKB geometry, checking that it holds the `expected` type.
///
/// Returns the byte order every later field of the geometry is stored in.
pub(crate) fn read_header(buf: &[u8], expected: WKBType) -> WKBResult<Endianness> {
    let (byte_order, found) = read_type_code(buf)?;
    if found != u32::from(expected) {
        debug!(
            expected = ?expected,
            found,
            "rejecting WKB buffer with mismatched geometry type"
        );
        return Err(WKBError::InvalidGeometryType { expected, found });
    }
    Ok(byte_order)
}
