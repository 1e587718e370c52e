//! Decoders from WKB buffers to owned geometries.
//!
//! Every decoder trusts the byte order flag at the start of the buffer and checks the type code
//! before reading any payload. Bytes after the end of the geometry are ignored.

mod geometry;
mod linestring;
mod point;

pub use geometry::read_geometry;
pub use linestring::read_line_string;
pub use point::read_point;

use crate::error::WKBResult;
use crate::io::wkb::byte_order::{read_f64, Endianness};
use crate::scalar::Point;

/// Read an `(x, y)` pair with no header at `offset`.
pub(crate) fn read_coord(buf: &[u8], offset: usize, byte_order: Endianness) -> WKBResult<Point> {
    let x = read_f64(buf, offset, byte_order)?;
    let y = read_f64(buf, offset + 8, byte_order)?;
    Ok(Point::new(x, y))
}
