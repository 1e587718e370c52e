//! Encoders from anything implementing the geometry traits to WKB.
//!
//! Each encoder computes the exact output size first, allocates it once, and fills it with
//! offset-addressed writes.

mod linestring;
mod point;

pub use linestring::{line_string_to_wkb, line_string_wkb_size, write_line_string_as_wkb};
pub use point::{point_to_wkb, point_wkb_size, write_point_as_wkb};

use crate::geo_traits::PointTrait;
use crate::io::wkb::byte_order::{write_f64, write_u32, write_u8, Endianness};
use crate::io::wkb::common::{WKBType, COORD_BYTES, HEADER_BYTES};

/// Write the byte order flag and the geometry type code at `offset`.
fn write_header(
    buf: &mut [u8],
    offset: usize,
    wkb_type: WKBType,
    byte_order: Endianness,
) -> usize {
    write_u8(buf, offset, byte_order.into());
    write_u32(buf, offset + 1, wkb_type.into(), byte_order);
    HEADER_BYTES
}

/// Write an `(x, y)` pair with no header at `offset`.
fn write_coord(
    buf: &mut [u8],
    offset: usize,
    coord: &impl PointTrait<T = f64>,
    byte_order: Endianness,
) -> usize {
    write_f64(buf, offset, coord.x(), byte_order);
    write_f64(buf, offset + 8, coord.y(), byte_order);
    COORD_BYTES
}
