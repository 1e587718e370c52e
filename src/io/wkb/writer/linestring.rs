use crate::geo_traits::LineStringTrait;
use crate::io::wkb::byte_order::{write_u32, Endianness};
use crate::io::wkb::common::{WKBType, COORD_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::{write_coord, write_header};
use crate::io::wkb::WKBWriteOptions;

/// The byte length of a WKBLineString with `num_points` points
pub const fn line_string_wkb_size(num_points: usize) -> usize {
    HEADER_BYTES + 4 + (num_points * COORD_BYTES)
}

/// Write a LineString geometry encoded as WKB into `buf` at `offset`, returning the bytes
/// written.
///
/// Points are written as bare `(x, y)` pairs after the count; they carry no header of their own.
///
/// # Panics
///
/// If the line string holds more than `u32::MAX` points, or if fewer than
/// [`line_string_wkb_size`] bytes remain in `buf` from `offset`.
pub fn write_line_string_as_wkb(
    buf: &mut [u8],
    offset: usize,
    geom: &impl LineStringTrait<T = f64>,
    byte_order: Endianness,
) -> usize {
    let num_points = geom.num_points();
    assert!(
        u32::try_from(num_points).is_ok(),
        "WKB LineString cannot hold {num_points} points"
    );

    let mut position = offset + write_header(buf, offset, WKBType::LineString, byte_order);
    write_u32(buf, position, num_points as u32, byte_order);
    position += 4;

    for point in geom.points() {
        position += write_coord(buf, position, &point, byte_order);
    }

    position - offset
}

/// Encode a LineString geometry as a freshly allocated WKB buffer.
///
/// # Panics
///
/// If the line string holds more than `u32::MAX` points.
pub fn line_string_to_wkb(
    geom: &impl LineStringTrait<T = f64>,
    options: &WKBWriteOptions,
) -> Vec<u8> {
    let mut buf = vec![0u8; line_string_wkb_size(geom.num_points())];
    write_line_string_as_wkb(&mut buf, 0, geom, options.byte_order);
    buf
}
