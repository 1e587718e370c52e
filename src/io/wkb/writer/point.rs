use crate::geo_traits::PointTrait;
use crate::io::wkb::byte_order::Endianness;
use crate::io::wkb::common::{WKBType, COORD_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::{write_coord, write_header};
use crate::io::wkb::WKBWriteOptions;

/// The byte length of a WKBPoint
pub const fn point_wkb_size() -> usize {
    HEADER_BYTES + COORD_BYTES
}

/// Write a Point geometry encoded as WKB into `buf` at `offset`, returning the bytes written.
///
/// # Panics
///
/// If fewer than [`point_wkb_size`] bytes remain in `buf` from `offset`.
pub fn write_point_as_wkb(
    buf: &mut [u8],
    offset: usize,
    geom: &impl PointTrait<T = f64>,
    byte_order: Endianness,
) -> usize {
    let header = write_header(buf, offset, WKBType::Point, byte_order);
    header + write_coord(buf, offset + header, geom, byte_order)
}

/// Encode a Point geometry as a freshly allocated WKB buffer.
pub fn point_to_wkb(geom: &impl PointTrait<T = f64>, options: &WKBWriteOptions) -> Vec<u8> {
    let mut buf = vec![0u8; point_wkb_size()];
    write_point_as_wkb(&mut buf, 0, geom, options.byte_order);
    buf
}
