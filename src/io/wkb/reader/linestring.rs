use tracing::debug;

use crate::error::{WKBError, WKBResult};
use crate::io::wkb::byte_order::read_u32;
use crate::io::wkb::common::{read_header, WKBType, COORD_BYTES, HEADER_BYTES};
use crate::io::wkb::reader::read_coord;
use crate::scalar::LineString;

/// Decode a WKB LineString.
///
/// The points follow the count as bare `(x, y)` pairs; the whole payload length is checked
/// before any point is read.
pub fn read_line_string(buf: &[u8]) -> WKBResult<LineString> {
    let byte_order = read_header(buf, WKBType::LineString)?;
    let num_points = read_u32(buf, HEADER_BYTES, byte_order)?;

    let coords_start = HEADER_BYTES + 4;
    let coords_len = usize::try_from(num_points)
        .ok()
        .and_then(|n| n.checked_mul(COORD_BYTES))
        .unwrap_or(usize::MAX);
    let available = buf.len() - coords_start;
    if available < coords_len {
        debug!(
            num_points,
            needed = coords_len,
            available,
            "rejecting truncated WKB LineString"
        );
        return Err(WKBError::BufferUnderrun {
            offset: coords_start,
            needed: coords_len,
            available,
        });
    }

    let points = buf[coords_start..coords_start + coords_len]
        .chunks_exact(COORD_BYTES)
        .map(|coord| read_coord(coord, 0, byte_order))
        .collect::<WKBResult<Vec<_>>>()?;
    Ok(LineString::new(points))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::Point;
    use crate::test::hex_to_bytes;
    use crate::test::linestring::ls0;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn line_string_round_trip() {
        let geom: geo::LineString = ls0().into();
        let buf = geo::Geometry::LineString(geom)
            .to_wkb(CoordDimensions::xy())
            .unwrap();

        assert_eq!(read_line_string(&buf).unwrap(), ls0());
    }

    #[test]
    fn from_reference_buffers() {
        for (hex, expected) in [
            (
                "000000000200000002000000000000000000000000000000003ff0000000000000bff3333333333333",
                vec![Point::new(0.0, 0.0), Point::new(1.0, -1.2)],
            ),
            (
                "000000000200000001c08f4000000000004161249b3ff7ced9",
                vec![Point::new(-1000.0, 8987865.999)],
            ),
            (
                "0102000000030000000000000000908440b5f171b7353f2040000000000000f03f0000000000000840000000000000f0bf0000000000c05b40",
                vec![
                    Point::new(658.0, 8.1234567),
                    Point::new(1.0, 3.0),
                    Point::new(-1.0, 111.0),
                ],
            ),
        ] {
            let line = read_line_string(&hex_to_bytes(hex)).unwrap();
            assert_eq!(line.len(), expected.len());
            for (decoded, expected) in line.points().iter().zip(&expected) {
                assert_eq!(decoded.x().to_bits(), expected.x().to_bits());
                assert_eq!(decoded.y().to_bits(), expected.y().to_bits());
                assert_eq!(decoded.to_string(), expected.to_string());
            }
        }
    }

    #[test]
    fn zero_points() {
        for hex in ["000000000200000000", "010200000000000000"] {
            let line = read_line_string(&hex_to_bytes(hex)).unwrap();
            assert!(line.is_empty());
        }
    }

    #[test]
    fn truncated_payload() {
        let buf = hex_to_bytes(
            "000000000200000002000000000000000000000000000000003ff0000000000000bff3333333333333",
        );
        assert_eq!(
            read_line_string(&buf[..40]).unwrap_err(),
            WKBError::BufferUnderrun {
                offset: 9,
                needed: 32,
                available: 31
            }
        );
        assert!(matches!(
            read_line_string(&buf[..7]),
            Err(WKBError::BufferUnderrun { offset: 5, .. })
        ));
    }

    #[test]
    fn huge_count_is_an_underrun() {
        let buf = hex_to_bytes("0102000000ffffffff000000000000f03f000000000000f03f");
        assert!(matches!(
            read_line_string(&buf),
            Err(WKBError::BufferUnderrun {
                offset: 9,
                available: 16,
                ..
            })
        ));
    }

    #[test]
    fn rejects_point() {
        let buf = hex_to_bytes("0000000001c05ec00000000000bff0000000000000");
        assert_eq!(
            read_line_string(&buf).unwrap_err(),
            WKBError::InvalidGeometryType {
                expected: WKBType::LineString,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_unknown_byte_order() {
        let buf = hex_to_bytes("020200000000000000");
        assert_eq!(
            read_line_string(&buf).unwrap_err(),
            WKBError::InvalidByteOrder(2)
        );
    }
}
