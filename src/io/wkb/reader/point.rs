use crate::error::WKBResult;
use crate::io::wkb::common::{read_header, WKBType, HEADER_BYTES};
use crate::io::wkb::reader::read_coord;
use crate::scalar::Point;

/// Decode a WKB Point.
///
/// See page 66 of <https://portal.ogc.org/files/?artifact_id=25355>.
pub fn read_point(buf: &[u8]) -> WKBResult<Point> {
    let byte_order = read_header(buf, WKBType::Point)?;
    read_coord(buf, HEADER_BYTES, byte_order)
}
