use tracing::trace;

use crate::error::WKBResult;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::reader::{read_line_string, read_point};
use crate::scalar::Geometry;

/// Decode a WKB buffer into whichever geometry its type code names.
pub fn read_geometry(buf: &[u8]) -> WKBResult<Geometry> {
    let wkb_type = WKBType::from_buffer(buf)?;
    trace!(?wkb_type, len = buf.len(), "decoding WKB geometry");
    match wkb_type {
        WKBType::Point => read_point(buf).map(Geometry::Point),
        WKBType::LineString => read_line_string(buf).map(Geometry::LineString),
    }
}
