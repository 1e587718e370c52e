//! Traits for reading coordinates out of point and line string types, so the WKB and WKT
//! writers can accept this crate's scalars and `geo` geometries alike.

pub use line_string::LineStringTrait;
pub use point::PointTrait;

mod line_string;
mod point;
