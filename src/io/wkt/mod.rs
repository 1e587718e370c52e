//! Rendering geometries as Well-Known Text.

mod writer;

pub use writer::{line_string_to_wkt, point_to_wkt, write_line_string, write_point};
