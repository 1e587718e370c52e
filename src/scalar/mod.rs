//! Owned geometry values: [`Point`], [`LineString`] and the [`Geometry`] enum over both.

pub use geometry::Geometry;
pub use linestring::LineString;
pub use point::Point;

mod geometry;
mod linestring;
mod point;
