use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::eq::point_eq;
use crate::error::WKBResult;
use crate::geo_traits::PointTrait;
use crate::io::wkb::reader::read_point;
use crate::io::wkb::writer::point_to_wkb;
use crate::io::wkb::WKBWriteOptions;
use crate::io::wkt::point_to_wkt;

/// A 2D point with `f64` coordinates.
///
/// Coordinates are stored exactly as given. Any value, including NaN and the infinities, is
/// accepted and encodes without loss.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Decode a point from a WKB buffer, honoring the buffer's own byte order flag.
    pub fn from_wkb(buf: &[u8]) -> WKBResult<Self> {
        read_point(buf)
    }

    /// Encode this point as WKB in the host byte order.
    pub fn to_wkb(&self) -> Vec<u8> {
        self.to_wkb_with_options(&WKBWriteOptions::default())
    }

    pub fn to_wkb_with_options(&self, options: &WKBWriteOptions) -> Vec<u8> {
        point_to_wkb(self, options)
    }
}

impl PointTrait for Point {
    type T = f64;

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        point_eq(self, other, true)
    }
}

/// Renders WKT, honoring the formatter's width, fill and alignment.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&point_to_wkt(self))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<geo::Coord> for Point {
    fn from(value: geo::Coord) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Self::new(value.x(), value.y())
    }
}

impl From<Point> for geo::Coord {
    fn from(value: Point) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        geo::Point::new(value.x, value.y)
    }
}
