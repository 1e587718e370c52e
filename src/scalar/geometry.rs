use std::fmt;

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

use crate::error::WKBResult;
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::{WKBType, WKBWriteOptions};
use crate::scalar::{LineString, Point};

/// Any geometry this crate can encode or decode.
#[derive(Debug, Clone, PartialEq, EnumAsInner, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
}

impl Geometry {
    /// Decode whichever geometry type the WKB buffer's type code names.
    pub fn from_wkb(buf: &[u8]) -> WKBResult<Self> {
        read_geometry(buf)
    }

    pub fn to_wkb(&self) -> Vec<u8> {
        self.to_wkb_with_options(&WKBWriteOptions::default())
    }

    pub fn to_wkb_with_options(&self, options: &WKBWriteOptions) -> Vec<u8> {
        match self {
            Geometry::Point(geom) => geom.to_wkb_with_options(options),
            Geometry::LineString(geom) => geom.to_wkb_with_options(options),
        }
    }

    pub fn wkb_type(&self) -> WKBType {
        match self {
            Geometry::Point(_) => WKBType::Point,
            Geometry::LineString(_) => WKBType::LineString,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(geom) => fmt::Display::fmt(geom, f),
            Geometry::LineString(geom) => fmt::Display::fmt(geom, f),
        }
    }
}
