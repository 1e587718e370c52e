use std::fmt;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::algorithm::eq::line_string_eq;
use crate::error::WKBResult;
use crate::geo_traits::LineStringTrait;
use crate::io::wkb::reader::read_line_string;
use crate::io::wkb::writer::{line_string_to_wkb, line_string_wkb_size};
use crate::io::wkb::WKBWriteOptions;
use crate::io::wkt::line_string_to_wkt;
use crate::scalar::Point;

/// An ordered, possibly empty, sequence of points defining a path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// A line string with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }

    /// Decode a line string from a WKB buffer, honoring the buffer's own byte order flag.
    pub fn from_wkb(buf: &[u8]) -> WKBResult<Self> {
        read_line_string(buf)
    }

    /// The number of bytes [`to_wkb`](Self::to_wkb) produces: `9 + 16 * len`.
    pub fn wkb_size(&self) -> usize {
        line_string_wkb_size(self.points.len())
    }

    /// Encode this line string as WKB in the host byte order.
    ///
    /// # Panics
    ///
    /// If the line string holds more than `u32::MAX` points.
    pub fn to_wkb(&self) -> Vec<u8> {
        self.to_wkb_with_options(&WKBWriteOptions::default())
    }

    /// # Panics
    ///
    /// If the line string holds more than `u32::MAX` points.
    pub fn to_wkb_with_options(&self, options: &WKBWriteOptions) -> Vec<u8> {
        line_string_to_wkb(self, options)
    }
}

impl LineStringTrait for LineString {
    type T = f64;
    type ItemType<'a> = &'a Point where Self: 'a;
    type Iter<'a> = Iter<'a, Point> where Self: 'a;

    fn points(&self) -> Self::Iter<'_> {
        self.points.iter()
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.points.get(i)
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        line_string_eq(self, other)
    }
}

/// Renders WKT, honoring the formatter's width, fill and alignment.
impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&line_string_to_wkt(self))
    }
}

impl From<Vec<Point>> for LineString {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl From<&[Point]> for LineString {
    fn from(value: &[Point]) -> Self {
        Self::new(value.to_vec())
    }
}

impl<const N: usize> From<[Point; N]> for LineString {
    fn from(value: [Point; N]) -> Self {
        Self::new(value.into())
    }
}

impl From<Point> for LineString {
    fn from(value: Point) -> Self {
        Self::new(vec![value])
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for LineString {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<LineString> for geo::LineString {
    fn from(value: LineString) -> Self {
        geo::LineString::new(value.points.into_iter().map(geo::Coord::from).collect())
    }
}

/// Creates a [`LineString`] from zero or more [`Point`]s, in path order.
///
/// ```
/// use geowkb::line_string;
/// use geowkb::scalar::Point;
///
/// let line = line_string![Point::new(1.0, 3.0), Point::new(-1.0, 111.0)];
/// assert_eq!(line.to_string(), "LINESTRING (1 3, -1 111)");
/// assert!(line_string![].is_empty());
/// ```
#[macro_export]
macro_rules! line_string {
    () => {
        $crate::scalar::LineString::empty()
    };
    ($($point:expr),+ $(,)?) => {
        $crate::scalar::LineString::new(vec![$($point),+])
    };
}
