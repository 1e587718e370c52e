use geo::{Coord, CoordNum, LineString};
use std::slice::Iter;

use super::point::PointTrait;

/// A trait for accessing data from a generic LineString.
pub trait LineStringTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + PointTrait<T = Self::T>
    where
        Self: 'a;
    type Iter<'a>: ExactSizeIterator<Item = Self::ItemType<'a>>
    where
        Self: 'a;

    /// An iterator over the points in this LineString, in path order
    fn points(&self) -> Self::Iter<'_>;

    /// The number of points in this LineString
    fn num_points(&self) -> usize;

    /// Access to a specified point in this LineString
    /// Will return None if the provided index is out of bounds
    fn point(&self, i: usize) -> Option<Self::ItemType<'_>>;
}

impl<T: CoordNum> LineStringTrait for LineString<T> {
    type T = T;
    type ItemType<'a> = &'a Coord<Self::T> where Self: 'a;
    type Iter<'a> = Iter<'a, Coord<Self::T>> where Self: 'a;

    fn points(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    fn point(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }
}
