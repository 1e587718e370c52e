use geo::CoordFloat;

use crate::geo_traits::{LineStringTrait, PointTrait};

/// Coordinate-wise equality of two points.
///
/// With `allow_nan_equal`, a NaN coordinate compares equal to a NaN coordinate in the same
/// position.
#[inline]
pub fn point_eq<T: CoordFloat>(
    left: &impl PointTrait<T = T>,
    right: &impl PointTrait<T = T>,
    allow_nan_equal: bool,
) -> bool {
    let coord_eq = |l: T, r: T| l == r || (allow_nan_equal && l.is_nan() && r.is_nan());
    coord_eq(left.x(), right.x()) && coord_eq(left.y(), right.y())
}

/// Point-wise equality of two line strings, NaN coordinates comparing equal.
pub fn line_string_eq<T: CoordFloat>(
    left: &impl LineStringTrait<T = T>,
    right: &impl LineStringTrait<T = T>,
) -> bool {
    if left.num_points() != right.num_points() {
        return false;
    }

    left.points()
        .zip(right.points())
        .all(|(l, r)| point_eq(&l, &r, true))
}
