use crate::line_string;
use crate::scalar::{LineString, Point};

pub(crate) fn ls0() -> LineString {
    line_string![Point::new(0., 1.), Point::new(1., 2.)]
}

pub(crate) fn ls1() -> LineString {
    line_string![
        Point::new(658., 8.1234567),
        Point::new(1., 3.),
        Point::new(-1., 111.)
    ]
}

pub(crate) fn ls_empty() -> LineString {
    line_string![]
}
