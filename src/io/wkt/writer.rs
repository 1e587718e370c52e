use std::fmt::{self, Write};

use crate::geo_traits::{LineStringTrait, PointTrait};

/// Write a number as its shortest round-trip decimal, with no trailing `.0`.
///
/// Magnitudes with a decimal exponent below -6 or of 21 and above use exponent form with an
/// explicit sign (`1e-7`, `1e+21`); everything else is written positionally.
fn write_num<W: Write>(writer: &mut W, value: f64) -> fmt::Result {
    if value.is_infinite() {
        return writer.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let scientific = format!("{value:e}");
    match scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)))
    {
        Some((mantissa, exp)) if exp >= 21 => write!(writer, "{mantissa}e+{exp}"),
        Some((mantissa, exp)) if exp < -6 => write!(writer, "{mantissa}e{exp}"),
        _ => write!(writer, "{value}"),
    }
}

/// Write `x y`.
fn write_coord<W: Write>(writer: &mut W, coord: &impl PointTrait<T = f64>) -> fmt::Result {
    write_num(writer, coord.x())?;
    writer.write_char(' ')?;
    write_num(writer, coord.y())
}

/// Write a Point as `POINT (x y)`.
pub fn write_point<W: Write>(writer: &mut W, geom: &impl PointTrait<T = f64>) -> fmt::Result {
    writer.write_str("POINT (")?;
    write_coord(writer, geom)?;
    writer.write_char(')')
}

/// Write a LineString as `LINESTRING (x0 y0, x1 y1, ...)`, or `LINESTRING EMPTY` when it has no
/// points.
pub fn write_line_string<W: Write>(
    writer: &mut W,
    geom: &impl LineStringTrait<T = f64>,
) -> fmt::Result {
    if geom.num_points() == 0 {
        return writer.write_str("LINESTRING EMPTY");
    }

    writer.write_str("LINESTRING (")?;
    for (i, point) in geom.points().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_coord(writer, &point)?;
    }
    writer.write_char(')')
}

/// Render a Point as a WKT string.
pub fn point_to_wkt(geom: &impl PointTrait<T = f64>) -> String {
    let mut out = String::new();
    write_point(&mut out, geom).expect("writing to a String cannot fail");
    out
}

/// Render a LineString as a WKT string.
pub fn line_string_to_wkt(geom: &impl LineStringTrait<T = f64>) -> String {
    let mut out = String::new();
    write_line_string(&mut out, geom).expect("writing to a String cannot fail");
    out
}
