//! Encode and decode 2D points and line strings as Well-Known Binary (WKB) and render them as
//! Well-Known Text (WKT).
//!
//! ```
//! use geowkb::io::wkb::{Endianness, WKBWriteOptions};
//! use geowkb::scalar::{LineString, Point};
//!
//! let line = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, -1.2)]);
//! let options = WKBWriteOptions::new(Endianness::BigEndian);
//! let buf = line.to_wkb_with_options(&options);
//! assert_eq!(buf.len(), 9 + 16 * 2);
//! assert_eq!(LineString::from_wkb(&buf).unwrap(), line);
//! assert_eq!(line.to_string(), "LINESTRING (0 0, 1 -1.2)");
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{WKBError, WKBResult};
pub use scalar::{Geometry, LineString, Point};

pub mod algorithm;
pub mod error;
pub mod geo_traits;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
