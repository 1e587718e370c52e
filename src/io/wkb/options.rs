use serde::{Deserialize, Serialize};

use crate::io::wkb::Endianness;

/// Options for encoding geometries as WKB.
///
/// The default writes in the host machine's byte order. Decoding takes no options: it always
/// follows the byte order flag stored in the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WKBWriteOptions {
    /// Byte order of the flag and every multi-byte field written
    pub byte_order: Endianness,
}

impl WKBWriteOptions {
    /// Options that write in the given byte order.
    pub fn new(byte_order: Endianness) -> Self {
        Self { byte_order }
    }

    /// Replace the byte order, keeping any other settings.
    ///
    /// ```
    /// use geowkb::io::wkb::{Endianness, WKBWriteOptions};
    /// use geowkb::scalar::Point;
    ///
    /// let options = WKBWriteOptions::default().with_byte_order(Endianness::BigEndian);
    /// assert_eq!(Point::new(1.0, 2.0).to_wkb_with_options(&options)[0], 0);
    /// ```
    pub fn with_byte_order(mut self, byte_order: Endianness) -> Self {
        self.byte_order = byte_order;
        self
    }
}
