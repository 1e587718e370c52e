//! Reading and writing 2D Points and LineStrings as ISO WKB.
//!
//! Layout of every geometry: a byte order flag (0 = big-endian, 1 = little-endian), a 4-byte
//! geometry type code, then the payload. All multi-byte fields use the order named by the flag.

mod byte_order;
mod common;
mod options;
pub mod reader;
pub mod writer;

pub use byte_order::{read_f64, read_u32, read_u8, write_f64, write_u32, write_u8, Endianness};
pub use common::WKBType;
pub use options::WKBWriteOptions;
