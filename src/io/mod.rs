//! Readers and writers for the Well-Known Binary and Well-Known Text encodings.

pub mod wkb;
pub mod wkt;
