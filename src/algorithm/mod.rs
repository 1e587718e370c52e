//! Algorithms implemented on the geometry traits.

pub mod eq;
