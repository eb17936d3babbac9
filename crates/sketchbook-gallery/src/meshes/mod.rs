//! Static mesh assets shared by samples.
//!
//! Read-only interleaved vertex data plus the byte-layout constants needed
//! to describe it to a pipeline.

pub mod cube;
