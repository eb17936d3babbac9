//! Sample modules, one per sketch.
//!
//! Each module exposes a single `setup` function matching
//! [`Setup`](crate::sample::Setup): acquire a GPU context against the
//! window, build the pipeline and buffers, and return the running sample.
//! Samples never depend on each other's internals.

pub mod hello_triangle;
pub mod rotating_cube;
