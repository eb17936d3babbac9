//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single gallery window, and drives an
//! [`App`](crate::core::App) with events and per-frame callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
