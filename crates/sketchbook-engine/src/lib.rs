//! Sketchbook engine crate.
//!
//! Owns the platform + GPU runtime pieces shared by every sketch: device
//! acquisition, the window/event loop, frame timing, and logging setup.

pub mod core;
pub mod device;
pub mod logging;
pub mod time;
pub mod window;
