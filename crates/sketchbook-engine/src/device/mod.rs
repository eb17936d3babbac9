//! GPU device + surface management.
//!
//! This module is the shared acquisition path used by every sketch:
//! - creates the wgpu Instance/Adapter/Device/Queue
//! - creates & configures the Surface (swapchain) against the window
//! - acquires frames and provides encoders/views for rendering
//!
//! The surface holds the window through an `Arc`, so a `Gpu` can be owned
//! outright by whichever sketch created it and released when that sketch is
//! torn down.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuConfig;
