use std::sync::Arc;

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use sketchbook_engine::device::{Gpu, GpuConfig};
use sketchbook_engine::time::FrameTime;

/// A running sketch.
///
/// Each sample owns its GPU context and every resource built on it. The
/// shell calls `frame` once per display refresh while the sample is active,
/// and `cleanup` exactly once when it stops being active; after `cleanup`
/// no further calls are made.
pub trait Sample {
    /// Renders one frame: update per-frame uniforms, issue one draw.
    ///
    /// An `Err` is treated as unrecoverable for this sample; the shell
    /// surfaces it and tears the sample down.
    fn frame(&mut self, time: FrameTime) -> Result<()>;

    /// The drawable size changed; reconfigure the surface and any
    /// size-dependent attachments.
    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let _ = new_size;
    }

    /// Releases GPU resources. The frame loop has already stopped for this
    /// sample when the shell calls this; consuming the box makes a
    /// use-after-cleanup unrepresentable.
    fn cleanup(self: Box<Self>);
}

/// Constructor signature every sample exposes to the registry.
pub type Setup = fn(Arc<Window>) -> Result<Box<dyn Sample>>;

/// Shared GPU bootstrap used by every sample's setup.
///
/// Blocks the UI thread on the async acquisition chain; failures carry the
/// step that failed (no GPU backend, no adapter, no device, no surface
/// format) regardless of which sample asked.
pub fn acquire_gpu(window: Arc<Window>) -> Result<Gpu> {
    pollster::block_on(Gpu::new(window, GpuConfig::default()))
}
