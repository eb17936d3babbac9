use std::sync::Arc;

use winit::window::Window;

use crate::time::FrameTime;
use crate::window::RuntimeCtx;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Carries the window handle rather than a GPU context: which GPU resources
/// exist at any moment is the application's business (each sketch acquires
/// and releases its own device), so the runtime only provides the surface to
/// build them against.
pub struct FrameCtx<'a> {
    /// Shared window handle, cloneable into a surface-owning GPU context.
    pub window: &'a Arc<Window>,

    /// Timing for this frame.
    pub time: FrameTime,

    /// Buffered runtime commands, applied after the callback returns.
    pub runtime: &'a mut RuntimeCtx,
}
